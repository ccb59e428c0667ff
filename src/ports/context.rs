use crate::domain::DataMap;

/// Port for supplying named data to templates.
///
/// `accepts` and `provide` must be consistent: whenever `accepts`
/// returns true for a template name, `provide` must return usable data
/// for that name. Calling `provide` for a name the context does not
/// accept is implementation-defined; implementations in this crate
/// return an empty map. Callers should guard with `accepts` first.
pub trait Context: Send + Sync {
    /// Whether this context holds data for the named template.
    ///
    /// Pure predicate; must not mutate observable state.
    fn accepts(&self, template: &str) -> bool;

    /// Data to merge into the named template's rendering scope.
    fn provide(&self, template: &str) -> DataMap;
}
