use crate::domain::DataMap;
use crate::ports::Context;

/// Map-backed context.
///
/// A *global* context accepts every template; a *bound* context accepts
/// only the template it was created for. `provide` on a non-accepted
/// name returns an empty map.
#[derive(Debug, Clone, Default)]
pub struct DataContext {
    binding: Option<String>,
    data: DataMap,
}

impl DataContext {
    /// Context accepting every template.
    pub fn global(data: DataMap) -> Self {
        Self { binding: None, data }
    }

    /// Context accepting only the named template.
    pub fn bound(template: impl Into<String>, data: DataMap) -> Self {
        Self { binding: Some(template.into()), data }
    }
}

impl Context for DataContext {
    fn accepts(&self, template: &str) -> bool {
        match &self.binding {
            Some(bound) => bound == template,
            None => true,
        }
    }

    fn provide(&self, template: &str) -> DataMap {
        if self.accepts(template) { self.data.clone() } else { DataMap::new() }
    }
}
