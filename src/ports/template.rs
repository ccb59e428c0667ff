use crate::domain::RenderError;

use super::Context;

/// Port for a named renderable unit.
pub trait Template: std::fmt::Debug + Send + Sync {
    /// Identifying key for this template.
    fn name(&self) -> &str;

    /// Render the context data into the template.
    ///
    /// Must be a deterministic function of the given context: identical
    /// context data yields an identical output string. Failure modes
    /// beyond the base contract (malformed template, missing required
    /// data) are implementation-defined.
    fn render(&self, context: &dyn Context) -> Result<String, RenderError>;
}
