use std::sync::Arc;

use crate::domain::RenderError;

use super::Template;

/// Port for resolving template names to templates.
pub trait TemplateFactory: Send + Sync {
    /// Load the named template.
    ///
    /// Fails with [`RenderError::TemplateNotFound`] when no template
    /// matches the name; never returns a placeholder template. Whether
    /// loaded templates are cached and reused is an implementation
    /// choice outside the contract.
    fn load(&self, template: &str) -> Result<Arc<dyn Template>, RenderError>;
}
