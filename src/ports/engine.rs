use crate::domain::{RenderError, TemplateData};

/// Port for driving rendered output.
///
/// An engine composes a [`TemplateFactory`](super::TemplateFactory)
/// with ambient [`Context`](super::Context) configuration fixed at
/// construction time; the public surface is the single `render` call.
pub trait Engine: Send + Sync {
    /// Render the named template with the given data.
    ///
    /// [`RenderError::TemplateNotFound`] from the factory propagates
    /// unchanged, and errors surfaced by the template are never
    /// swallowed: every collaborator failure is observable to the
    /// caller.
    fn render(&self, template: &str, data: TemplateData) -> Result<String, RenderError>;
}
