use std::io;

use thiserror::Error;

/// Library-wide error type for rendering operations.
///
/// `TemplateNotFound` is the one condition every factory and engine
/// implementation must recognize; the remaining variants cover the
/// failure modes of the reference adapters.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No template is registered under the requested name.
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// Template name is empty, absolute, or escapes the template root.
    #[error("Invalid template name '{0}': must be a relative path without traversal")]
    InvalidName(String),

    /// Underlying I/O failure while loading a template.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Rendering failed inside the template implementation.
    #[error("Failed to render template '{template}': {source}")]
    Render {
        /// Name of the template whose render failed.
        template: String,
        /// Underlying Minijinja error (syntax or undefined variable).
        #[source]
        source: minijinja::Error,
    },
}
