use std::sync::Arc;

use include_dir::Dir;

use crate::domain::{RenderError, validate_template_name};
use crate::ports::{Template, TemplateFactory};

use super::{DirectoryTemplateFactory, JinjaTemplate};

/// Factory serving templates embedded in the binary via [`include_dir`].
///
/// Template names resolve to `<name>.<extension>` relative to the
/// embedded directory, nested paths included. Useful for shipping a
/// default template set with no filesystem dependency at runtime.
#[derive(Debug, Clone)]
pub struct EmbeddedTemplateFactory {
    dir: &'static Dir<'static>,
    extension: String,
}

impl EmbeddedTemplateFactory {
    pub fn new(dir: &'static Dir<'static>) -> Self {
        Self { dir, extension: DirectoryTemplateFactory::DEFAULT_EXTENSION.to_string() }
    }

    /// Override the file extension appended to template names.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}

impl TemplateFactory for EmbeddedTemplateFactory {
    fn load(&self, template: &str) -> Result<Arc<dyn Template>, RenderError> {
        validate_template_name(template)?;

        let path = format!("{}.{}", template, self.extension);
        let source = self
            .dir
            .get_file(&path)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| RenderError::TemplateNotFound(template.to_string()))?;

        Ok(Arc::new(JinjaTemplate::new(template, source)))
    }
}
