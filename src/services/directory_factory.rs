use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{RenderError, validate_template_name};
use crate::ports::{Template, TemplateFactory};

use super::JinjaTemplate;

/// Factory loading `<root>/<name>.<extension>` from disk.
///
/// Template names are validated before touching the filesystem; names
/// that are empty, absolute, or contain `..` are rejected. Files are
/// read on every `load` call — callers wanting reuse keep the returned
/// handle.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateFactory {
    root: PathBuf,
    extension: String,
}

impl DirectoryTemplateFactory {
    pub const DEFAULT_EXTENSION: &'static str = "j2";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), extension: Self::DEFAULT_EXTENSION.to_string() }
    }

    /// Override the file extension appended to template names.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Directory the factory resolves names against.
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn template_path(&self, template: &str) -> PathBuf {
        self.root.join(format!("{}.{}", template, self.extension))
    }
}

impl TemplateFactory for DirectoryTemplateFactory {
    fn load(&self, template: &str) -> Result<Arc<dyn Template>, RenderError> {
        validate_template_name(template)?;

        let path = self.template_path(template);
        let source = match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(RenderError::TemplateNotFound(template.to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Arc::new(JinjaTemplate::new(template, source)))
    }
}
