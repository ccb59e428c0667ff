use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::RenderError;
use crate::ports::{Template, TemplateFactory};

/// Factory serving templates registered in memory.
///
/// Loaded handles share the registered instance, so a loaded template
/// renders observably identically to the one registered.
#[derive(Default)]
pub struct InMemoryTemplateFactory {
    templates: HashMap<String, Arc<dyn Template>>,
}

impl InMemoryTemplateFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template under its own name, replacing any previous
    /// entry with that name.
    pub fn register(&mut self, template: Arc<dyn Template>) {
        self.templates.insert(template.name().to_string(), template);
    }

    /// Builder-style registration.
    pub fn with_template(mut self, template: Arc<dyn Template>) -> Self {
        self.register(template);
        self
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether no templates are registered.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateFactory for InMemoryTemplateFactory {
    fn load(&self, template: &str) -> Result<Arc<dyn Template>, RenderError> {
        self.templates
            .get(template)
            .cloned()
            .ok_or_else(|| RenderError::TemplateNotFound(template.to_string()))
    }
}
