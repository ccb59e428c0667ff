//! Crate-internal test doubles for the ports.

use std::sync::Mutex;

use crate::domain::{DataMap, RenderError};
use crate::ports::{Context, Template};

/// Template returning a fixed string regardless of context.
#[derive(Debug)]
pub struct StaticTemplate {
    name: String,
    output: String,
}

impl StaticTemplate {
    pub fn new(name: impl Into<String>, output: impl Into<String>) -> Self {
        Self { name: name.into(), output: output.into() }
    }
}

impl Template for StaticTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, _context: &dyn Context) -> Result<String, RenderError> {
        Ok(self.output.clone())
    }
}

/// Template failing every render.
#[derive(Debug)]
pub struct FailingTemplate {
    name: String,
}

impl FailingTemplate {
    #[allow(dead_code)]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Template for FailingTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, _context: &dyn Context) -> Result<String, RenderError> {
        Err(RenderError::Render {
            template: self.name.clone(),
            source: minijinja::Error::new(
                minijinja::ErrorKind::InvalidOperation,
                "forced failure",
            ),
        })
    }
}

/// Context recording every `provide` call for assertion.
pub struct RecordingContext {
    accepted: String,
    data: DataMap,
    provided: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingContext {
    pub fn new(accepted: impl Into<String>, data: DataMap) -> Self {
        Self { accepted: accepted.into(), data, provided: Mutex::new(Vec::new()) }
    }

    /// Template names `provide` was called with, in order.
    pub fn provided(&self) -> Vec<String> {
        self.provided.lock().expect("recording lock should not be poisoned").clone()
    }
}

impl Context for RecordingContext {
    fn accepts(&self, template: &str) -> bool {
        template == self.accepted
    }

    fn provide(&self, template: &str) -> DataMap {
        self.provided
            .lock()
            .expect("recording lock should not be poisoned")
            .push(template.to_string());
        if self.accepts(template) { self.data.clone() } else { DataMap::new() }
    }
}
