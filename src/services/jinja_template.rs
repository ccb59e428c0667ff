use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::{DataMap, RenderError};
use crate::ports::{Context, Template};

/// Template rendering its source through Minijinja.
///
/// Undefined variables are strict: referencing a variable the context
/// does not supply fails the render with [`RenderError::Render`]
/// instead of producing partial output.
#[derive(Debug, Clone)]
pub struct JinjaTemplate {
    name: String,
    source: String,
}

impl JinjaTemplate {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self { name: name.into(), source: source.into() }
    }

    /// Template source text.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Template for JinjaTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, context: &dyn Context) -> Result<String, RenderError> {
        let data = if context.accepts(&self.name) {
            context.provide(&self.name)
        } else {
            DataMap::new()
        };

        environment()
            .render_str(&self.source, &data)
            .map_err(|source| RenderError::Render { template: self.name.clone(), source })
    }
}

fn environment() -> &'static Environment<'static> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    })
}
