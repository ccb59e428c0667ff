use std::sync::Arc;

use crate::domain::{DataMap, RenderError, TemplateData};
use crate::ports::{Context, ContextCollection, Engine, TemplateFactory};

use super::{ContextStack, DataContext, MergePolicy};

/// Concrete engine over a template factory and an ambient context
/// stack.
///
/// Ambient contexts are fixed at construction through the builder
/// methods; per-call data is layered in front of them, so call data
/// takes precedence under either aggregation policy.
pub struct RenderEngine {
    factory: Arc<dyn TemplateFactory>,
    contexts: ContextStack,
}

impl RenderEngine {
    pub fn new(factory: Arc<dyn TemplateFactory>) -> Self {
        Self { factory, contexts: ContextStack::new() }
    }

    /// Add an ambient context consulted by every render call.
    pub fn with_context(mut self, context: Arc<dyn Context>) -> Self {
        self.contexts.add(context);
        self
    }

    /// Add ambient data visible to every template.
    pub fn with_data(self, data: DataMap) -> Self {
        self.with_context(Arc::new(DataContext::global(data)))
    }

    /// Aggregation policy for ambient and call-scoped contexts.
    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.contexts.set_policy(policy);
        self
    }

    /// Ambient context collection in use.
    pub fn contexts(&self) -> &ContextStack {
        &self.contexts
    }

    /// Factory in use.
    pub fn factory(&self) -> &Arc<dyn TemplateFactory> {
        &self.factory
    }

    fn scope(&self, template: &str, data: TemplateData) -> ContextStack {
        // An empty call map carries nothing to layer; adding it anyway
        // would shadow ambient members under FirstMatch.
        let call_context: Option<Arc<dyn Context>> = match data {
            TemplateData::Map(map) if map.is_empty() => None,
            TemplateData::Map(map) => Some(Arc::new(DataContext::bound(template, map))),
            TemplateData::Context(context) => Some(context),
        };

        let mut scope = ContextStack::with_policy(self.contexts.policy());
        if let Some(call_context) = call_context {
            scope.add(call_context);
        }
        for member in self.contexts.members() {
            scope.add(Arc::clone(member));
        }
        scope
    }
}

impl Engine for RenderEngine {
    fn render(&self, template: &str, data: TemplateData) -> Result<String, RenderError> {
        let loaded = self.factory.load(template)?;
        let scope = self.scope(template, data);
        loaded.render(&scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::services::{InMemoryTemplateFactory, JinjaTemplate};
    use crate::testing::StaticTemplate;

    fn engine_with(template: JinjaTemplate) -> RenderEngine {
        let factory = InMemoryTemplateFactory::new().with_template(Arc::new(template));
        RenderEngine::new(Arc::new(factory))
    }

    fn name_data(name: &str) -> DataMap {
        let mut data = DataMap::new();
        data.insert("name".to_string(), json!(name));
        data
    }

    #[test]
    fn renders_call_data_through_the_loaded_template() {
        let engine = engine_with(JinjaTemplate::new("greeting", "Hello, {{ name }}"));

        let output =
            engine.render("greeting", name_data("Ada").into()).expect("render should succeed");
        assert_eq!(output, "Hello, Ada");
    }

    #[test]
    fn not_found_propagates_unchanged_from_the_factory() {
        let engine = engine_with(JinjaTemplate::new("greeting", "Hello, {{ name }}"));

        let err = engine.render("missing", TemplateData::empty()).expect_err("render should fail");
        assert!(matches!(err, RenderError::TemplateNotFound(name) if name == "missing"));
    }

    #[test]
    fn ambient_data_reaches_every_template() {
        let engine = engine_with(JinjaTemplate::new("greeting", "Hello, {{ name }}"))
            .with_data(name_data("Grace"));

        let output =
            engine.render("greeting", TemplateData::empty()).expect("render should succeed");
        assert_eq!(output, "Hello, Grace");
    }

    #[test]
    fn call_data_takes_precedence_over_ambient_data() {
        let engine = engine_with(JinjaTemplate::new("greeting", "Hello, {{ name }}"))
            .with_data(name_data("Grace"));

        let output =
            engine.render("greeting", name_data("Ada").into()).expect("render should succeed");
        assert_eq!(output, "Hello, Ada");
    }

    #[test]
    fn call_data_wins_conflicts_under_merge_all() {
        let mut ambient = name_data("Grace");
        ambient.insert("city".to_string(), json!("Arlington"));

        let engine = engine_with(JinjaTemplate::new("greeting", "{{ name }} of {{ city }}"))
            .with_data(ambient)
            .with_merge_policy(MergePolicy::MergeAll);

        let output =
            engine.render("greeting", name_data("Ada").into()).expect("render should succeed");
        assert_eq!(output, "Ada of Arlington");
    }

    #[test]
    fn explicit_context_is_used_as_given() {
        let engine = engine_with(JinjaTemplate::new("greeting", "Hello, {{ name }}"));

        let context: Arc<dyn Context> = Arc::new(DataContext::global(name_data("Ada")));
        let output = engine.render("greeting", context.into()).expect("render should succeed");
        assert_eq!(output, "Hello, Ada");
    }

    #[test]
    fn template_errors_are_not_swallowed() {
        let engine = engine_with(JinjaTemplate::new("greeting", "Hello, {{ missing }}"));

        let err =
            engine.render("greeting", TemplateData::empty()).expect_err("render should fail");
        assert!(matches!(err, RenderError::Render { .. }));
    }

    #[test]
    fn failing_template_error_reaches_the_caller() {
        use crate::testing::FailingTemplate;

        let factory = InMemoryTemplateFactory::new()
            .with_template(Arc::new(FailingTemplate::new("broken")));
        let engine = RenderEngine::new(Arc::new(factory));

        let err = engine.render("broken", TemplateData::empty()).expect_err("render should fail");
        assert!(matches!(err, RenderError::Render { ref template, .. } if template == "broken"));
    }

    #[test]
    fn accessors_expose_the_wired_collaborators() {
        let factory = InMemoryTemplateFactory::new()
            .with_template(Arc::new(StaticTemplate::new("greeting", "Hello")));
        let engine = RenderEngine::new(Arc::new(factory)).with_data(DataMap::new());

        assert_eq!(engine.contexts().len(), 1);
        assert!(engine.factory().load("greeting").is_ok());
    }
}
