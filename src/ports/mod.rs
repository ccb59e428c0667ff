mod context;
mod context_collection;
mod engine;
mod template;
mod template_factory;

pub use context::Context;
pub use context_collection::ContextCollection;
pub use engine::Engine;
pub use template::Template;
pub use template_factory::TemplateFactory;
