mod context_stack;
mod data_context;
mod directory_factory;
mod embedded_factory;
mod engine;
mod jinja_template;
mod memory_factory;

pub use context_stack::{ContextStack, MergePolicy};
pub use data_context::DataContext;
pub use directory_factory::DirectoryTemplateFactory;
pub use embedded_factory::EmbeddedTemplateFactory;
pub use engine::RenderEngine;
pub use jinja_template::JinjaTemplate;
pub use memory_factory::InMemoryTemplateFactory;
