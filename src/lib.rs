//! output-interop: interoperability contracts for template rendering.
//!
//! Five ports describe how rendering collaborators fit together:
//! [`Context`] supplies named data, [`ContextCollection`] composes
//! contexts, [`Template`] renders a context into a string,
//! [`TemplateFactory`] resolves template names, and [`Engine`] drives
//! the whole flow through a single `render(name, data)` call.
//!
//! Each port ships with at least one reference implementation in
//! [`services`], so applications can either wire up the provided
//! adapters or implement the ports against their own template system.

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::{DataMap, RenderError, TemplateData, validate_template_name};
pub use ports::{Context, ContextCollection, Engine, Template, TemplateFactory};
pub use services::{
    ContextStack, DataContext, DirectoryTemplateFactory, EmbeddedTemplateFactory,
    InMemoryTemplateFactory, JinjaTemplate, MergePolicy, RenderEngine,
};
