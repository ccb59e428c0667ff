//! Value types shared by the ports: the data mapping handed to a
//! template's rendering scope, and the polymorphic render input.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::ports::Context;

/// Mapping of named values merged into a template's rendering scope.
pub type DataMap = serde_json::Map<String, Value>;

/// Data accepted by [`Engine::render`].
///
/// Callers either pass a raw mapping, which the engine scopes to the
/// rendered template, or an explicit [`Context`] used as-is.
///
/// [`Engine::render`]: crate::ports::Engine::render
pub enum TemplateData {
    /// Raw mapping, scoped to the rendered template.
    Map(DataMap),
    /// Caller-supplied context, consulted without rewrapping.
    Context(Arc<dyn Context>),
}

impl TemplateData {
    /// Render input carrying no call-scoped data.
    pub fn empty() -> Self {
        Self::Map(DataMap::new())
    }
}

impl Default for TemplateData {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<DataMap> for TemplateData {
    fn from(data: DataMap) -> Self {
        Self::Map(data)
    }
}

impl From<Arc<dyn Context>> for TemplateData {
    fn from(context: Arc<dyn Context>) -> Self {
        Self::Context(context)
    }
}

impl fmt::Debug for TemplateData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map(data) => f.debug_tuple("Map").field(data).finish(),
            Self::Context(_) => f.debug_tuple("Context").finish(),
        }
    }
}
