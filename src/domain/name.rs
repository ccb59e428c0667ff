use std::path::{Component, Path};

use crate::domain::RenderError;

/// Validate a template name used as a relative lookup path.
///
/// Factories that resolve names against a directory tree call this
/// before touching storage: empty names, absolute paths, and any `..`
/// or prefix component are rejected with [`RenderError::InvalidName`].
pub fn validate_template_name(name: &str) -> Result<(), RenderError> {
    if name.is_empty() {
        return Err(RenderError::InvalidName(name.to_string()));
    }

    for component in Path::new(name).components() {
        match component {
            Component::Normal(_) => {}
            _ => return Err(RenderError::InvalidName(name.to_string())),
        }
    }

    Ok(())
}
