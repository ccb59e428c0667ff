pub mod data;
pub mod error;
pub mod name;

pub use data::{DataMap, TemplateData};
pub use error::RenderError;
pub use name::validate_template_name;
