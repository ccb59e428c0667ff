mod doubles;

#[allow(unused_imports)]
pub use doubles::{FailingTemplate, RecordingContext, StaticTemplate};
