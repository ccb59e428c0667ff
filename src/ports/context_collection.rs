use std::sync::Arc;

use super::Context;

/// Port for a composite of contexts that is itself a [`Context`].
///
/// Membership is tracked by `Arc` identity: two handles name the same
/// member only when they point at the same allocation. How the
/// inherited `accepts`/`provide` aggregate across members is up to the
/// implementation and must be documented; see
/// [`MergePolicy`](crate::services::MergePolicy) for the policies the
/// reference collection supports.
pub trait ContextCollection: Context {
    /// Register a member context at the end of the collection.
    fn add(&mut self, context: Arc<dyn Context>);

    /// Deregister a member context. Removing a non-member is a no-op.
    fn remove(&mut self, context: &Arc<dyn Context>);

    /// Whether the collection currently holds the given member.
    fn has(&self, context: &Arc<dyn Context>) -> bool;
}
