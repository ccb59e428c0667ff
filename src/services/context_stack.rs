//! Concrete context collection with an explicit aggregation policy.
//!
//! The base contract leaves unspecified what happens when several
//! members accept the same template, so the policy is a constructor
//! argument rather than an implicit behavior.

use std::fmt;
use std::sync::Arc;

use crate::domain::DataMap;
use crate::ports::{Context, ContextCollection};

/// How a [`ContextStack`] aggregates members that accept the same
/// template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// The first accepting member in registration order supplies the
    /// whole mapping.
    #[default]
    FirstMatch,
    /// Every accepting member contributes; on key conflict the
    /// earlier-registered member wins.
    MergeAll,
}

/// Ordered collection of contexts, itself a [`Context`].
///
/// Members are consulted in registration order. Membership is tracked
/// by `Arc` identity, so the same underlying context added twice counts
/// as one repeated member and is removed in one `remove` call.
#[derive(Clone, Default)]
pub struct ContextStack {
    policy: MergePolicy,
    members: Vec<Arc<dyn Context>>,
}

impl ContextStack {
    /// Empty stack with the default [`MergePolicy::FirstMatch`] policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty stack with an explicit aggregation policy.
    pub fn with_policy(policy: MergePolicy) -> Self {
        Self { policy, members: Vec::new() }
    }

    /// Aggregation policy in effect.
    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// Change the aggregation policy for subsequent queries.
    pub fn set_policy(&mut self, policy: MergePolicy) {
        self.policy = policy;
    }

    /// Registered members in registration order.
    pub fn members(&self) -> &[Arc<dyn Context>] {
        &self.members
    }

    /// Number of registered members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the stack has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Context for ContextStack {
    fn accepts(&self, template: &str) -> bool {
        self.members.iter().any(|member| member.accepts(template))
    }

    fn provide(&self, template: &str) -> DataMap {
        match self.policy {
            MergePolicy::FirstMatch => self
                .members
                .iter()
                .find(|member| member.accepts(template))
                .map(|member| member.provide(template))
                .unwrap_or_default(),
            MergePolicy::MergeAll => {
                let mut merged = DataMap::new();
                for member in self.members.iter().filter(|member| member.accepts(template)) {
                    for (key, value) in member.provide(template) {
                        merged.entry(key).or_insert(value);
                    }
                }
                merged
            }
        }
    }
}

impl ContextCollection for ContextStack {
    fn add(&mut self, context: Arc<dyn Context>) {
        self.members.push(context);
    }

    fn remove(&mut self, context: &Arc<dyn Context>) {
        self.members.retain(|member| !Arc::ptr_eq(member, context));
    }

    fn has(&self, context: &Arc<dyn Context>) -> bool {
        self.members.iter().any(|member| Arc::ptr_eq(member, context))
    }
}

impl fmt::Debug for ContextStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextStack")
            .field("policy", &self.policy)
            .field("members", &self.members.len())
            .finish()
    }
}
