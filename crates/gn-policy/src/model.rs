//! The `NavigationPolicy` trait — the extension point for agent controllers.

use crate::{AgentMemory, Decision, PolicyResult, TickContext};

/// Pluggable per-tick controller.
///
/// A policy holds only configuration.  Everything that persists between
/// ticks lives in the [`AgentMemory`] the caller threads through
/// [`decide`][Self::decide], so one policy value can drive any number of
/// games, on any thread.
///
/// # Example
///
/// ```rust,ignore
/// let policy = DecisionPolicy::new(PolicyConfig::default())?;
/// let mut memory = policy.new_memory();
/// loop {
///     let ctx = TickContext::new(tick, &grid, agent, &threats);
///     let decision = policy.decide(&ctx, &memory)?;
///     memory = decision.memory;
///     // apply decision.direction ...
/// }
/// ```
pub trait NavigationPolicy: Send + Sync + 'static {
    /// Choose this tick's direction.
    ///
    /// Must return within the tick.  `memory` is the value returned by the
    /// previous decision (or [`new_memory`][Self::new_memory] on the first
    /// tick); the updated memory is returned inside the [`Decision`].
    fn decide(&self, ctx: &TickContext<'_>, memory: &AgentMemory) -> PolicyResult<Decision>;

    /// Fresh memory sized for this policy.
    fn new_memory(&self) -> AgentMemory {
        AgentMemory::default()
    }

    /// Short human-readable description.
    fn name(&self) -> &str {
        "policy"
    }
}
