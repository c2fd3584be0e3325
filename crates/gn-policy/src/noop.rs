//! A policy that never moves.

use gn_core::Direction;

use crate::{AgentMemory, Decision, Mode, NavigationPolicy, PolicyResult, Reason, TickContext};

/// A [`NavigationPolicy`] that always returns [`Direction::Stay`].
///
/// Useful as a baseline in tests: the agent is a sitting target.
pub struct StayPolicy;

impl NavigationPolicy for StayPolicy {
    fn decide(&self, ctx: &TickContext<'_>, memory: &AgentMemory) -> PolicyResult<Decision> {
        let agent = ctx.grid.normalize(ctx.agent)?;
        let mut memory = memory.clone();
        memory.begin_tick(agent, ctx.grid.dims());
        memory.record(agent, Direction::Stay);
        Ok(Decision {
            direction: Direction::Stay,
            mode:      Mode::Forage,
            reason:    Reason::Idle,
            memory,
        })
    }

    fn name(&self) -> &str {
        "stay"
    }
}
