//! Anti-oscillation memory threaded through decisions.

use std::collections::VecDeque;

use gn_core::{Direction, Position};

/// Default [`LoopMemory`] capacity.
pub const DEFAULT_LOOP_CAPACITY: usize = 10;

// ── LoopMemory ────────────────────────────────────────────────────────────────

/// Bounded FIFO of recently visited cells plus a stagnation counter.
///
/// Recency is a soft signal: scoring penalizes re-entering a recent cell,
/// and the stagnation counter triggers the policy's unstick override.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoopMemory {
    recent:     VecDeque<Position>,
    capacity:   usize,
    last_seen:  Option<Position>,
    stagnation: u32,
}

impl LoopMemory {
    /// A memory holding at most `capacity` positions (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            recent:     VecDeque::with_capacity(capacity + 1),
            capacity,
            last_seen:  None,
            stagnation: 0,
        }
    }

    /// Record `pos`, evicting the oldest entry when over capacity.
    pub fn push(&mut self, pos: Position) {
        self.recent.push_back(pos);
        while self.recent.len() > self.capacity {
            self.recent.pop_front();
        }
    }

    #[inline]
    pub fn is_recent(&self, pos: Position) -> bool {
        self.recent.contains(&pos)
    }

    /// Once-per-tick update with the agent's realized position.
    pub fn observe(&mut self, pos: Position) {
        if self.last_seen == Some(pos) {
            self.stagnation = self.stagnation.saturating_add(1);
        } else {
            self.stagnation = 0;
        }
        self.last_seen = Some(pos);
        self.push(pos);
    }

    /// Consecutive observations without a change of position.
    #[inline]
    pub fn stagnation_ticks(&self) -> u32 {
        self.stagnation
    }

    pub fn clear(&mut self) {
        self.recent.clear();
        self.last_seen = None;
        self.stagnation = 0;
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.recent.iter().copied()
    }
}

impl Default for LoopMemory {
    fn default() -> Self {
        Self::new(DEFAULT_LOOP_CAPACITY)
    }
}

// ── AgentMemory ───────────────────────────────────────────────────────────────

/// Everything a policy remembers between ticks.
///
/// Owned by the caller, passed to every decision and returned updated inside
/// the [`Decision`](crate::Decision).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentMemory {
    pub loop_memory:    LoopMemory,
    /// Direction returned by the previous decision.
    pub last_direction: Direction,
    /// Agent position seen by the previous decision.
    pub last_position:  Option<Position>,
    /// Grid dimensions the memory belongs to.
    pub dims:           Option<(i32, i32)>,
}

impl AgentMemory {
    pub fn new(loop_capacity: usize) -> Self {
        Self { loop_memory: LoopMemory::new(loop_capacity), ..Self::default() }
    }

    /// Start a tick at `pos` on a grid of `dims`.  Forgets everything when
    /// the dimensions differ from the previous tick's, then observes `pos`.
    pub fn begin_tick(&mut self, pos: Position, dims: (i32, i32)) {
        if self.dims != Some(dims) {
            if self.dims.is_some() {
                self.forget();
            }
            self.dims = Some(dims);
        }
        self.loop_memory.observe(pos);
    }

    /// Close a tick: remember where the agent was and where it went.
    pub fn record(&mut self, pos: Position, direction: Direction) {
        self.last_position = Some(pos);
        self.last_direction = direction;
    }

    /// Drop all history but keep the loop capacity.
    pub fn forget(&mut self) {
        self.loop_memory.clear();
        self.last_direction = Direction::Stay;
        self.last_position = None;
        self.dims = None;
    }
}
