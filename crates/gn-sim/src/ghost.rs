//! Ghost movement.
//!
//! Ghosts are the harness's threats.  Each owns a [`ThreatRng`] seeded from
//! the game seed and its id, so runs with the same seed replay exactly.

use std::fmt;
use std::str::FromStr;

use gn_core::{Direction, Position, Threat, ThreatId, ThreatRng};
use gn_grid::Grid;

use crate::SimError;

/// Random attempts before a random walker scans directions in fixed order.
const RANDOM_ATTEMPTS: usize = 8;

// ── GhostKind ─────────────────────────────────────────────────────────────────

/// Movement rule of a dangerous ghost.  Vulnerable ghosts always walk
/// randomly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GhostKind {
    /// Uniformly random legal direction.
    RandomWalk,
    /// Legal direction minimizing Manhattan distance to the agent.
    #[default]
    Greedy,
}

impl fmt::Display for GhostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GhostKind::RandomWalk => "random",
            GhostKind::Greedy     => "greedy",
        })
    }
}

impl FromStr for GhostKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "random" | "random-walk" => Ok(GhostKind::RandomWalk),
            "greedy"                 => Ok(GhostKind::Greedy),
            other => Err(SimError::Config(format!("unknown ghost kind {other:?}"))),
        }
    }
}

// ── Ghost ─────────────────────────────────────────────────────────────────────

/// One ghost: position, spawn point, vulnerability timer and RNG stream.
#[derive(Clone, Debug)]
pub struct Ghost {
    pub id:                   ThreatId,
    pub kind:                 GhostKind,
    pub pos:                  Position,
    pub spawn:                Position,
    /// Remaining vulnerability in game time units; `0` means dangerous.
    pub vulnerable_remaining: f64,
    rng:                      ThreatRng,
}

impl Ghost {
    pub fn new(id: ThreatId, kind: GhostKind, spawn: Position, seed: u64) -> Self {
        Self {
            id,
            kind,
            pos: spawn,
            spawn,
            vulnerable_remaining: 0.0,
            rng: ThreatRng::new(seed, id),
        }
    }

    /// Snapshot handed to the policy.
    pub fn threat(&self) -> Threat {
        Threat::new(self.id, self.pos, self.vulnerable_remaining)
    }

    #[inline]
    pub fn is_vulnerable(&self) -> bool {
        self.vulnerable_remaining > 0.0
    }

    /// Make the ghost vulnerable for `duration`, keeping any longer timer.
    pub fn make_vulnerable(&mut self, duration: f64) {
        self.vulnerable_remaining = self.vulnerable_remaining.max(duration);
    }

    /// Advance the vulnerability timer by `dt`, flooring at zero.
    pub fn decay(&mut self, dt: f64) {
        if self.vulnerable_remaining > 0.0 {
            self.vulnerable_remaining = (self.vulnerable_remaining - dt).max(0.0);
        }
    }

    /// Back to the spawn point, dangerous again.
    pub fn respawn(&mut self) {
        self.pos = self.spawn;
        self.vulnerable_remaining = 0.0;
    }

    /// Move one step according to the ghost's rule.
    pub fn step(&mut self, grid: &Grid, agent: Position) {
        let dir = if self.is_vulnerable() {
            self.random_direction(grid)
        } else {
            match self.kind {
                GhostKind::RandomWalk => self.random_direction(grid),
                GhostKind::Greedy     => self.greedy_direction(grid, agent),
            }
        };
        if let Some(next) = passable_step(grid, self.pos, dir) {
            self.pos = next;
        }
    }

    fn random_direction(&mut self, grid: &Grid) -> Direction {
        for _ in 0..RANDOM_ATTEMPTS {
            if let Some(&dir) = self.rng.choose(&Direction::MOVES) {
                if passable_step(grid, self.pos, dir).is_some() {
                    return dir;
                }
            }
        }
        Direction::MOVES
            .into_iter()
            .find(|&d| passable_step(grid, self.pos, d).is_some())
            .unwrap_or(Direction::Stay)
    }

    fn greedy_direction(&mut self, grid: &Grid, agent: Position) -> Direction {
        let (w, h) = grid.dims();
        let distance = |p: Position| {
            if grid.is_cyclic() { p.toroidal_manhattan(agent, w, h) } else { p.manhattan(agent) }
        };
        let mut best: Option<(u32, Direction)> = None;
        for dir in Direction::MOVES {
            let Some(next) = passable_step(grid, self.pos, dir) else { continue };
            let d = distance(next);
            if best.is_none_or(|(b, _)| d < b) {
                best = Some((d, dir));
            }
        }
        match best {
            Some((_, dir)) => dir,
            None           => self.random_direction(grid),
        }
    }
}

/// The cell one step from `pos` in `dir` if it is on the grid and not a
/// wall.
pub(crate) fn passable_step(grid: &Grid, pos: Position, dir: Direction) -> Option<Position> {
    let next = grid.step(pos, dir)?;
    match grid.get_at(next) {
        Ok(cell) if !cell.is_wall() => Some(next),
        _ => None,
    }
}
