//! `DecisionPolicy` — the per-tick state machine and move scoring.
//!
//! # Decision ladder
//!
//! ```text
//! candidates = passable neighbors not holding a dangerous threat
//!
//! 1. ChaseVulnerable  catchable vulnerable threat, first path step is a candidate
//! 2. Escape           d0 <= escape_trigger
//!    Forage           otherwise (power scoring when warranted, else dots)
//! 3. Unstick          stagnating while safe: strict progress to a consumable
//! 4. Fallback         previous direction, then non-reverse, then reverse
//! 5. Stay             no candidate at all
//! ```
//!
//! Safety is a filter on the candidate set, never a weight: no score can
//! pull the agent onto a dangerous threat.

use std::cmp::Reverse;
use std::fmt::Debug;

use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use gn_core::time::whole_ticks;
use gn_core::{CellCode, Direction, Position};
use gn_grid::Grid;

use crate::{
    AgentMemory, Decision, Mode, NavigationPolicy, PolicyConfig, PolicyError, PolicyResult,
    Reason, TickContext, TickFields,
};

/// Dot term used for a candidate from which no dot is reachable.
const NO_PATH_TERM: i64 = 9999;

// ── Candidate ─────────────────────────────────────────────────────────────────

/// A legal move and everything the scorers read about its target cell.
#[derive(Clone, Debug)]
struct Candidate {
    dir:        Direction,
    pos:        Position,
    cell:       CellCode,
    /// Clamped distance to the nearest dangerous threat.
    danger:     u32,
    dot:        Option<u32>,
    power:      Option<u32>,
    consumable: Option<u32>,
    exits:      usize,
    recent:     bool,
}

impl Candidate {
    fn dot_term(&self) -> i64 {
        self.dot.map_or(-NO_PATH_TERM, |d| -i64::from(d))
    }
}

#[derive(Clone, Copy, Debug)]
struct Choice {
    direction: Direction,
    mode:      Mode,
    reason:    Reason,
}

impl Choice {
    fn new(direction: Direction, mode: Mode, reason: Reason) -> Self {
        Self { direction, mode, reason }
    }
}

/// Highest-scoring candidate; ties go to the earliest in scan order.
///
/// Scores are any ordered key: a weighted `i64` or a lexicographic tuple.
fn best<'c, I, K, F>(candidates: I, label: &'static str, mut score: F) -> Option<Direction>
where
    I: IntoIterator<Item = &'c Candidate>,
    K: Ord + Copy + Debug,
    F: FnMut(&Candidate) -> K,
{
    let mut best: Option<(K, Direction)> = None;
    for c in candidates {
        let s = score(c);
        trace!(scorer = label, dir = %c.dir, pos = %c.pos, score = ?s, "candidate");
        if best.is_none_or(|(b, _)| s > b) {
            best = Some((s, c.dir));
        }
    }
    best.map(|(_, d)| d)
}

// ── DecisionPolicy ────────────────────────────────────────────────────────────

/// The configurable escape / chase / forage policy.
#[derive(Clone, Debug)]
pub struct DecisionPolicy {
    config: PolicyConfig,
}

impl DecisionPolicy {
    /// Validate `config` and build the policy.
    pub fn new(config: PolicyConfig) -> PolicyResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    fn candidates(
        &self,
        grid:         &Grid,
        agent:        Position,
        fields:       &TickFields,
        danger_cells: &FxHashSet<Position>,
        memory:       &AgentMemory,
    ) -> Vec<Candidate> {
        let horizon = self.config.danger_horizon;
        Direction::MOVES
            .into_iter()
            .filter_map(|dir| {
                let pos = grid.step(agent, dir)?;
                let cell = grid.get_at(pos).ok()?;
                if cell.is_wall() || danger_cells.contains(&pos) {
                    return None;
                }
                Some(Candidate {
                    dir,
                    pos,
                    cell,
                    danger:     fields.danger.clamped(pos, horizon),
                    dot:        fields.dot.get(pos),
                    power:      fields.power.get(pos),
                    consumable: fields.consumable(pos),
                    exits:      grid.open_neighbors(pos, CellCode::is_wall),
                    recent:     memory.loop_memory.is_recent(pos),
                })
            })
            .collect()
    }

    fn select(&self, ctx: &TickContext<'_>, agent: Position, memory: &AgentMemory) -> PolicyResult<Choice> {
        let cfg = &self.config;
        let grid = ctx.grid;

        let fields = TickFields::build(grid, ctx.threats)?;
        let danger_cells = ctx
            .dangerous_threats()
            .map(|t| grid.normalize(t.pos))
            .collect::<Result<FxHashSet<_>, _>>()?;
        let candidates = self.candidates(grid, agent, &fields, &danger_cells, memory);
        let d0 = fields.danger.clamped(agent, cfg.danger_horizon);
        let last = memory.last_direction;

        if cfg.chase_vulnerable {
            if let Some(dir) = self.chase(ctx, agent, &candidates)? {
                return Ok(Choice::new(dir, Mode::ChaseVulnerable, Reason::Scored));
            }
        }

        let (mode, scored) = if d0 <= cfg.escape_trigger {
            (Mode::Escape, self.escape(&candidates))
        } else {
            (Mode::Forage, self.forage(agent, d0, &candidates, &fields, last))
        };

        let stagnation = memory.loop_memory.stagnation_ticks();
        if stagnation > cfg.stagnation_limit
            && d0 > cfg.escape_trigger.saturating_add(cfg.stagnation_safety_margin)
        {
            if let Some(dir) = self.unstick(agent, &candidates, &fields) {
                debug!(tick = %ctx.tick, stagnation, %dir, "stagnation override");
                return Ok(Choice::new(dir, Mode::Forage, Reason::StagnationOverride));
            }
        }

        if let Some(dir) = scored {
            return Ok(Choice::new(dir, mode, Reason::Scored));
        }

        match self.fallback(agent, &candidates, last) {
            Ok(dir) => Ok(Choice::new(dir, mode, Reason::Fallback)),
            Err(PolicyError::NoLegalMove { at }) => {
                warn!(tick = %ctx.tick, %at, "no legal move, staying put");
                Ok(Choice::new(Direction::Stay, mode, Reason::NoLegalMove))
            }
            Err(e) => Err(e),
        }
    }

    // ── ChaseVulnerable ───────────────────────────────────────────────────

    /// First step toward the nearest vulnerable threat that can be reached
    /// with `chase_margin_ticks` of vulnerability to spare.  Equal distances
    /// go to the threat with more ticks left, then to the earliest listed.
    fn chase(
        &self,
        ctx:        &TickContext<'_>,
        agent:      Position,
        candidates: &[Candidate],
    ) -> PolicyResult<Option<Direction>> {
        let cfg = &self.config;
        let grid = ctx.grid;
        let mut prey = ctx.vulnerable_threats().peekable();
        if prey.peek().is_none() {
            return Ok(None);
        }

        let from_agent = grid.all_distances(agent, CellCode::WALL)?;
        let mut target: Option<((Reverse<u32>, u64), Position)> = None;
        for threat in prey {
            let pos = grid.normalize(threat.pos)?;
            let Some(hops) = from_agent.get(pos) else { continue };
            let budget = whole_ticks(threat.vulnerable_remaining, cfg.time_per_tick);
            if hops == 0 || u64::from(hops) + u64::from(cfg.chase_margin_ticks) > budget {
                continue;
            }
            let score = (Reverse(hops), budget);
            if target.is_none_or(|(b, _)| score > b) {
                target = Some((score, pos));
            }
        }

        let Some((_, prey_pos)) = target else { return Ok(None) };
        let path = grid.path_in_field(&from_agent, prey_pos)?;
        let dir = path
            .first_direction(grid)
            .filter(|d| candidates.iter().any(|c| c.dir == *d));
        if let Some(d) = dir {
            debug!(tick = %ctx.tick, target = %prey_pos, hops = path.hops(), dir = %d, "chasing");
        }
        Ok(dir)
    }

    // ── Escape ────────────────────────────────────────────────────────────

    /// Weighted score over safe candidates; when cornered, the highest
    /// danger distance wins, then more exits, then a cell not visited lately.
    fn escape(&self, candidates: &[Candidate]) -> Option<Direction> {
        let cfg = &self.config;
        let w = &cfg.weights;
        let score = |c: &Candidate| {
            i64::from(c.danger) * w.escape_safety
                + c.exits as i64 * w.escape_exit
                + c.dot_term() * w.escape_progress
                - if c.recent { w.escape_recent } else { 0 }
        };

        let safe = candidates.iter().filter(|c| c.danger > cfg.hard_avoid);
        best(safe, "escape", score)
            .or_else(|| best(candidates, "escape-cornered", |c| (c.danger, c.exits, !c.recent)))
    }

    // ── Forage ────────────────────────────────────────────────────────────

    fn forage(
        &self,
        agent:      Position,
        d0:         u32,
        candidates: &[Candidate],
        fields:     &TickFields,
        last:       Direction,
    ) -> Option<Direction> {
        let cfg = &self.config;
        let d_dot = fields.dot.get(agent);
        let go_power = match fields.power.get(agent) {
            None => false,
            Some(d_pow) => {
                let rising = d0 > cfg.escape_trigger && d0 <= cfg.danger_rising;
                d_dot.is_none()
                    || d_pow <= cfg.power_free_distance
                    || (cfg.prefer_closer_consumable && d_dot.is_some_and(|d| d_pow < d))
                    || (rising && d_dot.is_none_or(|d| d_pow <= d.saturating_add(cfg.power_slack)))
            }
        };

        if go_power {
            if let Some(dir) = self.forage_power(candidates) {
                return Some(dir);
            }
        }
        self.forage_dots(candidates, last)
    }

    fn forage_dots(&self, candidates: &[Candidate], last: Direction) -> Option<Direction> {
        let cfg = &self.config;
        let w = &cfg.weights;
        let allowed = candidates.iter().filter(|c| c.danger > cfg.hard_avoid);
        best(allowed, "forage-dot", |c| {
            let mut score = c.dot_term() * w.dot_distance + c.exits as i64 * w.dot_exit;
            if c.cell == CellCode::DOT {
                score += w.dot_reward;
            } else if c.cell == CellCode::POWER {
                score += w.dot_power_reward;
            }
            if c.recent {
                score -= w.recent_penalty;
            }
            score += if c.danger <= cfg.soft_danger {
                i64::from(c.danger) * w.soft_safety
            } else {
                w.safe_bonus
            };
            if last.is_move() && c.dir == last {
                score += w.continuity_bonus;
            }
            if last.is_move() && c.dir == last.opposite() {
                score -= w.reverse_penalty;
            }
            if c.dot.is_none() {
                score -= w.no_dot_penalty;
            }
            if c.power.is_some_and(|p| p <= cfg.power_free_distance) {
                score += w.power_nearby_bonus;
            }
            score
        })
    }

    fn forage_power(&self, candidates: &[Candidate]) -> Option<Direction> {
        let cfg = &self.config;
        let w = &cfg.weights;
        let allowed = candidates
            .iter()
            .filter(|c| c.power.is_some() && c.danger > cfg.hard_avoid);
        best(allowed, "forage-power", |c| {
            let pd = c.power.map_or(0, i64::from);
            let reward = if c.cell == CellCode::POWER { w.power_reward } else { 0 };
            -pd * w.power_distance
                + reward
                + c.exits as i64 * w.power_exit
                + i64::from(c.danger) * w.power_safety
        })
    }

    // ── Stagnation override ───────────────────────────────────────────────

    /// A candidate strictly closer to the nearest consumable than the agent
    /// is, recency ignored.
    fn unstick(&self, agent: Position, candidates: &[Candidate], fields: &TickFields) -> Option<Direction> {
        let cfg = &self.config;
        let w = &cfg.weights;
        let here = fields.consumable(agent)?;
        let progress = candidates
            .iter()
            .filter(|c| c.danger > cfg.hard_avoid && c.consumable.is_some_and(|d| d < here));
        best(progress, "unstick", |c| {
            let d = c.consumable.map_or(0, i64::from);
            -d * w.unstick_progress + i64::from(c.danger) * w.unstick_safety
        })
    }

    // ── Fallback ──────────────────────────────────────────────────────────

    fn fallback(&self, agent: Position, candidates: &[Candidate], last: Direction) -> PolicyResult<Direction> {
        if candidates.is_empty() {
            return Err(PolicyError::NoLegalMove { at: agent });
        }
        if last.is_move() {
            if let Some(c) = candidates.iter().find(|c| c.dir == last) {
                return Ok(c.dir);
            }
        }
        let reverse = last.opposite();
        let forward = candidates.iter().filter(|c| !last.is_move() || c.dir != reverse);
        Ok(best(forward, "fallback", |c| i64::from(c.danger)).unwrap_or(candidates[0].dir))
    }
}

impl NavigationPolicy for DecisionPolicy {
    fn decide(&self, ctx: &TickContext<'_>, memory: &AgentMemory) -> PolicyResult<Decision> {
        let grid = ctx.grid;
        let agent = grid.normalize(ctx.agent)?;
        let mut memory = memory.clone();
        memory.begin_tick(agent, grid.dims());

        let choice = self.select(ctx, agent, &memory)?;
        memory.record(agent, choice.direction);

        debug!(
            tick   = %ctx.tick,
            agent  = %agent,
            dir    = %choice.direction,
            mode   = %choice.mode,
            reason = %choice.reason,
            "decision"
        );
        Ok(Decision {
            direction: choice.direction,
            mode:      choice.mode,
            reason:    choice.reason,
            memory,
        })
    }

    fn new_memory(&self) -> AgentMemory {
        AgentMemory::new(self.config.loop_capacity)
    }

    fn name(&self) -> &str {
        if self.config.chase_vulnerable { "escape-first" } else { "dot-first" }
    }
}
