//! The `Game` struct and its tick loop.

use std::fmt;

use tracing::{debug, info, trace};

use gn_core::{CellCode, GameClock, Position, Threat, Tick};
use gn_grid::Grid;
use gn_policy::{AgentMemory, NavigationPolicy, TickContext};

use crate::ghost::passable_step;
use crate::{GameObserver, Ghost, SimError, SimResult};

// ── GameConfig ────────────────────────────────────────────────────────────────

/// Rules and limits of one game.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct GameConfig {
    /// The game is lost by timeout after this many ticks.
    pub max_ticks:      u64,
    /// Game time per tick; vulnerability timers decay by this much.
    pub time_per_tick:  f64,
    /// Vulnerability granted to every ghost by a power item.
    pub power_duration: f64,
    pub dot_score:      u64,
    pub power_score:    u64,
    pub ghost_score:    u64,
    /// Seed for every ghost's RNG stream.
    pub seed:           u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_ticks:      5_000,
            time_per_tick:  0.1,
            power_duration: 6.0,
            dot_score:      1,
            power_score:    5,
            ghost_score:    50,
            seed:           1,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> SimResult<()> {
        if self.max_ticks == 0 {
            return Err(SimError::Config("max_ticks must be positive".into()));
        }
        if !(self.time_per_tick.is_finite() && self.time_per_tick > 0.0) {
            return Err(SimError::Config(format!(
                "time_per_tick must be positive and finite, got {}",
                self.time_per_tick
            )));
        }
        if !(self.power_duration.is_finite() && self.power_duration >= 0.0) {
            return Err(SimError::Config(format!(
                "power_duration must be non-negative and finite, got {}",
                self.power_duration
            )));
        }
        Ok(())
    }
}

// ── Status and summaries ──────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    #[default]
    Running,
    /// Every dot and power item was eaten.
    Won,
    /// A dangerous ghost caught the agent.
    Lost,
    /// `max_ticks` elapsed.
    TimedOut,
}

impl GameStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::Running  => "running",
            GameStatus::Won      => "won",
            GameStatus::Lost     => "lost",
            GameStatus::TimedOut => "timed_out",
        }
    }

    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State at the end of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSummary {
    pub tick:      Tick,
    pub agent:     Position,
    pub score:     u64,
    pub dots_left: usize,
    pub status:    GameStatus,
}

/// Final result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOutcome {
    pub status:    GameStatus,
    pub score:     u64,
    /// Ticks played.
    pub ticks:     u64,
    pub dots_left: usize,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} after {} ticks, score {}, {} consumables left",
            self.status, self.ticks, self.score, self.dots_left
        )
    }
}

// ── Game ──────────────────────────────────────────────────────────────────────

/// A running game: level state, ghosts, agent and policy.
///
/// Each tick runs, in order:
///
/// ```text
/// ① decide   — policy.decide(grid, agent, ghost snapshots, memory)
/// ② move     — agent steps if the target cell is passable
/// ③ eat      — dot / power item under the agent
/// ④ decay    — vulnerability timers shrink by time_per_tick
/// ⑤ ghosts   — each ghost steps by its rule
/// ⑥ collide  — vulnerable ghost eaten and respawned, dangerous ghost wins
/// ⑦ status   — won when no consumable remains, timed out at max_ticks
/// ```
///
/// Create via [`GameBuilder`][crate::GameBuilder].
pub struct Game<P: NavigationPolicy> {
    pub config: GameConfig,
    pub clock:  GameClock,
    pub(crate) name:   String,
    pub(crate) grid:   Grid,
    pub(crate) agent:  Position,
    pub(crate) ghosts: Vec<Ghost>,
    pub(crate) policy: P,
    pub(crate) memory: AgentMemory,
    pub(crate) score:  u64,
    pub(crate) status: GameStatus,
}

impl<P: NavigationPolicy> Game<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Play until the game is over.
    pub fn run<O: GameObserver>(&mut self, observer: &mut O) -> SimResult<GameOutcome> {
        info!(
            level  = %self.name,
            policy = self.policy.name(),
            cyclic = self.grid.is_cyclic(),
            ghosts = self.ghosts.len(),
            "game start"
        );
        while !self.status.is_over() {
            self.step(observer)?;
        }
        let outcome = self.outcome();
        info!(%outcome, "game over");
        observer.on_game_end(&outcome);
        Ok(outcome)
    }

    /// Play exactly one tick.  A finished game is left untouched.
    pub fn step<O: GameObserver>(&mut self, observer: &mut O) -> SimResult<GameStatus> {
        if self.status.is_over() {
            return Ok(self.status);
        }
        let tick = self.clock.current_tick;
        observer.on_tick_start(tick);

        // ① decide
        let threats = self.threats();
        let ctx = TickContext::new(tick, &self.grid, self.agent, &threats);
        let decision = self.policy.decide(&ctx, &self.memory)?;
        observer.on_decision(tick, self.agent, &decision);
        let direction = decision.direction;
        self.memory = decision.memory;

        // ② move
        if let Some(next) = passable_step(&self.grid, self.agent, direction) {
            self.agent = next;
        }

        // ③ eat
        self.eat()?;

        // ④ decay, ⑤ ghosts
        let dt = self.config.time_per_tick;
        for g in &mut self.ghosts {
            g.decay(dt);
        }
        for g in &mut self.ghosts {
            g.step(&self.grid, self.agent);
        }

        // ⑥ collide, ⑦ status
        if self.collide() {
            self.status = GameStatus::Lost;
        } else if self.consumables_left() == 0 {
            self.status = GameStatus::Won;
        } else if tick.0 + 1 >= self.config.max_ticks {
            self.status = GameStatus::TimedOut;
        }

        trace!(%tick, agent = %self.agent, score = self.score, "tick end");
        self.clock.advance();
        observer.on_tick_end(&TickSummary {
            tick,
            agent:     self.agent,
            score:     self.score,
            dots_left: self.consumables_left(),
            status:    self.status,
        });
        Ok(self.status)
    }

    /// Ghost snapshots as the policy sees them.
    pub fn threats(&self) -> Vec<Threat> {
        self.ghosts.iter().map(Ghost::threat).collect()
    }

    pub fn outcome(&self) -> GameOutcome {
        GameOutcome {
            status:    self.status,
            score:     self.score,
            ticks:     self.clock.current_tick.0,
            dots_left: self.consumables_left(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn level_name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn agent(&self) -> Position {
        self.agent
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    pub fn ghosts_mut(&mut self) -> &mut [Ghost] {
        &mut self.ghosts
    }

    pub fn memory(&self) -> &AgentMemory {
        &self.memory
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Dots plus power items still on the grid.
    pub fn consumables_left(&self) -> usize {
        self.grid.count(CellCode::DOT) + self.grid.count(CellCode::POWER)
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    fn eat(&mut self) -> SimResult<()> {
        let cell = self.grid.get_at(self.agent)?;
        if cell == CellCode::DOT {
            self.grid.set_at(self.agent, CellCode::EMPTY)?;
            self.score += self.config.dot_score;
        } else if cell == CellCode::POWER {
            self.grid.set_at(self.agent, CellCode::EMPTY)?;
            self.score += self.config.power_score;
            for g in &mut self.ghosts {
                g.make_vulnerable(self.config.power_duration);
            }
            debug!(at = %self.agent, duration = self.config.power_duration, "power item eaten");
        }
        Ok(())
    }

    /// Resolve agent/ghost overlaps.  Returns `true` if the agent was caught.
    fn collide(&mut self) -> bool {
        let mut caught = false;
        for g in &mut self.ghosts {
            if g.pos != self.agent {
                continue;
            }
            if g.is_vulnerable() {
                self.score += self.config.ghost_score;
                debug!(ghost = %g.id, at = %self.agent, "ghost eaten");
                g.respawn();
            } else {
                debug!(ghost = %g.id, at = %self.agent, "agent caught");
                caught = true;
            }
        }
        caught
    }
}
