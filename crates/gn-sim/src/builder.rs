//! Fluent builder for constructing a [`Game`].

use gn_core::{GameClock, ThreatId};
use gn_policy::{AgentMemory, NavigationPolicy};

use crate::{Game, GameConfig, GameStatus, Ghost, GhostKind, Level, SimError, SimResult};

/// Fluent builder for [`Game<P>`].
///
/// # Required inputs
///
/// - [`Level`] — grid and spawn points
/// - `P: NavigationPolicy` — the agent's controller
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                        |
/// |-------------------|--------------------------------|
/// | `.config(c)`      | `GameConfig::default()`        |
/// | `.ghost_kind(k)`  | `GhostKind::Greedy`            |
/// | `.cyclic(b)`      | `true`                         |
/// | `.memory(m)`      | `policy.new_memory()`          |
///
/// # Example
///
/// ```rust,ignore
/// let policy = DecisionPolicy::new(PolicyConfig::default())?;
/// let mut game = GameBuilder::new(Level::classic()?, policy)
///     .config(GameConfig { seed: 7, ..GameConfig::default() })
///     .cyclic(false)
///     .build()?;
/// let outcome = game.run(&mut NoopObserver)?;
/// ```
pub struct GameBuilder<P: NavigationPolicy> {
    level:      Level,
    policy:     P,
    config:     Option<GameConfig>,
    ghost_kind: GhostKind,
    cyclic:     bool,
    memory:     Option<AgentMemory>,
}

impl<P: NavigationPolicy> GameBuilder<P> {
    pub fn new(level: Level, policy: P) -> Self {
        Self {
            level,
            policy,
            config:     None,
            ghost_kind: GhostKind::default(),
            cyclic:     true,
            memory:     None,
        }
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn ghost_kind(mut self, kind: GhostKind) -> Self {
        self.ghost_kind = kind;
        self
    }

    /// Whether the level wraps at its edges.
    pub fn cyclic(mut self, cyclic: bool) -> Self {
        self.cyclic = cyclic;
        self
    }

    /// Start from existing agent memory instead of a fresh one.
    pub fn memory(mut self, memory: AgentMemory) -> Self {
        self.memory = Some(memory);
        self
    }

    /// Validate inputs, spawn ghosts and return a ready-to-run [`Game`].
    pub fn build(self) -> SimResult<Game<P>> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let grid = self.level.grid().clone().with_cyclic(self.cyclic);
        let agent = self.level.agent_spawn();
        if grid.get_at(agent)?.is_wall() {
            return Err(SimError::Config(format!("agent spawn {agent} is a wall")));
        }

        let ghosts = self
            .level
            .ghost_spawns()
            .iter()
            .enumerate()
            .map(|(i, &spawn)| {
                let id = ThreatId::try_from(i)
                    .map_err(|_| SimError::Config(format!("too many ghosts ({i})")))?;
                Ok(Ghost::new(id, self.ghost_kind, spawn, config.seed))
            })
            .collect::<SimResult<Vec<_>>>()?;

        let memory = self.memory.unwrap_or_else(|| self.policy.new_memory());

        Ok(Game {
            clock:  GameClock::new(config.time_per_tick),
            name:   self.level.name().to_string(),
            config,
            grid,
            agent,
            ghosts,
            policy: self.policy,
            memory,
            score:  0,
            status: GameStatus::Running,
        })
    }
}
