//! Tuning configuration for [`DecisionPolicy`](crate::DecisionPolicy).
//!
//! Thresholds are hop counts on the clamped danger field unless stated
//! otherwise.  Weights are plain integers; only their relative sizes matter.

use crate::{PolicyError, PolicyResult};

// ── ScoreWeights ──────────────────────────────────────────────────────────────

/// Scoring weights for every mode.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct ScoreWeights {
    // Forage, dot scoring.
    /// Per hop of distance to the nearest dot.  The dominant forage term.
    pub dot_distance:        i64,
    /// Stepping onto a dot.
    pub dot_reward:          i64,
    /// Stepping onto a power item while foraging dots.
    pub dot_power_reward:    i64,
    /// Per open neighbor of the candidate cell.
    pub dot_exit:            i64,
    /// Candidate cell is in loop memory.
    pub recent_penalty:      i64,
    /// Per hop of danger distance while inside `soft_danger`.
    pub soft_safety:         i64,
    /// Flat bonus when the candidate is beyond `soft_danger`.
    pub safe_bonus:          i64,
    /// Moving in the same direction as last tick.
    pub continuity_bonus:    i64,
    /// Reversing last tick's direction.
    pub reverse_penalty:     i64,
    /// Candidate from which no dot is reachable.
    pub no_dot_penalty:      i64,
    /// Power item within `power_free_distance` of the candidate.
    pub power_nearby_bonus:  i64,

    // Forage, power scoring.
    pub power_distance:      i64,
    pub power_reward:        i64,
    pub power_exit:          i64,
    pub power_safety:        i64,

    // Escape, safe candidates only.  Cornered escape ranks by
    // (danger, exits, not recent) instead.
    pub escape_safety:       i64,
    /// Per open neighbor.  Must exceed `escape_recent` so one extra exit
    /// outweighs a recent visit.
    pub escape_exit:         i64,
    pub escape_progress:     i64,
    pub escape_recent:       i64,

    // Stagnation override.
    pub unstick_progress:    i64,
    pub unstick_safety:      i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            dot_distance:       320,
            dot_reward:         1200,
            dot_power_reward:   400,
            dot_exit:           55,
            recent_penalty:     120,
            soft_safety:        120,
            safe_bonus:         600,
            continuity_bonus:   20,
            reverse_penalty:    15,
            no_dot_penalty:     2000,
            power_nearby_bonus: 200,

            power_distance:     260,
            power_reward:       900,
            power_exit:         35,
            power_safety:       160,

            escape_safety:      3000,
            escape_exit:        180,
            escape_progress:    40,
            escape_recent:      150,

            unstick_progress:   1000,
            unstick_safety:     40,
        }
    }
}

// ── PolicyConfig ──────────────────────────────────────────────────────────────

/// Named thresholds and weights for the decision policy.
///
/// Build one with [`PolicyConfig::default`] (escape-first, chases vulnerable
/// threats) or [`PolicyConfig::forager`] (dot-first), adjust fields, and pass
/// it to [`DecisionPolicy::new`](crate::DecisionPolicy::new), which calls
/// [`validate`](Self::validate).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct PolicyConfig {
    /// Danger distance at or below which the agent escapes.
    pub escape_trigger:           u32,
    /// Upper bound of the "danger rising" band `(escape_trigger, danger_rising]`
    /// in which a nearby power item is preferred over dots.
    pub danger_rising:            u32,
    /// Danger distance at or below which a candidate is avoided unless the
    /// agent is cornered.
    pub hard_avoid:               u32,
    /// Below this danger distance, safety shapes the forage score.
    pub soft_danger:              u32,
    /// Clamp applied to danger distances; unreachable reads as this value.
    pub danger_horizon:           u32,
    /// Power items this close are taken regardless of dots.
    pub power_free_distance:      u32,
    /// How much farther than the nearest dot a power item may be while
    /// danger is rising.
    pub power_slack:              u32,
    /// Head for a power item whenever it is strictly closer than the nearest
    /// dot.  When off, power items are only sought under the free-distance
    /// and rising-danger rules.
    pub prefer_closer_consumable: bool,
    /// Capacity of the loop memory.
    pub loop_capacity:            usize,
    /// The stagnation override fires once stagnation exceeds this many ticks.
    pub stagnation_limit:         u32,
    /// Extra danger distance, beyond `escape_trigger`, required for the
    /// stagnation override.
    pub stagnation_safety_margin: u32,
    /// Enable the ChaseVulnerable mode.  Targets rank by fewer hops first,
    /// then by more vulnerable ticks left.
    pub chase_vulnerable:         bool,
    /// Ticks of vulnerability that must remain on arrival.
    pub chase_margin_ticks:       u32,
    /// Game time represented by one tick; converts vulnerability timers to
    /// ticks.
    pub time_per_tick:            f64,
    pub weights:                  ScoreWeights,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            escape_trigger:           6,
            danger_rising:            9,
            hard_avoid:               1,
            soft_danger:              7,
            danger_horizon:           50,
            power_free_distance:      2,
            power_slack:              2,
            prefer_closer_consumable: true,
            loop_capacity:            10,
            stagnation_limit:         5,
            stagnation_safety_margin: 1,
            chase_vulnerable:         true,
            chase_margin_ticks:       2,
            time_per_tick:            0.1,
            weights:                  ScoreWeights::default(),
        }
    }
}

impl PolicyConfig {
    /// Dot-first preset: escapes only when a threat is very close, never
    /// chases vulnerable threats.
    pub fn forager() -> Self {
        Self {
            escape_trigger:   3,
            danger_rising:    6,
            chase_vulnerable: false,
            ..Self::default()
        }
    }

    /// Check internal consistency.
    pub fn validate(&self) -> PolicyResult<()> {
        if self.danger_horizon == 0 {
            return Err(PolicyError::Config("danger_horizon must be positive".into()));
        }
        if self.escape_trigger >= self.danger_horizon {
            return Err(PolicyError::Config(format!(
                "escape_trigger ({}) must be below danger_horizon ({})",
                self.escape_trigger, self.danger_horizon
            )));
        }
        if self.danger_rising < self.escape_trigger {
            return Err(PolicyError::Config(format!(
                "danger_rising ({}) must not be below escape_trigger ({})",
                self.danger_rising, self.escape_trigger
            )));
        }
        if self.hard_avoid >= self.danger_horizon {
            return Err(PolicyError::Config(format!(
                "hard_avoid ({}) must be below danger_horizon ({})",
                self.hard_avoid, self.danger_horizon
            )));
        }
        if self.loop_capacity == 0 {
            return Err(PolicyError::Config("loop_capacity must be positive".into()));
        }
        if self.weights.escape_recent >= self.weights.escape_exit {
            return Err(PolicyError::Config(format!(
                "escape_recent ({}) must be below escape_exit ({})",
                self.weights.escape_recent, self.weights.escape_exit
            )));
        }
        if !(self.time_per_tick.is_finite() && self.time_per_tick > 0.0) {
            return Err(PolicyError::Config(format!(
                "time_per_tick must be positive and finite, got {}",
                self.time_per_tick
            )));
        }
        Ok(())
    }
}
