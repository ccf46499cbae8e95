//! Per-ability cast state

use crate::catalog::{AbilityDefinition, AbilityRank};

/// Lifecycle of one ability during a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AbilityState {
    Idle,
    /// Cast started; the hit resolves at `until`
    Casting { until: f64 },
    /// On cooldown until `until`
    Recovering { until: f64 },
}

/// A castable ability at the simulated level
#[derive(Debug, Clone)]
pub struct AbilityPlan<'a> {
    /// Position in the champion's ability list
    pub index: usize,
    pub ability: &'a AbilityDefinition,
    pub rank: &'a AbilityRank,
    /// Cooldown after ability haste
    pub cooldown: f64,
    /// Mitigated direct damage plus full DoT value of one cast
    pub expected_damage: f64,
}

/// Tracks one ability's state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbilityTracker {
    pub state: AbilityState,
    ready_at: f64,
}

impl Default for AbilityTracker {
    fn default() -> Self {
        AbilityTracker {
            state: AbilityState::Idle,
            ready_at: 0.0,
        }
    }
}

impl AbilityTracker {
    /// Start a cast: `Idle → Casting`
    ///
    /// The ability becomes available again at `now + cooldown`, and never
    /// before the cast itself has finished.
    pub fn begin_cast(&mut self, now: f64, cast_time: f64, cooldown: f64) {
        self.state = AbilityState::Casting { until: now + cast_time };
        self.ready_at = now + cooldown.max(cast_time);
    }

    /// The cast resolved: `Casting → Recovering`
    pub fn finish_cast(&mut self) {
        if let AbilityState::Casting { .. } = self.state {
            self.state = AbilityState::Recovering { until: self.ready_at };
        }
    }

    /// Move `Recovering → Idle` once the cooldown has elapsed
    pub fn advance(&mut self, now: f64) {
        if let AbilityState::Recovering { until } = self.state {
            if now >= until {
                self.state = AbilityState::Idle;
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state == AbilityState::Idle
    }

    /// Earliest time the ability can be cast again
    pub fn ready_at(&self) -> f64 {
        self.ready_at
    }
}
