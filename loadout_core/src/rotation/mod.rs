//! Rotation simulator - Discrete-event damage timeline for one build
//!
//! Each ability moves through `Idle → Casting → Recovering → Idle`. A global
//! auto-attack timer and one internal-cooldown timer per proc run alongside.
//! At every decision point the [`RotationStrategy`] picks the next action.

mod procs;
mod queue;
mod simulator;
mod state;

pub use procs::{collect_procs, ProcBinding};
pub use queue::{EventKind, EventQueue, ScheduledEvent};
pub use simulator::simulate;
pub use state::{AbilityPlan, AbilityState, AbilityTracker};

use serde::{Deserialize, Serialize};

/// How the next action is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationStrategy {
    /// Cast the ready ability with the highest expected damage, else attack
    #[default]
    Greedy,
    /// Follow the champion's combo sequence, then continue greedily
    Scripted,
}

/// Limits and tunables for one simulation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Length of the objective window in seconds
    pub window: f64,
    /// Hard cap on timeline length
    pub max_events: usize,
    /// Damage multiplier of a critical strike
    pub crit_multiplier: f64,
    /// Stack cap for `stack` DoTs that do not set one
    pub default_max_stacks: u32,
    pub strategy: RotationStrategy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            window: 3.0,
            max_events: 4096,
            crit_multiplier: 1.75,
            default_max_stacks: 5,
            strategy: RotationStrategy::Greedy,
        }
    }
}
