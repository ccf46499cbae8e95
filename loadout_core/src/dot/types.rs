//! DoT type definitions

use crate::catalog::DamageFormula;
use crate::types::DamageType;
use serde::{Deserialize, Serialize};

/// What happens when a DoT source is applied while already active
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DotStacking {
    /// Reset the remaining duration of the existing instance
    Refresh,
    /// Add another instance, up to a cap (engine default when unset)
    Stack {
        #[serde(default)]
        max_stacks: Option<u32>,
    },
    /// Every application is its own instance; stacking rules are not consulted
    Independent,
}

impl DotStacking {
    /// Maximum concurrent instances per source; `None` means uncapped
    pub fn cap(&self, default_max_stacks: u32) -> Option<u32> {
        match *self {
            DotStacking::Refresh => Some(1),
            DotStacking::Stack { max_stacks } => Some(max_stacks.unwrap_or(default_max_stacks).max(1)),
            DotStacking::Independent => None,
        }
    }
}

/// A damage-over-time effect attached to an ability or proc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotSpec {
    /// The damage type of every tick
    pub damage_type: DamageType,
    /// Total duration in seconds
    pub duration: f64,
    /// Time between damage ticks
    pub tick_interval: f64,
    /// How re-applications interact
    pub stacking: DotStacking,
    /// Damage dealt over the full duration, snapshotted at application
    pub damage: DamageFormula,
}

impl DotSpec {
    /// Calculate the number of ticks over the full duration
    pub fn tick_count(&self) -> u32 {
        if self.tick_interval <= 0.0 {
            return 0;
        }
        (self.duration / self.tick_interval - 1e-9).ceil().max(1.0) as u32
    }

    /// Split a total damage value into per-tick damage
    pub fn per_tick(&self, total: f64) -> f64 {
        match self.tick_count() {
            0 => 0.0,
            ticks => total / ticks as f64,
        }
    }

    /// Resolve the stack cap, falling back to the engine default
    pub fn max_stacks(&self, default_cap: u32) -> Option<u32> {
        self.stacking.cap(default_cap)
    }

    /// Check the structural invariants, returning a reason on failure
    pub fn validate(&self) -> Result<(), String> {
        if !(self.tick_interval > 0.0) {
            return Err(format!("dot tick interval must be positive, got {}", self.tick_interval));
        }
        if !(self.duration > 0.0) {
            return Err(format!("dot duration must be positive, got {}", self.duration));
        }
        if !self.damage.is_non_negative() {
            return Err("dot damage formula has negative terms".to_string());
        }
        if let DotStacking::Stack { max_stacks: Some(0) } = self.stacking {
            return Err("dot max_stacks must be at least 1".to_string());
        }
        Ok(())
    }
}
