//! ActiveDot - Tracking active DoT instances on the target

use crate::types::DamageType;
use serde::{Deserialize, Serialize};

/// An active DoT instance on the target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveDot {
    /// Instance id, unique within one simulation run
    pub id: u64,
    /// DoT source key (ability or proc); stacking rules group by this
    pub source: String,
    /// Damage type of every tick
    pub damage_type: DamageType,
    /// Raw damage per tick, snapshotted at application
    pub damage_per_tick: f64,
    /// Time between ticks
    pub tick_interval: f64,
    /// Time of the next tick
    pub next_tick: f64,
    /// Ticks left before the instance expires
    pub ticks_remaining: u32,
    /// Application time, used to find the oldest stack
    pub applied_at: f64,
}

impl ActiveDot {
    /// Create a new instance applied at `now`
    pub fn new(
        id: u64,
        source: impl Into<String>,
        damage_type: DamageType,
        damage_per_tick: f64,
        tick_interval: f64,
        ticks: u32,
        now: f64,
    ) -> Self {
        ActiveDot {
            id,
            source: source.into(),
            damage_type,
            damage_per_tick,
            tick_interval,
            next_tick: now + tick_interval,
            ticks_remaining: ticks,
            applied_at: now,
        }
    }

    /// Check if the DoT is still active
    pub fn is_active(&self) -> bool {
        self.ticks_remaining > 0
    }

    /// Refresh the duration for a reapplication
    ///
    /// Tick phase is kept; per-tick damage takes the higher value.
    pub fn refresh(&mut self, ticks: u32, new_damage_per_tick: f64) {
        if new_damage_per_tick > self.damage_per_tick {
            self.damage_per_tick = new_damage_per_tick;
        }
        self.ticks_remaining = ticks;
    }
}
