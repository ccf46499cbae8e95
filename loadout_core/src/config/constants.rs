//! Engine constants configuration

use super::ConfigError;
use crate::defense::{TargetProfile, TargetSpec};
use crate::rotation::{RotationStrategy, SimulationConfig};
use crate::search::MAX_SLOTS;
use crate::stat_block::ResolveOptions;
use crate::types::ObjectiveMode;
use serde::{Deserialize, Serialize};

/// Tunable engine constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub levels: LevelConstants,
    #[serde(default)]
    pub search: SearchConstants,
    #[serde(default)]
    pub simulation: SimulationConstants,
    #[serde(default)]
    pub scoring: ScoringConstants,
    #[serde(default)]
    pub targets: TargetConstants,
}

impl EngineConfig {
    /// Bundled defaults
    pub fn bundled() -> Result<Self, ConfigError> {
        let config: EngineConfig = super::parse_toml(include_str!("../../config/engine.toml"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject constants no query could run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |msg: String| Err(ConfigError::ValidationError(msg));

        if self.levels.min == 0 || self.levels.min > self.levels.max {
            return fail(format!("level range {}..={} is empty", self.levels.min, self.levels.max));
        }
        if self.search.max_slots == 0 || self.search.max_slots > MAX_SLOTS {
            return fail(format!("max_slots must be within 1..={}", MAX_SLOTS));
        }
        let sim = &self.simulation;
        if !(sim.burst_window > 0.0) || !(sim.dot_window > 0.0) {
            return fail("objective windows must be positive".to_string());
        }
        if sim.max_events == 0 {
            return fail("max_events must be positive".to_string());
        }
        if !(sim.crit_multiplier >= 1.0) {
            return fail(format!("crit multiplier {} is below 1", sim.crit_multiplier));
        }
        if !(sim.attack_speed_cap > 0.0) {
            return fail("attack speed cap must be positive".to_string());
        }
        if !(self.scoring.dot_spike_penalty >= 0.0) {
            return fail(format!(
                "dot spike penalty {} is negative",
                self.scoring.dot_spike_penalty
            ));
        }
        for target in [&self.targets.tank, &self.targets.squishy] {
            if !(target.health > 0.0) {
                return fail(format!("target {} has no health", target.name));
            }
        }
        Ok(())
    }

    /// Objective window for a mode
    pub fn window(&self, mode: ObjectiveMode) -> f64 {
        match mode {
            ObjectiveMode::Burst => self.simulation.burst_window,
            ObjectiveMode::Dot => self.simulation.dot_window,
        }
    }

    /// Resolver limits, with an optional budget
    pub fn resolve_options(&self, budget: Option<u32>) -> ResolveOptions {
        ResolveOptions {
            min_level: self.levels.min,
            max_level: self.levels.max,
            attack_speed_cap: self.simulation.attack_speed_cap,
            budget,
        }
    }

    /// Simulation settings for one objective mode
    pub fn simulation_config(&self, mode: ObjectiveMode, strategy: RotationStrategy) -> SimulationConfig {
        SimulationConfig {
            window: self.window(mode),
            max_events: self.simulation.max_events,
            crit_multiplier: self.simulation.crit_multiplier,
            default_max_stacks: self.simulation.default_max_dot_stacks,
            strategy,
        }
    }

    /// Concrete profile for a target selection
    pub fn target(&self, spec: &TargetSpec) -> TargetProfile {
        match spec {
            TargetSpec::Tank => self.targets.tank.clone(),
            TargetSpec::Squishy => self.targets.squishy.clone(),
            TargetSpec::Custom(profile) => profile.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConstants {
    #[serde(default = "default_min_level")]
    pub min: u32,
    #[serde(default = "default_max_level")]
    pub max: u32,
}

impl Default for LevelConstants {
    fn default() -> Self {
        LevelConstants { min: 1, max: 18 }
    }
}

fn default_min_level() -> u32 {
    1
}
fn default_max_level() -> u32 {
    18
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConstants {
    /// Item slots available to a loadout
    #[serde(default = "default_max_slots")]
    pub max_slots: usize,
}

impl Default for SearchConstants {
    fn default() -> Self {
        SearchConstants { max_slots: MAX_SLOTS }
    }
}

fn default_max_slots() -> usize {
    MAX_SLOTS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConstants {
    /// Engage window in seconds for burst queries
    #[serde(default = "default_burst_window")]
    pub burst_window: f64,
    /// Trade window in seconds for dot queries
    #[serde(default = "default_dot_window")]
    pub dot_window: f64,
    #[serde(default = "default_max_events")]
    pub max_events: usize,
    /// Critical strike damage multiplier (1.75 = 175%)
    #[serde(default = "default_crit_multiplier")]
    pub crit_multiplier: f64,
    #[serde(default = "default_attack_speed_cap")]
    pub attack_speed_cap: f64,
    /// Stack cap for stacking DoTs that do not set their own
    #[serde(default = "default_max_dot_stacks")]
    pub default_max_dot_stacks: u32,
}

impl Default for SimulationConstants {
    fn default() -> Self {
        SimulationConstants {
            burst_window: 3.0,
            dot_window: 15.0,
            max_events: 4096,
            crit_multiplier: 1.75,
            attack_speed_cap: 2.5,
            default_max_dot_stacks: 5,
        }
    }
}

fn default_burst_window() -> f64 {
    3.0
}
fn default_dot_window() -> f64 {
    15.0
}
fn default_max_events() -> usize {
    4096
}
fn default_crit_multiplier() -> f64 {
    1.75
}
fn default_attack_speed_cap() -> f64 {
    2.5
}
fn default_max_dot_stacks() -> u32 {
    5
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConstants {
    /// Weight of the largest single event subtracted from dot scores
    #[serde(default)]
    pub dot_spike_penalty: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConstants {
    #[serde(default = "TargetProfile::tank")]
    pub tank: TargetProfile,
    #[serde(default = "TargetProfile::squishy")]
    pub squishy: TargetProfile,
}

impl Default for TargetConstants {
    fn default() -> Self {
        TargetConstants {
            tank: TargetProfile::tank(),
            squishy: TargetProfile::squishy(),
        }
    }
}
