//! Target profiles - The defender a build is evaluated against

use crate::types::DamageType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fractional damage reductions applied after resistances
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageReduction {
    /// Applies to every damage type
    #[serde(default)]
    pub all: f64,
    #[serde(default)]
    pub physical: f64,
    #[serde(default)]
    pub magic: f64,
}

impl DamageReduction {
    /// Damage multiplier for a damage type
    pub fn multiplier(&self, damage_type: DamageType) -> f64 {
        let all = 1.0 - self.all.clamp(0.0, 1.0);
        let typed = match damage_type {
            DamageType::Physical => 1.0 - self.physical.clamp(0.0, 1.0),
            DamageType::Magic => 1.0 - self.magic.clamp(0.0, 1.0),
            DamageType::True => 1.0,
        };
        all * typed
    }
}

/// Defensive stats of the simulated target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetProfile {
    pub name: String,
    /// Max health, read by percent-health damage
    pub health: f64,
    pub armor: f64,
    pub magic_resist: f64,
    #[serde(default)]
    pub damage_reduction: DamageReduction,
}

impl TargetProfile {
    /// Canonical high-resistance target
    pub fn tank() -> Self {
        TargetProfile {
            name: "tank".to_string(),
            health: 3500.0,
            armor: 180.0,
            magic_resist: 120.0,
            damage_reduction: DamageReduction {
                all: 0.1,
                ..Default::default()
            },
        }
    }

    /// Canonical low-resistance target
    pub fn squishy() -> Self {
        TargetProfile {
            name: "squishy".to_string(),
            health: 2000.0,
            armor: 60.0,
            magic_resist: 40.0,
            damage_reduction: DamageReduction::default(),
        }
    }
}

/// Target selection for a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetSpec {
    Tank,
    Squishy,
    Custom(TargetProfile),
}

impl fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetSpec::Tank => write!(f, "tank"),
            TargetSpec::Squishy => write!(f, "squishy"),
            TargetSpec::Custom(profile) => write!(f, "custom:{}", profile.name),
        }
    }
}
