//! DamageEvent - One entry of a simulated damage timeline

use crate::types::DamageType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What produced a damage event
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DamageSource {
    /// Direct hit of an ability
    Ability { id: String },
    AutoAttack,
    /// Hit payload of an item or rune proc
    Proc { owner: String, proc_id: String },
    /// Tick of a damage-over-time effect, keyed by its source
    DotTick { source: String },
}

impl fmt::Display for DamageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamageSource::Ability { id } => write!(f, "ability:{}", id),
            DamageSource::AutoAttack => write!(f, "auto_attack"),
            DamageSource::Proc { owner, proc_id } => write!(f, "proc:{}:{}", owner, proc_id),
            DamageSource::DotTick { source } => write!(f, "dot:{}", source),
        }
    }
}

/// A single damage instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageEvent {
    /// Seconds since the start of the window
    pub time: f64,
    pub source: DamageSource,
    pub damage_type: DamageType,
    /// Damage before resistances and reductions
    pub raw: f64,
    /// Damage actually dealt to the target
    pub mitigated: f64,
}

impl DamageEvent {
    /// Share of the raw damage removed by the target's defenses
    pub fn mitigation_ratio(&self) -> f64 {
        if self.raw <= 0.0 {
            return 0.0;
        }
        1.0 - self.mitigated / self.raw
    }
}
