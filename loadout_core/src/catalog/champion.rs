//! Champion and ability definitions

use super::DamageFormula;
use crate::dot::DotSpec;
use crate::types::AbilityDamageType;
use serde::{Deserialize, Serialize};

/// A stat that grows linearly with level
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatGrowth {
    pub base: f64,
    #[serde(default)]
    pub per_level: f64,
}

impl StatGrowth {
    pub fn new(base: f64, per_level: f64) -> Self {
        StatGrowth { base, per_level }
    }

    /// Value at a level (level 1 is the base)
    pub fn at(&self, level: u32) -> f64 {
        self.base + self.per_level * level.saturating_sub(1) as f64
    }
}

/// Champion base stats and their growth curves
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    #[serde(default)]
    pub attack_damage: StatGrowth,
    #[serde(default)]
    pub ability_power: StatGrowth,
    /// `per_level` is a ratio bonus over `base`, not an absolute value
    #[serde(default)]
    pub attack_speed: StatGrowth,
    #[serde(default)]
    pub ability_haste: StatGrowth,
    #[serde(default)]
    pub health: StatGrowth,
    #[serde(default)]
    pub armor: StatGrowth,
    #[serde(default)]
    pub magic_resist: StatGrowth,
}

/// How a champion's auto-attacks deal damage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackPattern {
    /// Share of attack damage dealt per attack
    #[serde(default = "default_ad_ratio")]
    pub ad_ratio: f64,
    /// Seconds the champion is locked after starting an attack
    #[serde(default)]
    pub windup: f64,
}

fn default_ad_ratio() -> f64 {
    1.0
}

impl Default for AttackPattern {
    fn default() -> Self {
        AttackPattern {
            ad_ratio: 1.0,
            windup: 0.0,
        }
    }
}

/// One rank of an ability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityRank {
    /// Base cooldown in seconds, before ability haste
    pub cooldown: f64,
    /// Direct damage per cast at this rank
    pub damage: DamageFormula,
}

/// A champion ability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityDefinition {
    /// Unique identifier within the champion (e.g., "Q")
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub damage_type: AbilityDamageType,
    /// Seconds from cast start to hit
    #[serde(default)]
    pub cast_time: f64,
    /// Per-rank cooldown and damage
    pub ranks: Vec<AbilityRank>,
    /// Champion level at which each rank unlocks (empty = fully ranked)
    #[serde(default)]
    pub rank_levels: Vec<u32>,
    /// Damage-over-time applied on hit
    #[serde(default)]
    pub dot: Option<DotSpec>,
}

impl AbilityDefinition {
    /// Return the ability rank unlocked at the provided champion level
    pub fn rank_at_level(&self, level: u32) -> usize {
        if self.rank_levels.is_empty() {
            return self.ranks.len();
        }
        let unlocked = self.rank_levels.iter().filter(|&&unlock| level >= unlock).count();
        unlocked.min(self.ranks.len())
    }

    /// Get a rank (1-based); rank 0 means not learned
    pub fn rank(&self, rank: usize) -> Option<&AbilityRank> {
        if rank == 0 {
            return None;
        }
        self.ranks.get(rank - 1)
    }

    /// Get the rank available at a level
    pub fn rank_for_level(&self, level: u32) -> Option<&AbilityRank> {
        self.rank(self.rank_at_level(level))
    }
}

/// A step of a scripted combo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComboStep {
    AutoAttack,
    Ability(String),
}

impl From<String> for ComboStep {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("aa") {
            ComboStep::AutoAttack
        } else {
            ComboStep::Ability(value)
        }
    }
}

impl From<ComboStep> for String {
    fn from(value: ComboStep) -> Self {
        match value {
            ComboStep::AutoAttack => "AA".to_string(),
            ComboStep::Ability(id) => id,
        }
    }
}

/// Container for champion stats and abilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub base_stats: BaseStats,
    #[serde(default)]
    pub attack: AttackPattern,
    #[serde(default)]
    pub abilities: Vec<AbilityDefinition>,
    /// Preferred opening sequence, used by the scripted rotation
    #[serde(default)]
    pub combo: Vec<ComboStep>,
}

impl ChampionDefinition {
    /// Look up an ability by id (case-insensitive)
    pub fn ability(&self, id: &str) -> Option<&AbilityDefinition> {
        self.abilities.iter().find(|a| a.id.eq_ignore_ascii_case(id))
    }

    /// Display label, e.g. "Ahri (mage)"
    pub fn label(&self) -> String {
        if self.role.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.role)
        }
    }
}
