//! StatBlock - Fully resolved champion stats for one candidate build

mod aggregator;
mod computed;
mod resolve;
mod stat_value;

pub use aggregator::StatAccumulator;
pub use computed::Penetration;
pub use resolve::{check_uniqueness, resolve, resolve_ceiling, ResolveOptions};
pub use stat_value::StatValue;

use crate::types::StatKind;
use serde::{Deserialize, Serialize};

/// Complete stat state for a champion wearing one candidate build
///
/// Derived and never persisted: recomputed for every candidate evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatBlock {
    // === Identity ===
    pub champion_id: String,
    pub level: u32,

    // === Offense ===
    pub attack_damage: StatValue,
    pub ability_power: StatValue,
    pub attack_speed: StatValue,
    pub ability_haste: StatValue,
    pub crit_chance: StatValue,

    // === Penetration ===
    pub lethality: StatValue,
    pub armor_penetration: StatValue,
    pub magic_penetration: StatValue,
    pub magic_penetration_percent: StatValue,

    // === Defenses ===
    pub health: StatValue,
    pub armor: StatValue,
    pub magic_resist: StatValue,

    /// Upper limit on attacks per second
    pub attack_speed_cap: f64,
}

impl StatBlock {
    /// Create a block with every stat at zero
    pub fn empty(champion_id: impl Into<String>, level: u32) -> Self {
        StatBlock {
            champion_id: champion_id.into(),
            level,
            attack_damage: StatValue::default(),
            ability_power: StatValue::default(),
            attack_speed: StatValue::default(),
            ability_haste: StatValue::default(),
            crit_chance: StatValue::default(),
            lethality: StatValue::default(),
            armor_penetration: StatValue::default(),
            magic_penetration: StatValue::default(),
            magic_penetration_percent: StatValue::default(),
            health: StatValue::default(),
            armor: StatValue::default(),
            magic_resist: StatValue::default(),
            attack_speed_cap: f64::INFINITY,
        }
    }

    /// Get the modifier container for a stat
    pub fn stat(&self, kind: StatKind) -> &StatValue {
        match kind {
            StatKind::AttackDamage => &self.attack_damage,
            StatKind::AbilityPower => &self.ability_power,
            StatKind::AttackSpeed => &self.attack_speed,
            StatKind::AbilityHaste => &self.ability_haste,
            StatKind::CritChance => &self.crit_chance,
            StatKind::Lethality => &self.lethality,
            StatKind::ArmorPenetration => &self.armor_penetration,
            StatKind::MagicPenetration => &self.magic_penetration,
            StatKind::MagicPenetrationPercent => &self.magic_penetration_percent,
            StatKind::Health => &self.health,
            StatKind::Armor => &self.armor,
            StatKind::MagicResist => &self.magic_resist,
        }
    }

    /// Get the mutable modifier container for a stat
    pub fn stat_mut(&mut self, kind: StatKind) -> &mut StatValue {
        match kind {
            StatKind::AttackDamage => &mut self.attack_damage,
            StatKind::AbilityPower => &mut self.ability_power,
            StatKind::AttackSpeed => &mut self.attack_speed,
            StatKind::AbilityHaste => &mut self.ability_haste,
            StatKind::CritChance => &mut self.crit_chance,
            StatKind::Lethality => &mut self.lethality,
            StatKind::ArmorPenetration => &mut self.armor_penetration,
            StatKind::MagicPenetration => &mut self.magic_penetration,
            StatKind::MagicPenetrationPercent => &mut self.magic_penetration_percent,
            StatKind::Health => &mut self.health,
            StatKind::Armor => &mut self.armor,
            StatKind::MagicResist => &mut self.magic_resist,
        }
    }

    /// Get the final value of a stat, with range clamps applied
    pub fn get(&self, kind: StatKind) -> f64 {
        let value = self.stat(kind).compute();
        match kind {
            StatKind::CritChance
            | StatKind::ArmorPenetration
            | StatKind::MagicPenetrationPercent => value.clamp(0.0, 1.0),
            StatKind::AttackSpeed => value.clamp(0.0, self.attack_speed_cap),
            _ => value,
        }
    }
}
