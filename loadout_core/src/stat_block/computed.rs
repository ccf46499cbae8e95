//! Computed/derived stat calculations for StatBlock

use crate::stat_block::StatBlock;
use crate::types::{DamageType, ScalingStat, StatKind};
use serde::{Deserialize, Serialize};

/// Attacker penetration, split by resistance it applies to
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Penetration {
    pub armor_flat: f64,
    /// Fraction (0.0 to 1.0)
    pub armor_percent: f64,
    pub magic_flat: f64,
    /// Fraction (0.0 to 1.0)
    pub magic_percent: f64,
}

impl Penetration {
    /// Get the (flat, percent) pair for a damage type
    pub fn for_type(&self, damage_type: DamageType) -> (f64, f64) {
        match damage_type {
            DamageType::Physical => (self.armor_flat, self.armor_percent),
            DamageType::Magic => (self.magic_flat, self.magic_percent),
            DamageType::True => (0.0, 0.0),
        }
    }
}

impl StatBlock {
    /// Attack damage above the champion's base at this level
    pub fn bonus_attack_damage(&self) -> f64 {
        (self.get(StatKind::AttackDamage) - self.attack_damage.base).max(0.0)
    }

    /// Health above the champion's base at this level
    pub fn bonus_health(&self) -> f64 {
        (self.get(StatKind::Health) - self.health.base).max(0.0)
    }

    /// Get the value a damage formula scales from
    pub fn scaling_value(&self, stat: ScalingStat) -> f64 {
        match stat {
            ScalingStat::AttackDamage => self.get(StatKind::AttackDamage),
            ScalingStat::BonusAttackDamage => self.bonus_attack_damage(),
            ScalingStat::AbilityPower => self.get(StatKind::AbilityPower),
            ScalingStat::Health => self.get(StatKind::Health),
            ScalingStat::BonusHealth => self.bonus_health(),
            ScalingStat::Armor => self.get(StatKind::Armor),
            ScalingStat::MagicResist => self.get(StatKind::MagicResist),
        }
    }

    /// Get the penetration bundle used by mitigation
    pub fn penetration(&self) -> Penetration {
        Penetration {
            armor_flat: self.get(StatKind::Lethality),
            armor_percent: self.get(StatKind::ArmorPenetration),
            magic_flat: self.get(StatKind::MagicPenetration),
            magic_percent: self.get(StatKind::MagicPenetrationPercent),
        }
    }

    /// Cooldown reduction implied by ability haste, as a fraction
    pub fn cooldown_reduction(&self) -> f64 {
        1.0 - 1.0 / self.haste_divisor()
    }

    /// Apply ability haste to a base cooldown
    pub fn effective_cooldown(&self, base_cooldown: f64) -> f64 {
        base_cooldown / self.haste_divisor()
    }

    /// Seconds between auto-attacks
    pub fn attack_interval(&self) -> f64 {
        let speed = self.get(StatKind::AttackSpeed);
        if speed <= 0.0 {
            return f64::INFINITY;
        }
        1.0 / speed
    }

    fn haste_divisor(&self) -> f64 {
        1.0 + self.get(StatKind::AbilityHaste).max(0.0) / 100.0
    }
}
