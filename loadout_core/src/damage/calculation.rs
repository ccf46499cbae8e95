//! Damage calculation - Raw damage of hits before mitigation

use crate::catalog::{AttackPattern, DamageFormula};
use crate::stat_block::StatBlock;
use crate::types::{AbilityDamageType, DamageType, StatKind};

/// Expected damage factor from critical strikes
///
/// `1 + crit_chance × (crit_multiplier - 1)`
pub fn expected_crit_factor(crit_chance: f64, crit_multiplier: f64) -> f64 {
    1.0 + crit_chance.clamp(0.0, 1.0) * (crit_multiplier - 1.0).max(0.0)
}

/// Raw damage of one auto-attack
pub fn auto_attack_damage(stats: &StatBlock, attack: &AttackPattern, crit_multiplier: f64) -> f64 {
    let base = stats.get(StatKind::AttackDamage) * attack.ad_ratio;
    (base * expected_crit_factor(stats.get(StatKind::CritChance), crit_multiplier)).max(0.0)
}

/// Raw damage of an ability hit, split into typed portions
pub fn split_ability_damage(
    formula: &DamageFormula,
    damage_type: AbilityDamageType,
    stats: &StatBlock,
    target_health: f64,
) -> Vec<(DamageType, f64)> {
    damage_type.split(formula.evaluate(stats, target_health))
}
