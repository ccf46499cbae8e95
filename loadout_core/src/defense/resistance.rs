//! Resistance - Armor and magic resist mitigation with penetration
//!
//! Formula:
//! - Penetration only lowers positive resistance:
//!   `effective = max(0, (resistance - flat_pen) × (1 - percent_pen))`
//! - `effective >= 0`: `damage × 100 / (100 + effective)`
//! - `effective < 0`: `damage × (2 - 100 / (100 - effective))`
//! - True damage ignores resistance entirely

use super::constants::RESISTANCE_CONSTANT;
use super::target::TargetProfile;
use crate::stat_block::Penetration;
use crate::types::DamageType;

/// Calculate effective resistance after penetration
///
/// Flat penetration applies before percent penetration and cannot push a
/// positive resistance below zero. Resistance that is already zero or
/// negative is returned unchanged.
pub fn effective_resistance(resistance: f64, flat_pen: f64, percent_pen: f64) -> f64 {
    if resistance <= 0.0 {
        return resistance;
    }
    let percent = percent_pen.clamp(0.0, 1.0);
    ((resistance - flat_pen.max(0.0)) * (1.0 - percent)).max(0.0)
}

/// Damage multiplier for an effective resistance value
///
/// Always positive; 1.0 at zero resistance, approaching 2.0 as resistance
/// goes to negative infinity.
pub fn resistance_multiplier(effective: f64) -> f64 {
    if effective >= 0.0 {
        RESISTANCE_CONSTANT / (RESISTANCE_CONSTANT + effective)
    } else {
        2.0 - RESISTANCE_CONSTANT / (RESISTANCE_CONSTANT - effective)
    }
}

/// Calculate damage after resistance mitigation
///
/// # Arguments
/// * `raw` - The incoming damage (negative values count as zero)
/// * `damage_type` - Selects the resistance: armor, magic resist or none
/// * `penetration` - The attacker's penetration bundle
/// * `armor` / `magic_resist` - The defender's resistances
pub fn mitigate(
    raw: f64,
    damage_type: DamageType,
    penetration: &Penetration,
    armor: f64,
    magic_resist: f64,
) -> f64 {
    if !(raw > 0.0) {
        return 0.0;
    }

    let resistance = match damage_type {
        DamageType::Physical => armor,
        DamageType::Magic => magic_resist,
        DamageType::True => return raw,
    };

    let (flat, percent) = penetration.for_type(damage_type);
    raw * resistance_multiplier(effective_resistance(resistance, flat, percent))
}

/// Calculate damage dealt to a target profile
///
/// Applies resistance first, then the all-damage reduction, then the
/// reduction for the damage type. True damage only takes the all-damage
/// reduction.
pub fn mitigate_against(
    raw: f64,
    damage_type: DamageType,
    penetration: &Penetration,
    target: &TargetProfile,
) -> f64 {
    let after_resist = mitigate(raw, damage_type, penetration, target.armor, target.magic_resist);
    after_resist * target.damage_reduction.multiplier(damage_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defense::DamageReduction;

    fn no_pen() -> Penetration {
        Penetration::default()
    }

    #[test]
    fn test_basic_armor() {
        // 60 raw vs 30 armor: 60 × 100 / 130
        let result = mitigate(60.0, DamageType::Physical, &no_pen(), 30.0, 0.0);
        assert!((result - 46.153846).abs() < 1e-4);
    }

    #[test]
    fn test_magic_uses_magic_resist() {
        let result = mitigate(100.0, DamageType::Magic, &no_pen(), 300.0, 100.0);
        assert!((result - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_true_damage_bypasses() {
        let pen = Penetration {
            armor_flat: 50.0,
            ..Default::default()
        };
        let result = mitigate(100.0, DamageType::True, &pen, 500.0, 500.0);
        assert!((result - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_flat_before_percent() {
        // (100 - 10) × (1 - 0.4) = 54
        assert!((effective_resistance(100.0, 10.0, 0.4) - 54.0).abs() < 1e-9);
    }

    #[test]
    fn test_penetration_floors_at_zero() {
        assert!(effective_resistance(20.0, 50.0, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_resistance_untouched_by_pen() {
        assert!((effective_resistance(-20.0, 30.0, 0.5) + 20.0).abs() < f64::EPSILON);
        // 2 - 100 / 120
        let result = mitigate(100.0, DamageType::Physical, &no_pen(), -20.0, 0.0);
        assert!((result - 116.666_666).abs() < 1e-4);
    }

    #[test]
    fn test_negative_raw_is_zero() {
        assert!(mitigate(-50.0, DamageType::Magic, &no_pen(), 10.0, 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_target_damage_reduction() {
        let target = TargetProfile {
            name: "warden".to_string(),
            health: 3000.0,
            armor: 100.0,
            magic_resist: 0.0,
            damage_reduction: DamageReduction {
                all: 0.1,
                physical: 0.5,
                magic: 0.0,
            },
        };
        // 200 → 100 (armor) → 90 (all) → 45 (physical)
        let physical = mitigate_against(200.0, DamageType::Physical, &no_pen(), &target);
        assert!((physical - 45.0).abs() < 1e-9);
        // True damage only takes the all-damage reduction
        let true_damage = mitigate_against(200.0, DamageType::True, &no_pen(), &target);
        assert!((true_damage - 180.0).abs() < 1e-9);
    }
}
