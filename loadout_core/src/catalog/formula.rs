//! DamageFormula - The closed set of damage formula shapes

use crate::stat_block::StatBlock;
use crate::types::Scaling;
use serde::{Deserialize, Serialize};

/// How a hit, proc or DoT computes its raw damage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DamageFormula {
    /// `base + Σ ratio × stat`
    Flat {
        #[serde(default)]
        base: f64,
        #[serde(default)]
        scalings: Vec<Scaling>,
    },
    /// `(percent + Σ ratio × stat) / 100 × target max health`
    ///
    /// Scalings add percentage points, e.g. 1.0 per 100 AP is a ratio of 0.01.
    TargetMaxHealth {
        percent: f64,
        #[serde(default)]
        scalings: Vec<Scaling>,
    },
}

impl DamageFormula {
    /// Shorthand for a formula without scalings
    pub fn flat(base: f64) -> Self {
        DamageFormula::Flat {
            base,
            scalings: Vec::new(),
        }
    }

    /// Evaluate the formula against attacker stats and target health
    pub fn evaluate(&self, stats: &StatBlock, target_health: f64) -> f64 {
        let value = match self {
            DamageFormula::Flat { base, scalings } => base + scaled(scalings, stats),
            DamageFormula::TargetMaxHealth { percent, scalings } => {
                (percent + scaled(scalings, stats)) / 100.0 * target_health
            }
        };
        value.max(0.0)
    }

    /// Whether every constant and ratio is non-negative
    pub fn is_non_negative(&self) -> bool {
        match self {
            DamageFormula::Flat { base, scalings } => {
                *base >= 0.0 && scalings.iter().all(|s| s.ratio >= 0.0)
            }
            DamageFormula::TargetMaxHealth { percent, scalings } => {
                *percent >= 0.0 && scalings.iter().all(|s| s.ratio >= 0.0)
            }
        }
    }
}

fn scaled(scalings: &[Scaling], stats: &StatBlock) -> f64 {
    scalings
        .iter()
        .map(|s| s.ratio * stats.scaling_value(s.stat))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScalingStat;

    #[test]
    fn test_flat_formula() {
        let mut stats = StatBlock::empty("test", 1);
        stats.ability_power.add_flat(200.0);
        let formula = DamageFormula::Flat {
            base: 100.0,
            scalings: vec![Scaling::new(ScalingStat::AbilityPower, 0.6)],
        };
        assert!((formula.evaluate(&stats, 2000.0) - 220.0).abs() < 1e-9);
    }

    #[test]
    fn test_target_health_formula() {
        let mut stats = StatBlock::empty("test", 1);
        stats.ability_power.add_flat(100.0);
        let formula = DamageFormula::TargetMaxHealth {
            percent: 4.0,
            scalings: vec![Scaling::new(ScalingStat::AbilityPower, 0.01)],
        };
        // (4 + 1)% of 2000
        assert!((formula.evaluate(&stats, 2000.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_formula_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            damage: DamageFormula,
        }

        let parsed: Wrapper = toml::from_str(
            r#"damage = { kind = "flat", base = 40.0, scalings = [{ stat = "ability_power", ratio = 0.45 }] }"#,
        )
        .unwrap();
        assert!(parsed.damage.is_non_negative());
        assert!(matches!(parsed.damage, DamageFormula::Flat { base, .. } if (base - 40.0).abs() < f64::EPSILON));
    }
}
