//! StatAccumulator - Collects stat modifications before applying to StatBlock

use crate::catalog::ConditionalBonus;
use crate::stat_block::StatBlock;
use crate::types::StatKind;
use std::collections::BTreeMap;

/// Accumulates stat modifications from various sources
///
/// This is used during resolution to collect every modification before
/// applying them to a StatBlock. Maps are ordered so that folding is
/// independent of hash seeds.
#[derive(Debug, Clone, Default)]
pub struct StatAccumulator {
    /// Champion values at the resolved level
    pub base: BTreeMap<StatKind, f64>,
    /// Flat additions
    pub flat: BTreeMap<StatKind, f64>,
    /// Ratio bonuses over the base value
    pub increased: BTreeMap<StatKind, f64>,
    /// Percent multipliers, one entry per source
    pub more: BTreeMap<StatKind, Vec<f64>>,
    /// Conditional bonuses, evaluated after everything else
    pub conditional: Vec<ConditionalBonus>,
}

impl StatAccumulator {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        StatAccumulator::default()
    }

    /// Set the champion base value for a stat
    pub fn set_base(&mut self, stat: StatKind, value: f64) {
        self.base.insert(stat, value);
    }

    /// Apply a flat bonus from an item or rune
    ///
    /// Attack speed bonuses are ratios over base attack speed, so they land in
    /// the increased bucket instead of the flat one.
    pub fn add_flat(&mut self, stat: StatKind, value: f64) {
        match stat {
            StatKind::AttackSpeed => *self.increased.entry(stat).or_insert(0.0) += value,
            _ => *self.flat.entry(stat).or_insert(0.0) += value,
        }
    }

    /// Apply a ratio bonus over the base value
    pub fn add_increased(&mut self, stat: StatKind, value: f64) {
        *self.increased.entry(stat).or_insert(0.0) += value;
    }

    /// Apply a percent multiplier
    pub fn add_percent(&mut self, stat: StatKind, value: f64) {
        self.more.entry(stat).or_default().push(value);
    }

    /// Register a conditional bonus
    pub fn add_conditional(&mut self, bonus: ConditionalBonus) {
        self.conditional.push(bonus);
    }

    /// Apply accumulated stats to a block
    ///
    /// Conditional predicates are all evaluated against the unconditional
    /// values, then every satisfied bonus is added. With `force_conditionals`
    /// the predicates are skipped, which yields an upper bound.
    pub fn apply_to(&self, block: &mut StatBlock, force_conditionals: bool) {
        for &stat in StatKind::all() {
            let value = block.stat_mut(stat);
            value.base = self.base.get(&stat).copied().unwrap_or(0.0);
            value.flat = self.flat.get(&stat).copied().unwrap_or(0.0);
            value.increased = self.increased.get(&stat).copied().unwrap_or(0.0);
            value.more = self.more.get(&stat).cloned().unwrap_or_default();
            value.conditional = 0.0;
        }

        let active: Vec<&ConditionalBonus> = self
            .conditional
            .iter()
            .filter(|c| force_conditionals || block.stat(c.when).unconditional() >= c.at_least)
            .collect();

        for bonus in active {
            block.stat_mut(bonus.stat).add_conditional(bonus.value);
        }
    }
}
