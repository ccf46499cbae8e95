//! StatValue - The layered modifier container (Flat → Increased → More → Conditional)

use serde::{Deserialize, Serialize};

/// Represents a stat that follows the Flat → Increased → More model
///
/// Final value is calculated as:
/// `(base + flat) × (1 + increased) × Π(1 + more) + conditional`
///
/// - `base`: The champion's value at the resolved level
/// - `flat`: Sum of all flat additions from items and runes
/// - `increased`: Sum of ratio bonuses over the base (attack speed, level growth)
/// - `more`: List of percent multipliers (as decimal, each multiplies the result)
/// - `conditional`: Sum of conditional bonuses that activated on the resolved value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    /// Base value (from the champion at a level)
    pub base: f64,
    /// Sum of all flat additions
    pub flat: f64,
    /// Sum of all increased% (as decimal, e.g., 0.40 = 40%)
    pub increased: f64,
    /// List of more% multipliers (as decimal)
    pub more: Vec<f64>,
    /// Conditional bonus added after multipliers
    pub conditional: f64,
}

impl StatValue {
    /// Create a new StatValue with the given base
    pub fn with_base(base: f64) -> Self {
        StatValue {
            base,
            ..Default::default()
        }
    }

    /// Calculate final value: (base + flat) × (1 + increased) × Π(1 + more) + conditional
    pub fn compute(&self) -> f64 {
        self.unconditional() + self.conditional
    }

    /// Value before conditional bonuses; conditional predicates read this
    pub fn unconditional(&self) -> f64 {
        self.total_flat() * self.total_increased_multiplier() * self.total_more_multiplier()
    }

    /// Add a flat bonus
    pub fn add_flat(&mut self, value: f64) {
        self.flat += value;
    }

    /// Add an increased% bonus (as decimal, e.g., 0.40 for 40%)
    pub fn add_increased(&mut self, value: f64) {
        self.increased += value;
    }

    /// Add a more% multiplier (as decimal, e.g., 0.20 for 20% more)
    pub fn add_more(&mut self, value: f64) {
        self.more.push(value);
    }

    /// Add a conditional bonus
    pub fn add_conditional(&mut self, value: f64) {
        self.conditional += value;
    }

    /// Get the total flat value (base + flat additions)
    pub fn total_flat(&self) -> f64 {
        self.base + self.flat
    }

    /// Get the total increased multiplier (1 + sum of increased%)
    pub fn total_increased_multiplier(&self) -> f64 {
        1.0 + self.increased
    }

    /// Get the total more multiplier (product of all more multipliers)
    pub fn total_more_multiplier(&self) -> f64 {
        self.more.iter().map(|m| 1.0 + m).product()
    }
}
