//! Core types shared across the engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Damage type of a single hit or tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    /// Mitigated by armor
    Physical,
    /// Mitigated by magic resist
    Magic,
    /// Bypasses resistances
    True,
}

impl DamageType {
    /// Get all damage types
    pub fn all() -> &'static [DamageType] {
        &[DamageType::Physical, DamageType::Magic, DamageType::True]
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamageType::Physical => write!(f, "physical"),
            DamageType::Magic => write!(f, "magic"),
            DamageType::True => write!(f, "true"),
        }
    }
}

/// Damage type declared on an ability
///
/// Mixed abilities split each hit into a physical and a magic portion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityDamageType {
    Physical,
    Magic,
    True,
    Mixed {
        /// Share of the hit dealt as physical damage (0.0 to 1.0)
        physical_share: f64,
    },
}

impl AbilityDamageType {
    /// Split a raw amount into per-type portions
    pub fn split(&self, amount: f64) -> Vec<(DamageType, f64)> {
        match *self {
            AbilityDamageType::Physical => vec![(DamageType::Physical, amount)],
            AbilityDamageType::Magic => vec![(DamageType::Magic, amount)],
            AbilityDamageType::True => vec![(DamageType::True, amount)],
            AbilityDamageType::Mixed { physical_share } => {
                let share = physical_share.clamp(0.0, 1.0);
                vec![
                    (DamageType::Physical, amount * share),
                    (DamageType::Magic, amount * (1.0 - share)),
                ]
            }
        }
    }
}

impl From<DamageType> for AbilityDamageType {
    fn from(value: DamageType) -> Self {
        match value {
            DamageType::Physical => AbilityDamageType::Physical,
            DamageType::Magic => AbilityDamageType::Magic,
            DamageType::True => AbilityDamageType::True,
        }
    }
}

/// Every stat an item, rune or champion can contribute to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    AttackDamage,
    AbilityPower,
    /// Attack speed bonuses are ratios over base attack speed (0.25 = +25%)
    AttackSpeed,
    AbilityHaste,
    /// Critical strike chance as a fraction (0.2 = 20%)
    CritChance,
    /// Flat armor penetration
    Lethality,
    /// Percent armor penetration as a fraction
    ArmorPenetration,
    /// Flat magic penetration
    MagicPenetration,
    /// Percent magic penetration as a fraction
    MagicPenetrationPercent,
    Health,
    Armor,
    MagicResist,
}

impl StatKind {
    /// Get all stat kinds
    pub fn all() -> &'static [StatKind] {
        &[
            StatKind::AttackDamage,
            StatKind::AbilityPower,
            StatKind::AttackSpeed,
            StatKind::AbilityHaste,
            StatKind::CritChance,
            StatKind::Lethality,
            StatKind::ArmorPenetration,
            StatKind::MagicPenetration,
            StatKind::MagicPenetrationPercent,
            StatKind::Health,
            StatKind::Armor,
            StatKind::MagicResist,
        ]
    }
}

/// Stat a damage formula can scale from
///
/// Includes the derived bonus values that are not stored as stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalingStat {
    AttackDamage,
    /// Attack damage above the champion's base at the current level
    BonusAttackDamage,
    AbilityPower,
    Health,
    /// Health above the champion's base at the current level
    BonusHealth,
    Armor,
    MagicResist,
}

/// One scaling coefficient: `ratio × stat`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scaling {
    pub stat: ScalingStat,
    pub ratio: f64,
}

impl Scaling {
    pub fn new(stat: ScalingStat, ratio: f64) -> Self {
        Scaling { stat, ratio }
    }
}

/// Objective model for a build query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveMode {
    /// Peak damage inside a short engage window
    Burst,
    /// Sustained damage across an extended trade
    Dot,
}

impl fmt::Display for ObjectiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectiveMode::Burst => write!(f, "burst"),
            ObjectiveMode::Dot => write!(f, "dot"),
        }
    }
}
