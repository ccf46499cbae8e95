//! Item and rune definitions

use super::DamageFormula;
use crate::dot::DotSpec;
use crate::types::{DamageType, StatKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A flat bonus that switches on when another resolved stat reaches a threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditionalBonus {
    /// Stat the predicate reads
    pub when: StatKind,
    /// Predicate threshold (inclusive)
    pub at_least: f64,
    /// Stat receiving the bonus
    pub stat: StatKind,
    pub value: f64,
}

/// What kind of hit can trigger a proc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcTrigger {
    /// Ability hits
    OnAbility,
    /// Auto-attacks (on-hit effects)
    OnAttack,
    /// Either
    OnAnyHit,
}

impl ProcTrigger {
    /// Whether a hit of the given kind satisfies the trigger
    pub fn matches(&self, is_ability: bool) -> bool {
        match self {
            ProcTrigger::OnAbility => is_ability,
            ProcTrigger::OnAttack => !is_ability,
            ProcTrigger::OnAnyHit => true,
        }
    }
}

/// What a proc does when it fires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProcPayload {
    /// Immediate bonus damage
    Hit {
        damage_type: DamageType,
        damage: DamageFormula,
    },
    /// Applies a damage-over-time effect
    Dot(DotSpec),
}

/// An item or rune passive that deals damage when triggered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcEffect {
    /// Identifier, unique within its owner
    pub id: String,
    pub trigger: ProcTrigger,
    /// Minimum seconds between successive triggers
    #[serde(default)]
    pub internal_cooldown: f64,
    pub payload: ProcPayload,
}

impl ProcEffect {
    /// Check the structural invariants, returning a reason on failure
    pub fn validate(&self) -> Result<(), String> {
        if !(self.internal_cooldown >= 0.0) {
            return Err(format!(
                "proc {} has negative internal cooldown {}",
                self.id, self.internal_cooldown
            ));
        }
        match &self.payload {
            ProcPayload::Hit { damage, .. } if !damage.is_non_negative() => {
                Err(format!("proc {} has negative damage terms", self.id))
            }
            ProcPayload::Dot(dot) => dot.validate().map_err(|reason| format!("proc {}: {}", self.id, reason)),
            _ => Ok(()),
        }
    }
}

/// Container for an item's stats and passives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: String,
    pub name: String,
    /// Gold cost
    pub cost: u32,
    /// Flat bonuses
    #[serde(default)]
    pub stats: BTreeMap<StatKind, f64>,
    /// Percent bonuses (0.35 = +35%), applied over the post-flat value
    #[serde(default)]
    pub percent: BTreeMap<StatKind, f64>,
    #[serde(default)]
    pub conditional: Vec<ConditionalBonus>,
    #[serde(default)]
    pub procs: Vec<ProcEffect>,
    /// At most one equipped item may carry each tag
    #[serde(default)]
    pub unique_tags: Vec<String>,
    /// Whether the item may be equipped more than once
    #[serde(default)]
    pub stackable: bool,
}

impl ItemDefinition {
    /// Create an item with only a cost; used by builders and tests
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: u32) -> Self {
        ItemDefinition {
            id: id.into(),
            name: name.into(),
            cost,
            stats: BTreeMap::new(),
            percent: BTreeMap::new(),
            conditional: Vec::new(),
            procs: Vec::new(),
            unique_tags: Vec::new(),
            stackable: false,
        }
    }

    /// Add a flat bonus
    pub fn with_stat(mut self, stat: StatKind, value: f64) -> Self {
        *self.stats.entry(stat).or_insert(0.0) += value;
        self
    }

    /// Add a percent bonus
    pub fn with_percent(mut self, stat: StatKind, value: f64) -> Self {
        *self.percent.entry(stat).or_insert(0.0) += value;
        self
    }

    /// Add a proc effect
    pub fn with_proc(mut self, proc_effect: ProcEffect) -> Self {
        self.procs.push(proc_effect);
        self
    }

    /// Add a uniqueness tag
    pub fn with_unique_tag(mut self, tag: impl Into<String>) -> Self {
        self.unique_tags.push(tag.into());
        self
    }

    /// Get a flat bonus value
    pub fn stat(&self, stat: StatKind) -> f64 {
        self.stats.get(&stat).copied().unwrap_or(0.0)
    }

    /// Check the structural invariants
    ///
    /// Bonuses must be non-negative so that resolved stats only grow as items
    /// are added.
    pub fn validate(&self) -> Result<(), String> {
        validate_bonuses(&self.stats, &self.percent)?;
        for bonus in &self.conditional {
            if !(bonus.value >= 0.0) {
                return Err(format!("conditional bonus on {:?} is negative", bonus.stat));
            }
        }
        for proc_effect in &self.procs {
            proc_effect.validate()?;
        }
        Ok(())
    }
}

/// A rune page snapshot with aggregated bonuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuneDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub stats: BTreeMap<StatKind, f64>,
    #[serde(default)]
    pub percent: BTreeMap<StatKind, f64>,
    #[serde(default)]
    pub procs: Vec<ProcEffect>,
}

impl RuneDefinition {
    /// Check the structural invariants
    pub fn validate(&self) -> Result<(), String> {
        validate_bonuses(&self.stats, &self.percent)?;
        for proc_effect in &self.procs {
            proc_effect.validate()?;
        }
        Ok(())
    }
}

fn validate_bonuses(
    flat: &BTreeMap<StatKind, f64>,
    percent: &BTreeMap<StatKind, f64>,
) -> Result<(), String> {
    if let Some((stat, value)) = flat.iter().find(|(_, v)| !(**v >= 0.0)) {
        return Err(format!("flat bonus {:?} = {} is negative", stat, value));
    }
    if let Some((stat, value)) = percent.iter().find(|(_, v)| !(**v >= 0.0)) {
        return Err(format!("percent bonus {:?} = {} is negative", stat, value));
    }
    Ok(())
}
