//! Stat resolution - Folds champion, item and rune sources into a StatBlock

use super::{StatAccumulator, StatBlock};
use crate::catalog::{ChampionDefinition, ItemDefinition, RuneDefinition};
use crate::error::BuildError;
use crate::source::{apply_sources, ChampionBaseSource, ItemSource, RuneSource, StatSource};
use std::collections::HashMap;

/// Limits applied during resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolveOptions {
    pub min_level: u32,
    pub max_level: u32,
    /// Upper limit on attacks per second
    pub attack_speed_cap: f64,
    /// Reject builds costing more than this when set
    pub budget: Option<u32>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        ResolveOptions {
            min_level: 1,
            max_level: 18,
            attack_speed_cap: 2.5,
            budget: None,
        }
    }
}

impl ResolveOptions {
    /// Fail with `InvalidLevel` when the level is out of range
    pub fn check_level(&self, level: u32) -> Result<(), BuildError> {
        if level < self.min_level || level > self.max_level {
            return Err(BuildError::InvalidLevel {
                level,
                min: self.min_level,
                max: self.max_level,
            });
        }
        Ok(())
    }
}

/// Check that no two items share a uniqueness tag and that only stackable
/// items repeat
pub fn check_uniqueness(items: &[&ItemDefinition]) -> Result<(), BuildError> {
    let mut owners: HashMap<&str, &str> = HashMap::new();
    let mut seen: HashMap<&str, ()> = HashMap::new();

    for item in items {
        if seen.insert(item.id.as_str(), ()).is_some() && !item.stackable {
            return Err(BuildError::DuplicateUniqueItem {
                tag: item.id.clone(),
                first: item.id.clone(),
                second: item.id.clone(),
            });
        }
        for tag in &item.unique_tags {
            if let Some(first) = owners.insert(tag.as_str(), item.id.as_str()) {
                return Err(BuildError::DuplicateUniqueItem {
                    tag: tag.clone(),
                    first: first.to_string(),
                    second: item.id.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Resolve the stats of a champion wearing a set of items
///
/// Pure: identical inputs always produce an identical block. Item order does
/// not affect the result.
pub fn resolve(
    champion: &ChampionDefinition,
    level: u32,
    items: &[&ItemDefinition],
    rune: Option<&RuneDefinition>,
    options: &ResolveOptions,
) -> Result<StatBlock, BuildError> {
    options.check_level(level)?;
    check_uniqueness(items)?;

    if let Some(budget) = options.budget {
        let cost: u32 = items.iter().map(|item| item.cost).sum();
        if cost > budget {
            return Err(BuildError::OverBudget { cost, budget });
        }
    }

    let item_sources: Vec<ItemSource> = items.iter().map(|item| ItemSource::new(item)).collect();
    let rune_source = rune.map(RuneSource::new);

    let mut sources: Vec<&dyn StatSource> = item_sources.iter().map(|s| s as &dyn StatSource).collect();
    if let Some(rune_source) = &rune_source {
        sources.push(rune_source);
    }

    Ok(accumulate(champion, level, &sources, options.attack_speed_cap, false))
}

/// Resolve an optimistic block from arbitrary sources
///
/// Skips level, uniqueness and budget checks and applies every conditional
/// bonus regardless of its predicate. Used for search upper bounds.
pub fn resolve_ceiling(
    champion: &ChampionDefinition,
    level: u32,
    sources: &[&dyn StatSource],
    attack_speed_cap: f64,
) -> StatBlock {
    accumulate(champion, level, sources, attack_speed_cap, true)
}

fn accumulate(
    champion: &ChampionDefinition,
    level: u32,
    sources: &[&dyn StatSource],
    attack_speed_cap: f64,
    force_conditionals: bool,
) -> StatBlock {
    let base = ChampionBaseSource::new(champion, level);
    let mut ordered: Vec<&dyn StatSource> = Vec::with_capacity(sources.len() + 1);
    ordered.push(&base);
    ordered.extend_from_slice(sources);

    let mut acc = StatAccumulator::new();
    apply_sources(&mut ordered, &mut acc);

    let mut block = StatBlock::empty(champion.id.clone(), level);
    block.attack_speed_cap = attack_speed_cap;
    acc.apply_to(&mut block, force_conditionals);
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AttackPattern, BaseStats, ConditionalBonus, StatGrowth};
    use crate::types::StatKind;

    fn champion() -> ChampionDefinition {
        ChampionDefinition {
            id: "ahri".to_string(),
            name: "Ahri".to_string(),
            role: "mage".to_string(),
            base_stats: BaseStats {
                attack_damage: StatGrowth::new(53.0, 3.0),
                attack_speed: StatGrowth::new(0.668, 0.02),
                health: StatGrowth::new(590.0, 96.0),
                armor: StatGrowth::new(21.0, 4.2),
                magic_resist: StatGrowth::new(30.0, 1.3),
                ..Default::default()
            },
            attack: AttackPattern::default(),
            abilities: Vec::new(),
            combo: Vec::new(),
        }
    }

    #[test]
    fn test_invalid_level() {
        let result = resolve(&champion(), 19, &[], None, &ResolveOptions::default());
        assert_eq!(
            result.unwrap_err(),
            BuildError::InvalidLevel { level: 19, min: 1, max: 18 }
        );
        assert!(resolve(&champion(), 0, &[], None, &ResolveOptions::default()).is_err());
    }

    #[test]
    fn test_percent_multiplies_post_flat() {
        let champion = champion();
        let tome = ItemDefinition::new("tome", "Tome", 400).with_stat(StatKind::AbilityPower, 100.0);
        let cap = ItemDefinition::new("cap", "Deathcap", 3600)
            .with_stat(StatKind::AbilityPower, 120.0)
            .with_percent(StatKind::AbilityPower, 0.35);

        let block = resolve(&champion, 1, &[&tome, &cap], None, &ResolveOptions::default()).unwrap();
        // (100 + 120) × 1.35
        assert!((block.get(StatKind::AbilityPower) - 297.0).abs() < 1e-9);
    }

    #[test]
    fn test_item_order_independent() {
        let champion = champion();
        let a = ItemDefinition::new("a", "A", 100)
            .with_stat(StatKind::AttackDamage, 10.0)
            .with_percent(StatKind::AttackDamage, 0.1);
        let b = ItemDefinition::new("b", "B", 100).with_percent(StatKind::AttackDamage, 0.2);

        let opts = ResolveOptions::default();
        let ab = resolve(&champion, 5, &[&a, &b], None, &opts).unwrap();
        let ba = resolve(&champion, 5, &[&b, &a], None, &opts).unwrap();
        assert!((ab.get(StatKind::AttackDamage) - ba.get(StatKind::AttackDamage)).abs() < 1e-9);
    }

    #[test]
    fn test_attack_speed_ratio_and_cap() {
        let champion = champion();
        let blade = ItemDefinition::new("blade", "Blade", 1000).with_stat(StatKind::AttackSpeed, 0.5);
        let block = resolve(&champion, 1, &[&blade], None, &ResolveOptions::default()).unwrap();
        assert!((block.get(StatKind::AttackSpeed) - 0.668 * 1.5).abs() < 1e-9);

        let many: Vec<ItemDefinition> = (0..6)
            .map(|i| ItemDefinition::new(format!("b{i}"), format!("B{i}"), 1000).with_stat(StatKind::AttackSpeed, 1.0))
            .collect();
        let refs: Vec<&ItemDefinition> = many.iter().collect();
        let block = resolve(&champion, 1, &refs, None, &ResolveOptions::default()).unwrap();
        assert!((block.get(StatKind::AttackSpeed) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_unique_tag() {
        let a = ItemDefinition::new("ludens", "Luden's", 2900).with_unique_tag("mythic");
        let b = ItemDefinition::new("liandrys", "Liandry's", 3000).with_unique_tag("mythic");
        let err = check_uniqueness(&[&a, &b]).unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateUniqueItem {
                tag: "mythic".to_string(),
                first: "ludens".to_string(),
                second: "liandrys".to_string(),
            }
        );
    }

    #[test]
    fn test_non_stackable_duplicate() {
        let a = ItemDefinition::new("rabadons", "Rabadon's", 3600);
        assert!(check_uniqueness(&[&a, &a]).is_err());

        let mut tome = ItemDefinition::new("tome", "Tome", 400);
        tome.stackable = true;
        assert!(check_uniqueness(&[&tome, &tome]).is_ok());
    }

    #[test]
    fn test_over_budget() {
        let a = ItemDefinition::new("a", "A", 2500);
        let b = ItemDefinition::new("b", "B", 1000);
        let opts = ResolveOptions {
            budget: Some(3000),
            ..Default::default()
        };
        assert_eq!(
            resolve(&champion(), 1, &[&a, &b], None, &opts).unwrap_err(),
            BuildError::OverBudget { cost: 3500, budget: 3000 }
        );
        assert!(resolve(&champion(), 1, &[&a], None, &opts).is_ok());
    }

    #[test]
    fn test_conditional_bonus_at_baseline() {
        let mut item = ItemDefinition::new("horizon", "Horizon Focus", 2900).with_stat(StatKind::AbilityPower, 90.0);
        item.conditional.push(ConditionalBonus {
            when: StatKind::AbilityPower,
            at_least: 100.0,
            stat: StatKind::AbilityHaste,
            value: 15.0,
        });

        let opts = ResolveOptions::default();
        let block = resolve(&champion(), 1, &[&item], None, &opts).unwrap();
        assert!(block.get(StatKind::AbilityHaste).abs() < 1e-9);

        let tome = ItemDefinition::new("tome", "Tome", 400).with_stat(StatKind::AbilityPower, 20.0);
        let block = resolve(&champion(), 1, &[&item, &tome], None, &opts).unwrap();
        assert!((block.get(StatKind::AbilityHaste) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_rune_applies() {
        let rune = RuneDefinition {
            id: "electrocute".to_string(),
            name: "Electrocute".to_string(),
            stats: [(StatKind::AbilityPower, 18.0)].into_iter().collect(),
            percent: Default::default(),
            procs: Vec::new(),
        };
        let block = resolve(&champion(), 1, &[], Some(&rune), &ResolveOptions::default()).unwrap();
        assert!((block.get(StatKind::AbilityPower) - 18.0).abs() < 1e-9);
    }
}
