//! Structural validation for catalog records

use super::{AbilityDefinition, ChampionDefinition, ComboStep, ItemDefinition, RuneDefinition};
use crate::error::BuildError;
use std::collections::HashSet;

/// Validate one ability of a champion
///
/// Rejects negative cooldowns or cast times, empty rank tables, rank unlock
/// tables that do not line up with the rank table, negative damage terms and
/// malformed DoT effects.
pub fn validate_ability(champion: &str, ability: &AbilityDefinition) -> Result<(), BuildError> {
    let fail = |reason: String| Err(BuildError::invalid_ability(champion, &ability.id, reason));

    if !(ability.cast_time >= 0.0) {
        return fail(format!("cast time {} is negative", ability.cast_time));
    }
    if ability.ranks.is_empty() {
        return fail("rank table is empty".to_string());
    }
    for (index, rank) in ability.ranks.iter().enumerate() {
        if !(rank.cooldown >= 0.0) {
            return fail(format!("rank {} cooldown {} is negative", index + 1, rank.cooldown));
        }
        if !rank.damage.is_non_negative() {
            return fail(format!("rank {} damage has negative terms", index + 1));
        }
    }
    if !ability.rank_levels.is_empty() {
        if ability.rank_levels.len() != ability.ranks.len() {
            return fail(format!(
                "{} unlock levels for {} ranks",
                ability.rank_levels.len(),
                ability.ranks.len()
            ));
        }
        if ability.rank_levels.windows(2).any(|pair| pair[0] > pair[1]) {
            return fail("unlock levels are not ascending".to_string());
        }
    }
    if let crate::types::AbilityDamageType::Mixed { physical_share } = ability.damage_type {
        if !(0.0..=1.0).contains(&physical_share) {
            return fail(format!("physical share {} is outside 0..=1", physical_share));
        }
    }
    if let Some(dot) = &ability.dot {
        if let Err(reason) = dot.validate() {
            return fail(reason);
        }
    }
    Ok(())
}

/// Validate a champion and all of its abilities
pub fn validate_champion(champion: &ChampionDefinition) -> Result<(), BuildError> {
    let fail = |reason: String| {
        Err(BuildError::InvalidChampionDefinition {
            champion: champion.id.clone(),
            reason,
        })
    };

    if champion.id.trim().is_empty() {
        return fail("champion id is empty".to_string());
    }
    if !(champion.attack.windup >= 0.0) {
        return fail(format!("attack windup {} is negative", champion.attack.windup));
    }
    if !(champion.attack.ad_ratio >= 0.0) {
        return fail(format!("attack ratio {} is negative", champion.attack.ad_ratio));
    }
    if !(champion.base_stats.attack_speed.base >= 0.0) {
        return fail("base attack speed is negative".to_string());
    }

    let mut seen = HashSet::new();
    for ability in &champion.abilities {
        if !seen.insert(ability.id.to_ascii_lowercase()) {
            return Err(BuildError::invalid_ability(
                &champion.id,
                &ability.id,
                "ability id is not unique",
            ));
        }
        validate_ability(&champion.id, ability)?;
    }

    for step in &champion.combo {
        if let ComboStep::Ability(id) = step {
            if champion.ability(id).is_none() {
                return fail(format!("combo references unknown ability {}", id));
            }
        }
    }
    Ok(())
}

/// Validate an item
pub fn validate_item(item: &ItemDefinition) -> Result<(), BuildError> {
    if item.id.trim().is_empty() {
        return Err(BuildError::invalid_item(&item.name, "item id is empty"));
    }
    item.validate()
        .map_err(|reason| BuildError::invalid_item(&item.id, reason))
}

/// Validate a rune page
pub fn validate_rune(rune: &RuneDefinition) -> Result<(), BuildError> {
    rune.validate()
        .map_err(|reason| BuildError::invalid_rune(&rune.id, reason))
}
