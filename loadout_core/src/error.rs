//! Error types for build queries
//!
//! Every failure is a caller or data error. Nothing here is transient, so
//! nothing is retried.

use thiserror::Error;

/// Errors that can occur while resolving, simulating or ranking builds
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BuildError {
    /// Champion level outside the supported range
    #[error("Level {level} is outside the supported range {min}..={max}")]
    InvalidLevel { level: u32, min: u32, max: u32 },

    #[error("Unknown champion: {0}")]
    UnknownChampion(String),

    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Unknown rune: {0}")]
    UnknownRune(String),

    /// Two equipped items share a uniqueness tag, or a non-stackable item
    /// appears twice (the tag is then the item id itself)
    #[error("Items {first} and {second} share unique tag '{tag}'")]
    DuplicateUniqueItem {
        tag: String,
        first: String,
        second: String,
    },

    #[error("Build costs {cost} gold, exceeding the budget of {budget}")]
    OverBudget { cost: u32, budget: u32 },

    #[error("Invalid ability {ability} on {champion}: {reason}")]
    InvalidAbilityDefinition {
        champion: String,
        ability: String,
        reason: String,
    },

    #[error("Invalid item {item}: {reason}")]
    InvalidItemDefinition { item: String, reason: String },

    #[error("Invalid rune {rune}: {reason}")]
    InvalidRuneDefinition { rune: String, reason: String },

    #[error("Invalid champion {champion}: {reason}")]
    InvalidChampionDefinition { champion: String, reason: String },

    /// No candidate satisfies the query constraints
    #[error("No build satisfies the query constraints")]
    EmptyResultSet,

    /// The caller abandoned the query
    #[error("Query was cancelled")]
    Cancelled,
}

impl BuildError {
    pub(crate) fn invalid_ability(
        champion: &str,
        ability: &str,
        reason: impl Into<String>,
    ) -> Self {
        BuildError::InvalidAbilityDefinition {
            champion: champion.to_string(),
            ability: ability.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_item(item: &str, reason: impl Into<String>) -> Self {
        BuildError::InvalidItemDefinition {
            item: item.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_rune(rune: &str, reason: impl Into<String>) -> Self {
        BuildError::InvalidRuneDefinition {
            rune: rune.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BuildError::InvalidLevel { level: 19, min: 1, max: 18 };
        assert!(err.to_string().contains("19"));
        assert!(err.to_string().contains("1..=18"));
    }

    #[test]
    fn test_duplicate_unique_display() {
        let err = BuildError::DuplicateUniqueItem {
            tag: "mythic".to_string(),
            first: "ludens_tempest".to_string(),
            second: "liandrys_anguish".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("mythic"));
        assert!(display.contains("ludens_tempest"));
    }
}
