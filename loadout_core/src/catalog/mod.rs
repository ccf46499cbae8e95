//! Catalog - Frozen, validated snapshot of champion, item and rune definitions
//!
//! Definitions only enter the engine through a [`CatalogSource`]. The bundled
//! [`Catalog`] validates every record on construction, so the resolver,
//! simulator and search can assume well-formed data.

mod champion;
mod formula;
mod item;
mod validate;

pub use champion::{
    AbilityDefinition, AbilityRank, AttackPattern, BaseStats, ChampionDefinition, ComboStep,
    StatGrowth,
};
pub use formula::DamageFormula;
pub use item::{
    ConditionalBonus, ItemDefinition, ProcEffect, ProcPayload, ProcTrigger, RuneDefinition,
};
pub use validate::{validate_ability, validate_champion, validate_item, validate_rune};

use crate::error::BuildError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Read-only access to definitions
///
/// Lookups accept either the identifier or the display name, case-insensitive.
pub trait CatalogSource: Send + Sync {
    /// Snapshot version; changes whenever the data changes
    fn version(&self) -> u64;

    /// Look up a champion
    fn champion(&self, id: &str) -> Result<&ChampionDefinition, BuildError>;

    /// Look up an item
    fn item(&self, id: &str) -> Result<&ItemDefinition, BuildError>;

    /// Every item in catalog order; candidate indices refer to this slice
    fn items(&self) -> &[ItemDefinition];

    /// Look up a rune page
    fn rune(&self, id: &str) -> Result<&RuneDefinition, BuildError>;

    /// Catalog index of an item
    fn item_index(&self, id: &str) -> Result<usize, BuildError> {
        self.items()
            .iter()
            .position(|item| matches_key(&item.id, &item.name, id))
            .ok_or_else(|| BuildError::UnknownItem(id.to_string()))
    }
}

/// Serialized catalog layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub version: u64,
    #[serde(default)]
    pub champions: Vec<ChampionDefinition>,
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
    #[serde(default)]
    pub runes: Vec<RuneDefinition>,
}

/// In-memory catalog snapshot
///
/// Immutable once built. Share it across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    version: u64,
    champions: Vec<ChampionDefinition>,
    items: Vec<ItemDefinition>,
    runes: Vec<RuneDefinition>,
}

impl Catalog {
    /// Build a snapshot, validating every record
    pub fn new(
        version: u64,
        champions: Vec<ChampionDefinition>,
        items: Vec<ItemDefinition>,
        runes: Vec<RuneDefinition>,
    ) -> Result<Self, BuildError> {
        let mut champion_ids = HashSet::new();
        for champion in &champions {
            validate_champion(champion)?;
            if !champion_ids.insert(champion.id.to_ascii_lowercase()) {
                return Err(BuildError::InvalidChampionDefinition {
                    champion: champion.id.clone(),
                    reason: "duplicate champion id".to_string(),
                });
            }
        }

        let mut item_ids = HashSet::new();
        for item in &items {
            validate_item(item)?;
            if !item_ids.insert(item.id.to_ascii_lowercase()) {
                return Err(BuildError::invalid_item(&item.id, "duplicate item id"));
            }
        }

        let mut rune_ids = HashSet::new();
        for rune in &runes {
            validate_rune(rune)?;
            if !rune_ids.insert(rune.id.to_ascii_lowercase()) {
                return Err(BuildError::invalid_rune(&rune.id, "duplicate rune id"));
            }
        }

        tracing::debug!(
            target: "catalog",
            version,
            champions = champions.len(),
            items = items.len(),
            runes = runes.len(),
            "catalog snapshot built"
        );

        Ok(Catalog {
            version,
            champions,
            items,
            runes,
        })
    }

    /// Build a snapshot from its serialized layout
    pub fn from_data(data: CatalogData) -> Result<Self, BuildError> {
        Catalog::new(data.version, data.champions, data.items, data.runes)
    }

    /// Every champion in catalog order
    pub fn champions(&self) -> &[ChampionDefinition] {
        &self.champions
    }

    /// Every rune page in catalog order
    pub fn runes(&self) -> &[RuneDefinition] {
        &self.runes
    }

    /// Copy the snapshot back into its serialized layout
    pub fn to_data(&self) -> CatalogData {
        CatalogData {
            version: self.version,
            champions: self.champions.clone(),
            items: self.items.clone(),
            runes: self.runes.clone(),
        }
    }
}

impl CatalogSource for Catalog {
    fn version(&self) -> u64 {
        self.version
    }

    fn champion(&self, id: &str) -> Result<&ChampionDefinition, BuildError> {
        self.champions
            .iter()
            .find(|c| matches_key(&c.id, &c.name, id))
            .ok_or_else(|| BuildError::UnknownChampion(id.to_string()))
    }

    fn item(&self, id: &str) -> Result<&ItemDefinition, BuildError> {
        self.items
            .iter()
            .find(|i| matches_key(&i.id, &i.name, id))
            .ok_or_else(|| BuildError::UnknownItem(id.to_string()))
    }

    fn items(&self) -> &[ItemDefinition] {
        &self.items
    }

    fn rune(&self, id: &str) -> Result<&RuneDefinition, BuildError> {
        self.runes
            .iter()
            .find(|r| matches_key(&r.id, &r.name, id))
            .ok_or_else(|| BuildError::UnknownRune(id.to_string()))
    }
}

fn matches_key(id: &str, name: &str, key: &str) -> bool {
    let key = key.trim();
    id.eq_ignore_ascii_case(key) || name.eq_ignore_ascii_case(key)
}
