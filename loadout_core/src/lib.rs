//! loadout_core - Damage simulation and item build search for champion loadouts
//!
//! This library provides:
//! - StatBlock: Champion stats resolved from base growth, items and runes
//! - Mitigation: Resistance, penetration and damage-reduction math
//! - Rotation simulator: Discrete-event damage timeline for one build
//! - Build search: Lazy enumeration of legal loadouts with score bounds
//! - Build ranker: Parallel top-N ranking of builds for a query

pub mod catalog;
pub mod config;
pub mod damage;
pub mod defense;
pub mod dot;
pub mod error;
pub mod prelude;
pub mod rank;
pub mod rotation;
pub mod search;
pub mod source;
pub mod stat_block;
pub mod types;

// Re-export core types for convenience
pub use catalog::{Catalog, CatalogSource, ChampionDefinition, ItemDefinition, RuneDefinition};
pub use config::{default_catalog, load_catalog, parse_catalog, ConfigError, EngineConfig};
pub use damage::{DamageEvent, DamageSource, Timeline};
pub use defense::{mitigate, TargetProfile, TargetSpec};
pub use error::BuildError;
pub use rank::{evaluate_build, top_builds, BuildQuery, CancelToken, RankedResult, SearchMode};
pub use rotation::{simulate, RotationStrategy, SimulationConfig};
pub use stat_block::{resolve, StatBlock};
pub use types::{DamageType, ObjectiveMode, StatKind};
