//! Prelude module for convenient imports
//!
//! ```rust
//! use loadout_core::prelude::*;
//! ```

// Catalog
pub use crate::catalog::{Catalog, CatalogSource, ChampionDefinition, ItemDefinition, RuneDefinition};
pub use crate::config::{default_catalog, load_catalog, EngineConfig};

// Core types
pub use crate::stat_block::{resolve, ResolveOptions, StatBlock};
pub use crate::types::{DamageType, ObjectiveMode, StatKind};

// Damage and defense
pub use crate::damage::{DamageEvent, Timeline};
pub use crate::defense::{TargetProfile, TargetSpec};

// Simulation
pub use crate::rotation::{collect_procs, simulate, RotationStrategy, SimulationConfig};

// Ranking
pub use crate::error::BuildError;
pub use crate::rank::{evaluate_build, top_builds, BuildQuery, CancelToken, RankedResult, SearchMode};
