//! Damage system - Hit calculations and the damage timeline

mod calculation;
mod event;
mod timeline;

pub use calculation::{auto_attack_damage, expected_crit_factor, split_ability_damage};
pub use event::{DamageEvent, DamageSource};
pub use timeline::{SourceTotal, Timeline};
