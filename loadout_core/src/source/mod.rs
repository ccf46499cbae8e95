//! StatSource - Trait and implementations for stat providers

mod champion_base;
mod item;
mod rune;

pub use champion_base::ChampionBaseSource;
pub use item::ItemSource;
pub use rune::RuneSource;

use crate::stat_block::StatAccumulator;

/// Trait for anything that contributes stats to a StatBlock
pub trait StatSource: Send + Sync {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    /// Default priority is 0.
    /// Suggested priorities:
    /// - Champion base: -100
    /// - Items: 0
    /// - Runes: 100
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source's stats to the accumulator
    fn apply(&self, stats: &mut StatAccumulator);
}

/// Apply sources in priority order; ties keep their given order
pub fn apply_sources(sources: &mut [&dyn StatSource], stats: &mut StatAccumulator) {
    sources.sort_by_key(|source| source.priority());
    for source in sources.iter() {
        source.apply(stats);
    }
}
