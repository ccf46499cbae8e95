//! RuneSource - Stats from the selected rune page

use crate::catalog::RuneDefinition;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

/// Stats from a rune page
pub struct RuneSource<'a> {
    pub rune: &'a RuneDefinition,
}

impl<'a> RuneSource<'a> {
    pub fn new(rune: &'a RuneDefinition) -> Self {
        RuneSource { rune }
    }
}

impl StatSource for RuneSource<'_> {
    fn id(&self) -> &str {
        &self.rune.id
    }

    fn priority(&self) -> i32 {
        100
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        for (&stat, &value) in &self.rune.stats {
            stats.add_flat(stat, value);
        }
        for (&stat, &value) in &self.rune.percent {
            stats.add_percent(stat, value);
        }
    }
}
