//! ItemSource - Stats from an equipped item

use crate::catalog::ItemDefinition;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

/// Stats from an equipped item
pub struct ItemSource<'a> {
    pub item: &'a ItemDefinition,
}

impl<'a> ItemSource<'a> {
    /// Create a new item source
    pub fn new(item: &'a ItemDefinition) -> Self {
        ItemSource { item }
    }
}

impl StatSource for ItemSource<'_> {
    fn id(&self) -> &str {
        &self.item.id
    }

    fn priority(&self) -> i32 {
        0 // Items apply at default priority
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        for (&stat, &value) in &self.item.stats {
            stats.add_flat(stat, value);
        }
        for (&stat, &value) in &self.item.percent {
            stats.add_percent(stat, value);
        }
        for bonus in &self.item.conditional {
            stats.add_conditional(*bonus);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ConditionalBonus;
    use crate::types::StatKind;

    #[test]
    fn test_item_source_buckets() {
        let mut item = ItemDefinition::new("nashors_tooth", "Nashor's Tooth", 3000)
            .with_stat(StatKind::AbilityPower, 100.0)
            .with_stat(StatKind::AttackSpeed, 0.5)
            .with_percent(StatKind::AbilityPower, 0.1);
        item.conditional.push(ConditionalBonus {
            when: StatKind::AbilityPower,
            at_least: 200.0,
            stat: StatKind::AbilityHaste,
            value: 10.0,
        });

        let source = ItemSource::new(&item);
        let mut acc = StatAccumulator::new();
        source.apply(&mut acc);

        assert!((acc.flat[&StatKind::AbilityPower] - 100.0).abs() < f64::EPSILON);
        assert!((acc.increased[&StatKind::AttackSpeed] - 0.5).abs() < f64::EPSILON);
        assert_eq!(acc.more[&StatKind::AbilityPower], vec![0.1]);
        assert_eq!(acc.conditional.len(), 1);
        assert_eq!(source.id(), "nashors_tooth");
    }
}
