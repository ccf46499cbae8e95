//! ChampionBaseSource - Stats from champion level growth

use crate::catalog::ChampionDefinition;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use crate::types::StatKind;

/// Base stats of a champion at a level
pub struct ChampionBaseSource<'a> {
    pub champion: &'a ChampionDefinition,
    pub level: u32,
}

impl<'a> ChampionBaseSource<'a> {
    /// Create a new champion base source
    pub fn new(champion: &'a ChampionDefinition, level: u32) -> Self {
        ChampionBaseSource { champion, level }
    }
}

impl StatSource for ChampionBaseSource<'_> {
    fn id(&self) -> &str {
        &self.champion.id
    }

    fn priority(&self) -> i32 {
        -100 // Base stats apply first
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        let base = &self.champion.base_stats;
        let level = self.level;

        stats.set_base(StatKind::AttackDamage, base.attack_damage.at(level));
        stats.set_base(StatKind::AbilityPower, base.ability_power.at(level));
        stats.set_base(StatKind::AbilityHaste, base.ability_haste.at(level));
        stats.set_base(StatKind::Health, base.health.at(level));
        stats.set_base(StatKind::Armor, base.armor.at(level));
        stats.set_base(StatKind::MagicResist, base.magic_resist.at(level));

        // Attack speed growth is a ratio bonus over the level 1 value
        stats.set_base(StatKind::AttackSpeed, base.attack_speed.base);
        let growth = base.attack_speed.per_level * level.saturating_sub(1) as f64;
        if growth != 0.0 {
            stats.add_increased(StatKind::AttackSpeed, growth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AttackPattern, BaseStats, StatGrowth};

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
    fn test_level_growth() {
        let champion = champion();
        let source = ChampionBaseSource::new(&champion, 11);
        let mut acc = StatAccumulator::new();
        source.apply(&mut acc);

        // 10 levels of growth
        assert!((acc.base[&StatKind::AttackDamage] - 83.0).abs() < 1e-9);
        assert!((acc.base[&StatKind::Health] - 1550.0).abs() < 1e-9);
        assert!((acc.base[&StatKind::AttackSpeed] - 0.668).abs() < 1e-9);
        assert!((acc.increased[&StatKind::AttackSpeed] - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_level_one_has_no_growth() {
        let champion = champion();
        let source = ChampionBaseSource::new(&champion, 1);
        let mut acc = StatAccumulator::new();
        source.apply(&mut acc);
        assert!(!acc.increased.contains_key(&StatKind::AttackSpeed));
        assert_eq!(source.priority(), -100);
    }
}
