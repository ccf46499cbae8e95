//! ScoreBound - Optimistic damage bound for every completion of a prefix
//!
//! The bound resolves a ceiling stat block (prefix items plus, per stat, the
//! best bonuses the free slots could still add, with every conditional bonus
//! forced on), then bounds each damage source by
//! `max events × max mitigated damage per event`.
//!
//! Soundness relies on catalog validation: bonuses, ratios and proc damage are
//! non-negative, so resolved stats and per-event damage only grow as items are
//! added.

use crate::catalog::{
    ChampionDefinition, ConditionalBonus, ItemDefinition, ProcEffect, ProcPayload, ProcTrigger,
    RuneDefinition,
};
use crate::damage::{auto_attack_damage, split_ability_damage};
use crate::defense::{mitigate_against, TargetProfile};
use crate::dot::DotSpec;
use crate::rotation::SimulationConfig;
use crate::source::{ItemSource, RuneSource, StatSource};
use crate::stat_block::{resolve_ceiling, StatAccumulator, StatBlock};
use crate::types::{DamageType, StatKind};
use std::collections::BTreeMap;

/// Relative slack on event counts, far above accumulated rounding error
const COUNT_TOLERANCE: f64 = 1e-9;

/// Upper bound on the score of any loadout extending a prefix
pub struct ScoreBound<'a> {
    champion: &'a ChampionDefinition,
    level: u32,
    items: &'a [ItemDefinition],
    rune: Option<&'a RuneDefinition>,
    target: &'a TargetProfile,
    sim: SimulationConfig,
    attack_speed_cap: f64,
    max_items: usize,
}

/// Event counts every damage source is bounded by
struct HitCounts {
    ability: f64,
    attack: f64,
    any: f64,
}

impl<'a> ScoreBound<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        champion: &'a ChampionDefinition,
        level: u32,
        items: &'a [ItemDefinition],
        rune: Option<&'a RuneDefinition>,
        target: &'a TargetProfile,
        sim: SimulationConfig,
        attack_speed_cap: f64,
        max_items: usize,
    ) -> Self {
        ScoreBound {
            champion,
            level,
            items,
            rune,
            target,
            sim,
            attack_speed_cap,
            max_items,
        }
    }

    /// Bound the total mitigated damage of the prefix and all its extensions
    pub fn upper_bound(&self, prefix: &[usize]) -> f64 {
        let free = self.max_items.saturating_sub(prefix.len());
        let held: Vec<&ItemDefinition> = prefix.iter().map(|&i| &self.items[i]).collect();
        let pool = self.pool(prefix, &held, free);

        let ceiling = CeilingSource::from_pool(&pool, free);
        let item_sources: Vec<ItemSource> = held.iter().map(|item| ItemSource::new(item)).collect();
        let rune_source = self.rune.map(RuneSource::new);

        let mut sources: Vec<&dyn StatSource> =
            item_sources.iter().map(|s| s as &dyn StatSource).collect();
        sources.push(&ceiling);
        if let Some(rune_source) = &rune_source {
            sources.push(rune_source);
        }

        let stats = resolve_ceiling(self.champion, self.level, &sources, self.attack_speed_cap);
        self.damage_bound(&stats, &held, &pool, free)
    }

    /// Items that could still be appended, with stackable items repeated
    /// once per free slot
    fn pool(&self, prefix: &[usize], held: &[&ItemDefinition], free: usize) -> Vec<&'a ItemDefinition> {
        if free == 0 {
            return Vec::new();
        }
        let start = prefix.last().copied().unwrap_or(0);
        let mut pool = Vec::new();
        for (index, item) in self.items.iter().enumerate().skip(start) {
            if prefix.last() == Some(&index) && !item.stackable {
                continue;
            }
            let collides = item
                .unique_tags
                .iter()
                .any(|tag| held.iter().any(|h| h.unique_tags.contains(tag)));
            if collides {
                continue;
            }
            let copies = if item.stackable { free } else { 1 };
            pool.extend(std::iter::repeat(item).take(copies));
        }
        pool
    }

    fn damage_bound(
        &self,
        stats: &StatBlock,
        held: &[&ItemDefinition],
        pool: &[&ItemDefinition],
        free: usize,
    ) -> f64 {
        let window = self.sim.window;
        let cap = self.sim.max_events as f64;
        let mut total = 0.0;

        let mut ability_hits = 0.0;
        for ability in &self.champion.abilities {
            let Some(rank) = ability.rank_for_level(self.level) else {
                continue;
            };
            if ability.cast_time > window {
                continue;
            }
            let casts = self.count(stats.effective_cooldown(rank.cooldown).max(ability.cast_time));
            let direct: f64 =
                split_ability_damage(&rank.damage, ability.damage_type, stats, self.target.health)
                    .into_iter()
                    .map(|(ty, raw)| self.mitigated(stats, raw, ty))
                    .sum();
            total += casts * direct;
            ability_hits += casts;
            if let Some(dot) = &ability.dot {
                total += self.dot_bound(stats, dot, casts);
            }
        }

        let speed = stats.get(StatKind::AttackSpeed);
        let autos = if speed > 0.0 { self.count(1.0 / speed) } else { 0.0 };
        let auto_raw = auto_attack_damage(stats, &self.champion.attack, self.sim.crit_multiplier);
        total += autos * self.mitigated(stats, auto_raw, DamageType::Physical);

        let hits = HitCounts {
            ability: ability_hits.min(cap),
            attack: autos,
            any: (ability_hits + autos).min(cap),
        };

        let fixed = held
            .iter()
            .flat_map(|item| item.procs.iter())
            .chain(self.rune.into_iter().flat_map(|rune| rune.procs.iter()));
        total += fixed.map(|effect| self.proc_bound(stats, effect, &hits)).sum::<f64>();

        let mut optional: Vec<f64> = pool
            .iter()
            .map(|item| {
                item.procs
                    .iter()
                    .map(|effect| self.proc_bound(stats, effect, &hits))
                    .sum::<f64>()
            })
            .filter(|value| *value > 0.0)
            .collect();
        optional.sort_by(|a, b| b.total_cmp(a));
        total += optional.iter().take(free).sum::<f64>();

        total
    }

    fn proc_bound(&self, stats: &StatBlock, effect: &ProcEffect, hits: &HitCounts) -> f64 {
        let triggers = match effect.trigger {
            ProcTrigger::OnAbility => hits.ability,
            ProcTrigger::OnAttack => hits.attack,
            ProcTrigger::OnAnyHit => hits.any,
        };
        let fires = if effect.internal_cooldown > 0.0 {
            triggers.min(self.count(effect.internal_cooldown))
        } else {
            triggers
        };

        match &effect.payload {
            ProcPayload::Hit {
                damage_type,
                damage,
            } => {
                let raw = damage.evaluate(stats, self.target.health);
                fires * self.mitigated(stats, raw, *damage_type)
            }
            ProcPayload::Dot(dot) => self.dot_bound(stats, dot, fires),
        }
    }

    fn dot_bound(&self, stats: &StatBlock, dot: &DotSpec, applications: f64) -> f64 {
        if applications <= 0.0 || dot.tick_interval <= 0.0 {
            return 0.0;
        }
        let raw = dot.per_tick(dot.damage.evaluate(stats, self.target.health));
        let per_tick = self.mitigated(stats, raw, dot.damage_type);

        // One instance ticks at most once per interval inside the window
        let per_slot = events_within(self.sim.window, dot.tick_interval);
        let slots = match dot.stacking.cap(self.sim.default_max_stacks) {
            Some(cap) => (cap as f64).min(applications),
            None => applications,
        };
        let ticks = (applications * dot.tick_count() as f64)
            .min(slots * per_slot)
            .min(self.sim.max_events as f64);
        ticks * per_tick
    }

    /// Most events a source spaced at least `interval` apart can produce
    fn count(&self, interval: f64) -> f64 {
        let cap = self.sim.max_events as f64;
        if interval > 0.0 {
            events_within(self.sim.window, interval).min(cap)
        } else {
            cap
        }
    }

    fn mitigated(&self, stats: &StatBlock, raw: f64, damage_type: DamageType) -> f64 {
        mitigate_against(raw, damage_type, &stats.penetration(), self.target)
    }
}

/// The best bonuses a number of free slots could add
struct CeilingSource {
    flat: BTreeMap<StatKind, f64>,
    percent: Vec<(StatKind, f64)>,
    conditional: Vec<ConditionalBonus>,
}

impl CeilingSource {
    fn from_pool(pool: &[&ItemDefinition], slots: usize) -> Self {
        let mut flat = BTreeMap::new();
        let mut percent = Vec::new();

        for &stat in StatKind::all() {
            let best = top_values(pool.iter().map(|item| item.stat(stat)), slots);
            let sum: f64 = best.iter().sum();
            if sum > 0.0 {
                flat.insert(stat, sum);
            }

            let best = top_values(
                pool.iter()
                    .map(|item| item.percent.get(&stat).copied().unwrap_or(0.0)),
                slots,
            );
            percent.extend(best.into_iter().map(|value| (stat, value)));
        }

        CeilingSource {
            flat,
            percent,
            conditional: pool
                .iter()
                .flat_map(|item| item.conditional.iter().copied())
                .collect(),
        }
    }
}

impl StatSource for CeilingSource {
    fn id(&self) -> &str {
        "ceiling"
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        for (&stat, &value) in &self.flat {
            stats.add_flat(stat, value);
        }
        for &(stat, value) in &self.percent {
            stats.add_percent(stat, value);
        }
        for bonus in &self.conditional {
            stats.add_conditional(*bonus);
        }
    }
}

/// Events spaced `interval` apart from t = 0 that land in `[0, window]`
///
/// The simulator reaches event times by repeated addition, which can land on
/// the window end while `window / interval` rounds just below an integer.
fn events_within(window: f64, interval: f64) -> f64 {
    (window / interval * (1.0 + COUNT_TOLERANCE)).floor() + 1.0
}

fn top_values(values: impl Iterator<Item = f64>, count: usize) -> Vec<f64> {
    let mut values: Vec<f64> = values.filter(|v| *v > 0.0).collect();
    values.sort_by(|a, b| b.total_cmp(a));
    values.truncate(count);
    values
}
