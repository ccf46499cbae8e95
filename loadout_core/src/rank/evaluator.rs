//! Evaluator - Resolve, simulate and score one candidate

use super::topn::Scored;
use super::{BuildQuery, ScoringPolicy};
use crate::catalog::{validate_ability, CatalogSource, ChampionDefinition, ItemDefinition, RuneDefinition};
use crate::config::EngineConfig;
use crate::damage::Timeline;
use crate::defense::TargetProfile;
use crate::error::BuildError;
use crate::rotation::{collect_procs, simulate, SimulationConfig};
use crate::search::{EnumeratorConfig, ScoreBound};
use crate::stat_block::{resolve, ResolveOptions};

/// Everything needed to score candidates for one query
pub(crate) struct Evaluator<'a> {
    pub champion: &'a ChampionDefinition,
    pub level: u32,
    pub items: &'a [ItemDefinition],
    pub rune: Option<&'a RuneDefinition>,
    pub target: TargetProfile,
    pub resolve: ResolveOptions,
    pub sim: SimulationConfig,
    pub policy: ScoringPolicy,
    pub keep_timelines: bool,
    pub max_items: usize,
}

impl<'a> Evaluator<'a> {
    /// Look up and check the query inputs
    ///
    /// Check order: champion, level, rune, then every ability of the champion.
    pub fn prepare<C: CatalogSource + ?Sized>(
        catalog: &'a C,
        query: &BuildQuery,
        config: &EngineConfig,
    ) -> Result<Self, BuildError> {
        let champion = catalog.champion(&query.champion)?;
        let resolve = config.resolve_options(query.budget);
        resolve.check_level(query.level)?;
        let rune = query.rune.as_deref().map(|id| catalog.rune(id)).transpose()?;
        for ability in &champion.abilities {
            validate_ability(&champion.id, ability)?;
        }

        let max_items = query
            .max_items
            .unwrap_or(config.search.max_slots)
            .min(config.search.max_slots);

        Ok(Evaluator {
            champion,
            level: query.level,
            items: catalog.items(),
            rune,
            target: config.target(&query.target),
            resolve,
            sim: config.simulation_config(query.mode, query.strategy),
            policy: ScoringPolicy::new(query.mode, config.scoring.dot_spike_penalty),
            keep_timelines: query.keep_timelines,
            max_items,
        })
    }

    pub fn enumerator_config(&self, min_items: usize) -> EnumeratorConfig {
        EnumeratorConfig {
            min_items,
            max_items: self.max_items,
            budget: self.resolve.budget,
            prune_by_cost: true,
        }
    }

    pub fn bound(&self) -> ScoreBound<'_> {
        ScoreBound::new(
            self.champion,
            self.level,
            self.items,
            self.rune,
            &self.target,
            self.sim,
            self.resolve.attack_speed_cap,
            self.max_items,
        )
    }

    /// Simulate the items at the given catalog indices
    pub fn timeline(&self, indices: &[usize]) -> Result<Timeline, BuildError> {
        let held: Vec<&ItemDefinition> = indices.iter().map(|&i| &self.items[i]).collect();
        let stats = resolve(self.champion, self.level, &held, self.rune, &self.resolve)?;
        let procs = collect_procs(&held, self.rune);
        simulate(self.champion, &stats, &procs, &self.target, &self.sim)
    }

    /// Score the items at the given catalog indices
    pub fn evaluate(&self, indices: &[usize]) -> Result<Scored, BuildError> {
        let timeline = self.timeline(indices)?;
        Ok(Scored {
            score: self.policy.score(&timeline),
            total_damage: timeline.total_mitigated(),
            cost: indices.iter().map(|&i| self.items[i].cost).sum(),
            indices: indices.to_vec(),
            timeline: self.keep_timelines.then_some(timeline),
        })
    }
}
