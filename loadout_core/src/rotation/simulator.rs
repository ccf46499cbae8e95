//! Simulator - The discrete-event loop

use super::procs::ProcBinding;
use super::queue::{EventKind, EventQueue};
use super::state::{AbilityPlan, AbilityTracker};
use super::{RotationStrategy, SimulationConfig};
use crate::catalog::{validate_ability, ChampionDefinition, ComboStep, ProcPayload};
use crate::damage::{auto_attack_damage, split_ability_damage, DamageEvent, DamageSource, Timeline};
use crate::defense::{mitigate_against, TargetProfile};
use crate::dot::{apply_dot, process_tick, ActiveDot, DotApplication, DotSpec};
use crate::error::BuildError;
use crate::stat_block::{Penetration, StatBlock};
use crate::types::DamageType;
use tracing::{debug, trace, warn};

/// Run one rotation and return its damage timeline
///
/// Fails with `InvalidAbilityDefinition` before simulating when any ability
/// of the champion is malformed.
pub fn simulate(
    champion: &ChampionDefinition,
    stats: &StatBlock,
    procs: &[ProcBinding<'_>],
    target: &TargetProfile,
    config: &SimulationConfig,
) -> Result<Timeline, BuildError> {
    for ability in &champion.abilities {
        validate_ability(&champion.id, ability)?;
    }

    let mut sim = Simulator::new(champion, stats, procs, target, config);
    sim.run();

    debug!(
        target: "rotation",
        champion = %champion.id,
        events = sim.timeline.len(),
        total = sim.timeline.total_mitigated(),
        "rotation finished"
    );
    Ok(sim.timeline)
}

/// Next step chosen at a decision point
#[derive(Debug, Clone, Copy, PartialEq)]
enum Action {
    Cast(usize),
    Attack,
    Wait(f64),
}

struct Simulator<'a> {
    champion: &'a ChampionDefinition,
    stats: &'a StatBlock,
    procs: &'a [ProcBinding<'a>],
    target: &'a TargetProfile,
    config: &'a SimulationConfig,
    penetration: Penetration,

    plans: Vec<AbilityPlan<'a>>,
    trackers: Vec<AbilityTracker>,
    attack_ready: f64,
    attack_interval: f64,
    auto_damage: f64,
    proc_ready: Vec<f64>,
    combo_cursor: usize,

    dots: Vec<ActiveDot>,
    next_dot_id: u64,
    queue: EventQueue,
    now: f64,
    timeline: Timeline,
}

impl<'a> Simulator<'a> {
    fn new(
        champion: &'a ChampionDefinition,
        stats: &'a StatBlock,
        procs: &'a [ProcBinding<'a>],
        target: &'a TargetProfile,
        config: &'a SimulationConfig,
    ) -> Self {
        let penetration = stats.penetration();

        let plans: Vec<AbilityPlan<'a>> = champion
            .abilities
            .iter()
            .enumerate()
            .filter_map(|(index, ability)| {
                let rank = ability.rank_for_level(stats.level)?;
                let direct: f64 =
                    split_ability_damage(&rank.damage, ability.damage_type, stats, target.health)
                        .into_iter()
                        .map(|(ty, raw)| mitigate_against(raw, ty, &penetration, target))
                        .sum();
                let dot_value = ability
                    .dot
                    .as_ref()
                    .map(|dot| dot_full_value(dot, stats, &penetration, target))
                    .unwrap_or(0.0);
                Some(AbilityPlan {
                    index,
                    ability,
                    rank,
                    cooldown: stats.effective_cooldown(rank.cooldown),
                    expected_damage: direct + dot_value,
                })
            })
            .collect();

        Simulator {
            champion,
            stats,
            procs,
            target,
            config,
            penetration,
            trackers: vec![AbilityTracker::default(); plans.len()],
            plans,
            attack_ready: 0.0,
            attack_interval: stats.attack_interval(),
            auto_damage: auto_attack_damage(stats, &champion.attack, config.crit_multiplier),
            proc_ready: vec![0.0; procs.len()],
            combo_cursor: 0,
            dots: Vec::new(),
            next_dot_id: 0,
            queue: EventQueue::new(),
            now: 0.0,
            timeline: Timeline::new(),
        }
    }

    fn run(&mut self) {
        self.queue.schedule(0.0, EventKind::Decide);

        while let Some(event) = self.queue.pop() {
            if event.time > self.config.window {
                break;
            }
            self.now = event.time;

            match event.kind {
                EventKind::AbilityHit { plan } => self.resolve_ability_hit(plan),
                EventKind::DotTick { instance } => self.resolve_dot_tick(instance),
                EventKind::Decide => self.decide(),
            }

            if self.timeline.truncated {
                warn!(
                    target: "rotation",
                    champion = %self.champion.id,
                    max_events = self.config.max_events,
                    time = self.now,
                    "event cap reached before the window ended"
                );
                break;
            }
        }
    }

    fn decide(&mut self) {
        for tracker in &mut self.trackers {
            tracker.advance(self.now);
        }

        let action = match self.config.strategy {
            RotationStrategy::Greedy => self.greedy_action(),
            RotationStrategy::Scripted => self.scripted_action(),
        };
        trace!(target: "rotation", time = self.now, action = ?action, "decision");

        match action {
            Action::Cast(plan) => {
                let cast_time = self.plans[plan].ability.cast_time;
                let cooldown = self.plans[plan].cooldown;
                self.trackers[plan].begin_cast(self.now, cast_time, cooldown);
                self.queue.schedule(self.now + cast_time, EventKind::AbilityHit { plan });
                self.queue.schedule(self.now + cast_time, EventKind::Decide);
            }
            Action::Attack => {
                self.attack_ready = self.now + self.attack_interval;
                self.record(DamageSource::AutoAttack, DamageType::Physical, self.auto_damage);
                self.trigger_procs(false);
                self.queue.schedule(self.now + self.champion.attack.windup, EventKind::Decide);
            }
            Action::Wait(until) => {
                if until.is_finite() && until <= self.config.window {
                    self.queue.schedule(until, EventKind::Decide);
                }
            }
        }
    }

    fn greedy_action(&self) -> Action {
        let mut best: Option<usize> = None;
        for (i, plan) in self.plans.iter().enumerate() {
            if !self.trackers[i].is_ready() {
                continue;
            }
            best = match best {
                None => Some(i),
                Some(current) => {
                    let other = &self.plans[current];
                    let better = plan.expected_damage > other.expected_damage
                        || (plan.expected_damage == other.expected_damage
                            && plan.cooldown < other.cooldown);
                    if better {
                        Some(i)
                    } else {
                        Some(current)
                    }
                }
            };
        }

        if let Some(plan) = best {
            return Action::Cast(plan);
        }
        if self.attack_interval.is_finite() && self.attack_ready <= self.now {
            return Action::Attack;
        }
        Action::Wait(self.next_ready_time())
    }

    fn scripted_action(&mut self) -> Action {
        let champion = self.champion;
        while let Some(step) = champion.combo.get(self.combo_cursor) {
            match step {
                ComboStep::AutoAttack => {
                    if !self.attack_interval.is_finite() {
                        self.combo_cursor += 1;
                        continue;
                    }
                    if self.attack_ready <= self.now {
                        self.combo_cursor += 1;
                        return Action::Attack;
                    }
                    return Action::Wait(self.attack_ready);
                }
                ComboStep::Ability(id) => {
                    let plan = self
                        .plans
                        .iter()
                        .position(|p| p.ability.id.eq_ignore_ascii_case(id));
                    match plan {
                        // Not learned at this level
                        None => self.combo_cursor += 1,
                        Some(plan) if self.trackers[plan].is_ready() => {
                            self.combo_cursor += 1;
                            return Action::Cast(plan);
                        }
                        Some(plan) => return Action::Wait(self.trackers[plan].ready_at()),
                    }
                }
            }
        }
        self.greedy_action()
    }

    fn next_ready_time(&self) -> f64 {
        let attack = if self.attack_interval.is_finite() {
            self.attack_ready
        } else {
            f64::INFINITY
        };
        self.trackers
            .iter()
            .filter(|t| !t.is_ready())
            .map(|t| t.ready_at())
            .fold(attack, f64::min)
    }

    fn resolve_ability_hit(&mut self, plan: usize) {
        self.trackers[plan].finish_cast();
        let ability = self.plans[plan].ability;
        let rank = self.plans[plan].rank;

        let parts = split_ability_damage(
            &rank.damage,
            ability.damage_type,
            self.stats,
            self.target.health,
        );
        for (damage_type, amount) in parts {
            self.record(
                DamageSource::Ability {
                    id: ability.id.clone(),
                },
                damage_type,
                amount,
            );
        }

        if let Some(dot) = &ability.dot {
            self.apply_dot(ability.id.clone(), dot);
        }
        self.trigger_procs(true);
    }

    fn trigger_procs(&mut self, is_ability: bool) {
        let procs = self.procs;
        for (i, binding) in procs.iter().enumerate() {
            if !binding.effect.trigger.matches(is_ability) || self.now < self.proc_ready[i] {
                continue;
            }
            self.proc_ready[i] = self.now + binding.effect.internal_cooldown;

            match &binding.effect.payload {
                ProcPayload::Hit {
                    damage_type,
                    damage,
                } => {
                    let raw = damage.evaluate(self.stats, self.target.health);
                    self.record(
                        DamageSource::Proc {
                            owner: binding.owner.to_string(),
                            proc_id: binding.effect.id.clone(),
                        },
                        *damage_type,
                        raw,
                    );
                }
                ProcPayload::Dot(dot) => self.apply_dot(binding.source_key(), dot),
            }
        }
    }

    fn apply_dot(&mut self, source: String, spec: &DotSpec) {
        let total = spec.damage.evaluate(self.stats, self.target.health);
        let id = self.next_dot_id;
        self.next_dot_id += 1;

        let instance = ActiveDot::new(
            id,
            source,
            spec.damage_type,
            spec.per_tick(total),
            spec.tick_interval,
            spec.tick_count(),
            self.now,
        );
        let first_tick = instance.next_tick;

        match apply_dot(&mut self.dots, instance, spec.stacking, self.config.default_max_stacks) {
            DotApplication::Added(id) => {
                self.queue.schedule(first_tick, EventKind::DotTick { instance: id });
            }
            DotApplication::Refreshed(id) => {
                trace!(target: "rotation", instance = id, time = self.now, "dot refreshed");
            }
        }
    }

    fn resolve_dot_tick(&mut self, instance: u64) {
        let Some(tick) = process_tick(&mut self.dots, instance) else {
            return;
        };
        self.record(
            DamageSource::DotTick {
                source: tick.source,
            },
            tick.damage_type,
            tick.damage,
        );
        if let Some(next) = tick.next_tick {
            self.queue.schedule(next, EventKind::DotTick { instance });
        }
    }

    fn record(&mut self, source: DamageSource, damage_type: DamageType, raw: f64) {
        if self.timeline.len() >= self.config.max_events {
            self.timeline.truncated = true;
            return;
        }
        let raw = raw.max(0.0);
        self.timeline.push(DamageEvent {
            time: self.now,
            source,
            damage_type,
            raw,
            mitigated: mitigate_against(raw, damage_type, &self.penetration, self.target),
        });
    }
}

/// Mitigated damage of a DoT over its full duration
fn dot_full_value(
    dot: &DotSpec,
    stats: &StatBlock,
    penetration: &Penetration,
    target: &TargetProfile,
) -> f64 {
    let total = dot.damage.evaluate(stats, target.health);
    mitigate_against(total, dot.damage_type, penetration, target)
}
