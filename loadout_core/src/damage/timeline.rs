//! Timeline - Ordered, append-only damage events for one simulation run

use super::{DamageEvent, DamageSource};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Damage dealt by one source across a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceTotal {
    pub source: DamageSource,
    pub events: usize,
    pub raw: f64,
    pub mitigated: f64,
}

/// Time-ordered damage events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    events: Vec<DamageEvent>,
    /// Set when the event cap ended the run before the window did
    pub truncated: bool,
}

impl Timeline {
    pub fn new() -> Self {
        Timeline::default()
    }

    /// Append an event; events arrive in non-decreasing time order
    pub fn push(&mut self, event: DamageEvent) {
        debug_assert!(self.events.last().map_or(true, |last| last.time <= event.time));
        self.events.push(event);
    }

    pub fn events(&self) -> &[DamageEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total mitigated damage
    pub fn total_mitigated(&self) -> f64 {
        self.events.iter().map(|e| e.mitigated).sum()
    }

    /// Total raw damage
    pub fn total_raw(&self) -> f64 {
        self.events.iter().map(|e| e.raw).sum()
    }

    /// Largest single mitigated event
    pub fn largest_event(&self) -> f64 {
        self.events.iter().map(|e| e.mitigated).fold(0.0, f64::max)
    }

    /// Mitigated damage dealt up to and including `time`
    pub fn mitigated_until(&self, time: f64) -> f64 {
        self.events
            .iter()
            .take_while(|e| e.time <= time)
            .map(|e| e.mitigated)
            .sum()
    }

    /// Per-source breakdown, ordered by source
    pub fn by_source(&self) -> Vec<SourceTotal> {
        let mut totals: BTreeMap<&DamageSource, SourceTotal> = BTreeMap::new();
        for event in &self.events {
            let entry = totals.entry(&event.source).or_insert_with(|| SourceTotal {
                source: event.source.clone(),
                events: 0,
                raw: 0.0,
                mitigated: 0.0,
            });
            entry.events += 1;
            entry.raw += event.raw;
            entry.mitigated += event.mitigated;
        }
        totals.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DamageType;

    fn event(time: f64, source: DamageSource, mitigated: f64) -> DamageEvent {
        DamageEvent {
            time,
            source,
            damage_type: DamageType::Magic,
            raw: mitigated * 2.0,
            mitigated,
        }
    }

    #[test]
    fn test_totals() {
        let mut timeline = Timeline::new();
        timeline.push(event(0.0, DamageSource::AutoAttack, 40.0));
        timeline.push(event(0.25, DamageSource::Ability { id: "Q".to_string() }, 120.0));
        timeline.push(event(1.0, DamageSource::AutoAttack, 40.0));

        assert!((timeline.total_mitigated() - 200.0).abs() < f64::EPSILON);
        assert!((timeline.total_raw() - 400.0).abs() < f64::EPSILON);
        assert!((timeline.largest_event() - 120.0).abs() < f64::EPSILON);
        assert!((timeline.mitigated_until(0.5) - 160.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_by_source() {
        let mut timeline = Timeline::new();
        timeline.push(event(0.0, DamageSource::AutoAttack, 40.0));
        timeline.push(event(1.0, DamageSource::AutoAttack, 40.0));
        timeline.push(event(1.5, DamageSource::DotTick { source: "Q".to_string() }, 10.0));

        let totals = timeline.by_source();
        assert_eq!(totals.len(), 2);
        let autos = totals.iter().find(|t| t.source == DamageSource::AutoAttack).unwrap();
        assert_eq!(autos.events, 2);
        assert!((autos.mitigated - 80.0).abs() < f64::EPSILON);
    }
}
