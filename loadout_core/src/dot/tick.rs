//! DoT application and tick processing

use super::{ActiveDot, DotStacking};
use crate::types::DamageType;

/// What an application did to the active list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotApplication {
    /// A new instance was added; its first tick must be scheduled
    Added(u64),
    /// An existing instance was refreshed; its tick chain continues
    Refreshed(u64),
}

/// Damage produced by one tick
#[derive(Debug, Clone, PartialEq)]
pub struct DotTick {
    pub source: String,
    pub damage_type: DamageType,
    pub damage: f64,
    /// Time of the following tick, if the instance is still active
    pub next_tick: Option<f64>,
}

/// Apply a new DoT to a list of active DoTs, respecting stacking rules
///
/// - `Refresh`: at most one instance per source; reapplying resets its ticks
/// - `Stack`: up to `max_stacks` instances; at the cap the oldest is refreshed
/// - `Independent`: always adds an instance
pub fn apply_dot(
    dots: &mut Vec<ActiveDot>,
    new_dot: ActiveDot,
    stacking: DotStacking,
    default_max_stacks: u32,
) -> DotApplication {
    if let Some(cap) = stacking.cap(default_max_stacks) {
        if active_stacks(dots, &new_dot.source) >= cap as usize {
            let oldest = dots
                .iter_mut()
                .filter(|d| d.source == new_dot.source && d.is_active())
                .min_by(|a, b| a.applied_at.total_cmp(&b.applied_at).then(a.id.cmp(&b.id)));
            if let Some(oldest) = oldest {
                oldest.refresh(new_dot.ticks_remaining, new_dot.damage_per_tick);
                return DotApplication::Refreshed(oldest.id);
            }
        }
    }

    let id = new_dot.id;
    dots.push(new_dot);
    DotApplication::Added(id)
}

/// Process the scheduled tick of one instance
///
/// Returns `None` when the instance no longer exists. Expired instances are
/// removed from the list.
pub fn process_tick(dots: &mut Vec<ActiveDot>, id: u64) -> Option<DotTick> {
    let index = dots.iter().position(|d| d.id == id && d.is_active())?;

    let dot = &mut dots[index];
    dot.ticks_remaining -= 1;
    let tick = DotTick {
        source: dot.source.clone(),
        damage_type: dot.damage_type,
        damage: dot.damage_per_tick,
        next_tick: if dot.is_active() {
            dot.next_tick += dot.tick_interval;
            Some(dot.next_tick)
        } else {
            None
        },
    };

    if tick.next_tick.is_none() {
        dots.remove(index);
    }
    Some(tick)
}

/// Count active instances of a source
pub fn active_stacks(dots: &[ActiveDot], source: &str) -> usize {
    dots.iter().filter(|d| d.source == source && d.is_active()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(id: u64, damage: f64, now: f64) -> ActiveDot {
        ActiveDot::new(id, "cassiopeia:Q", DamageType::Magic, damage, 0.5, 6, now)
    }

    #[test]
    fn test_refresh_twice_keeps_one_instance() {
        let mut dots = Vec::new();
        assert_eq!(apply_dot(&mut dots, dot(1, 20.0, 0.0), DotStacking::Refresh, 5), DotApplication::Added(1));

        // Let two ticks pass
        process_tick(&mut dots, 1);
        process_tick(&mut dots, 1);
        assert_eq!(dots[0].ticks_remaining, 4);

        let result = apply_dot(&mut dots, dot(2, 15.0, 1.0), DotStacking::Refresh, 5);
        assert_eq!(result, DotApplication::Refreshed(1));
        assert_eq!(dots.len(), 1);
        assert_eq!(dots[0].ticks_remaining, 6);
        // Phase kept, higher damage kept
        assert!((dots[0].next_tick - 1.5).abs() < f64::EPSILON);
        assert!((dots[0].damage_per_tick - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stack_twice_adds_instances() {
        let mut dots = Vec::new();
        let stacking = DotStacking::Stack { max_stacks: Some(2) };
        apply_dot(&mut dots, dot(1, 10.0, 0.0), stacking, 5);
        apply_dot(&mut dots, dot(2, 10.0, 0.5), stacking, 5);
        assert_eq!(active_stacks(&dots, "cassiopeia:Q"), 2);

        // At the cap the oldest is refreshed
        let result = apply_dot(&mut dots, dot(3, 10.0, 1.0), stacking, 5);
        assert_eq!(result, DotApplication::Refreshed(1));
        assert_eq!(dots.len(), 2);
    }

    #[test]
    fn test_stack_uses_default_cap() {
        let mut dots = Vec::new();
        let stacking = DotStacking::Stack { max_stacks: None };
        for id in 0..5 {
            apply_dot(&mut dots, dot(id, 10.0, id as f64 * 0.1), stacking, 3);
        }
        assert_eq!(dots.len(), 3);
    }

    #[test]
    fn test_independent_has_no_cap() {
        let mut dots = Vec::new();
        for id in 0..10 {
            let result = apply_dot(&mut dots, dot(id, 10.0, 0.0), DotStacking::Independent, 1);
            assert_eq!(result, DotApplication::Added(id));
        }
        assert_eq!(dots.len(), 10);
    }

    #[test]
    fn test_process_tick_expires() {
        let mut dots = vec![ActiveDot::new(7, "ignite", DamageType::True, 25.0, 1.0, 2, 0.0)];

        let first = process_tick(&mut dots, 7).unwrap();
        assert!((first.damage - 25.0).abs() < f64::EPSILON);
        assert_eq!(first.next_tick, Some(2.0));

        let last = process_tick(&mut dots, 7).unwrap();
        assert_eq!(last.next_tick, None);
        assert!(dots.is_empty());
        assert!(process_tick(&mut dots, 7).is_none());
    }
}
