//! Event queue - Min-heap of scheduled simulation events

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// What happens when an event fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// An ability cast finishes and its hit resolves
    AbilityHit { plan: usize },
    /// A DoT instance ticks
    DotTick { instance: u64 },
    /// The champion is free to act
    Decide,
}

impl EventKind {
    /// Lower fires first among events at the same time
    fn priority(&self) -> u8 {
        match self {
            EventKind::AbilityHit { .. } => 0,
            EventKind::DotTick { .. } => 1,
            EventKind::Decide => 2,
        }
    }
}

/// Event in the simulation queue
#[derive(Debug, Clone, Copy)]
pub struct ScheduledEvent {
    pub time: f64,
    pub kind: EventKind,
    seq: u64,
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScheduledEvent {}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, the earliest event must pop first
        other
            .time
            .total_cmp(&self.time)
            .then(other.kind.priority().cmp(&self.kind.priority()))
            .then(other.seq.cmp(&self.seq))
    }
}

/// Events ordered by (time, priority, insertion sequence)
#[derive(Debug, Default)]
pub struct EventQueue {
    heap: BinaryHeap<ScheduledEvent>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        EventQueue::default()
    }

    pub fn schedule(&mut self, time: f64, kind: EventKind) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(ScheduledEvent { time, kind, seq });
    }

    pub fn pop(&mut self) -> Option<ScheduledEvent> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_time_order() {
        let mut queue = EventQueue::new();
        queue.schedule(2.0, EventKind::Decide);
        queue.schedule(0.5, EventKind::Decide);
        queue.schedule(1.0, EventKind::Decide);

        let times: Vec<f64> = std::iter::from_fn(|| queue.pop()).map(|e| e.time).collect();
        assert_eq!(times, vec![0.5, 1.0, 2.0]);
    }

    #[test]
    fn test_priority_breaks_time_ties() {
        let mut queue = EventQueue::new();
        queue.schedule(1.0, EventKind::Decide);
        queue.schedule(1.0, EventKind::DotTick { instance: 3 });
        queue.schedule(1.0, EventKind::AbilityHit { plan: 0 });

        assert_eq!(queue.pop().unwrap().kind, EventKind::AbilityHit { plan: 0 });
        assert_eq!(queue.pop().unwrap().kind, EventKind::DotTick { instance: 3 });
        assert_eq!(queue.pop().unwrap().kind, EventKind::Decide);
    }

    #[test]
    fn test_insertion_order_breaks_full_ties() {
        let mut queue = EventQueue::new();
        queue.schedule(1.0, EventKind::DotTick { instance: 9 });
        queue.schedule(1.0, EventKind::DotTick { instance: 2 });

        assert_eq!(queue.pop().unwrap().kind, EventKind::DotTick { instance: 9 });
        assert_eq!(queue.pop().unwrap().kind, EventKind::DotTick { instance: 2 });
        assert!(queue.is_empty());
    }
}
