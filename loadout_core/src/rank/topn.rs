//! TopN - Bounded best-first collection of scored builds

use crate::catalog::ItemDefinition;
use crate::damage::Timeline;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// One scored candidate
#[derive(Debug, Clone)]
pub(crate) struct Scored {
    pub score: f64,
    pub total_damage: f64,
    pub cost: u32,
    pub indices: Vec<usize>,
    pub timeline: Option<Timeline>,
}

impl Scored {
    pub fn into_result(self, items: &[ItemDefinition]) -> RankedResult {
        RankedResult {
            items: self.indices.iter().map(|&i| items[i].id.clone()).collect(),
            indices: self.indices,
            score: self.score,
            total_damage: self.total_damage,
            cost: self.cost,
            timeline: self.timeline,
        }
    }
}

// Greater means better: higher score, then lower cost, then the
// lexicographically smaller index list
impl Ord for Scored {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.indices.cmp(&self.indices))
    }
}

impl PartialOrd for Scored {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Scored {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scored {}

/// A ranked build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// Item ids in canonical order
    pub items: Vec<String>,
    /// Catalog indices of the items
    pub indices: Vec<usize>,
    pub score: f64,
    /// Total mitigated damage in the window
    pub total_damage: f64,
    /// Total gold cost
    pub cost: u32,
    /// Damage timeline, when the query kept it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
}

/// Keeps the `limit` best candidates seen so far
#[derive(Debug)]
pub(crate) struct TopN {
    limit: usize,
    heap: BinaryHeap<Reverse<Scored>>,
    evaluated: usize,
}

impl TopN {
    pub fn new(limit: usize) -> Self {
        TopN {
            limit,
            heap: BinaryHeap::with_capacity(limit.saturating_add(1).min(1024)),
            evaluated: 0,
        }
    }

    /// Offer a candidate; it displaces the current worst only when strictly better
    pub fn offer(&mut self, entry: Scored) {
        self.evaluated += 1;
        self.insert(entry);
    }

    fn insert(&mut self, entry: Scored) {
        if self.limit == 0 {
            return;
        }
        if self.heap.len() < self.limit {
            self.heap.push(Reverse(entry));
            return;
        }
        if let Some(Reverse(worst)) = self.heap.peek() {
            if entry > *worst {
                self.heap.pop();
                self.heap.push(Reverse(entry));
            }
        }
    }

    /// Score a candidate must beat once the collection is full
    pub fn threshold(&self) -> Option<f64> {
        if self.heap.len() < self.limit {
            return None;
        }
        self.heap.peek().map(|Reverse(worst)| worst.score)
    }

    /// Combine two partial collections
    pub fn merge(mut self, other: TopN) -> TopN {
        self.evaluated += other.evaluated;
        for Reverse(entry) in other.heap {
            self.insert(entry);
        }
        self
    }

    pub fn evaluated(&self) -> usize {
        self.evaluated
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Best first
    pub fn into_sorted(self) -> Vec<Scored> {
        // Ascending over Reverse is descending over Scored
        self.heap.into_sorted_vec().into_iter().map(|Reverse(entry)| entry).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(score: f64, cost: u32, indices: &[usize]) -> Scored {
        Scored {
            score,
            total_damage: score,
            cost,
            indices: indices.to_vec(),
            timeline: None,
        }
    }

    #[test]
    fn test_keeps_best() {
        let mut top = TopN::new(2);
        top.offer(scored(10.0, 100, &[0]));
        top.offer(scored(30.0, 100, &[1]));
        top.offer(scored(20.0, 100, &[2]));
        assert_eq!(top.threshold(), Some(20.0));

        let sorted = top.into_sorted();
        assert_eq!(sorted.len(), 2);
        assert_eq!(sorted[0].indices, vec![1]);
        assert_eq!(sorted[1].indices, vec![2]);
    }

    #[test]
    fn test_tie_breaks() {
        let mut top = TopN::new(3);
        top.offer(scored(50.0, 900, &[0, 1]));
        top.offer(scored(50.0, 800, &[2]));
        top.offer(scored(50.0, 900, &[0, 0]));

        let order: Vec<Vec<usize>> = top.into_sorted().into_iter().map(|s| s.indices).collect();
        assert_eq!(order, vec![vec![2], vec![0, 0], vec![0, 1]]);
    }

    #[test]
    fn test_equal_does_not_displace() {
        let mut top = TopN::new(1);
        top.offer(scored(5.0, 100, &[1]));
        // Same score and cost, larger indices: strictly worse
        top.offer(scored(5.0, 100, &[2]));
        assert_eq!(top.into_sorted()[0].indices, vec![1]);
    }

    #[test]
    fn test_zero_limit() {
        let mut top = TopN::new(0);
        top.offer(scored(1.0, 1, &[0]));
        assert!(top.is_empty());
        assert_eq!(top.threshold(), None);
        assert_eq!(top.evaluated(), 1);
    }

    #[test]
    fn test_merge_matches_single_pass() {
        let entries: Vec<Scored> = (0..20)
            .map(|i| scored(((i * 7) % 11) as f64, 100 + (i % 3) as u32, &[i]))
            .collect();

        let mut single = TopN::new(5);
        for entry in entries.iter().cloned() {
            single.offer(entry);
        }

        let mut left = TopN::new(5);
        let mut right = TopN::new(5);
        for (i, entry) in entries.into_iter().enumerate() {
            if i % 2 == 0 {
                left.offer(entry);
            } else {
                right.offer(entry);
            }
        }
        let merged = left.merge(right);
        assert_eq!(merged.evaluated(), 20);

        let a: Vec<Vec<usize>> = single.into_sorted().into_iter().map(|s| s.indices).collect();
        let b: Vec<Vec<usize>> = merged.into_sorted().into_iter().map(|s| s.indices).collect();
        assert_eq!(a, b);
    }
}
