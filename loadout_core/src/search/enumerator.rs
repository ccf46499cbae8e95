//! BuildEnumerator - Lazy depth-first generation of legal loadouts
//!
//! Candidates come out in canonical order: depth-first and lexicographic over
//! ascending catalog indices, with every prefix yielded before its
//! extensions. Stackable items may repeat; everything else appears at most
//! once, and no two items may share a uniqueness tag.

use super::{Candidate, MAX_SLOTS};
use crate::catalog::ItemDefinition;

/// Decides whether a prefix is worth yielding and extending
///
/// Rejecting a prefix skips it and every extension of it.
pub trait BranchFilter {
    fn accept(&mut self, prefix: &[usize], cost: u32) -> bool;
}

/// Filter that never rejects
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl BranchFilter for AcceptAll {
    fn accept(&mut self, _prefix: &[usize], _cost: u32) -> bool {
        true
    }
}

impl<F> BranchFilter for F
where
    F: FnMut(&[usize], u32) -> bool,
{
    fn accept(&mut self, prefix: &[usize], cost: u32) -> bool {
        self(prefix, cost)
    }
}

/// Shape of the enumerated space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumeratorConfig {
    pub min_items: usize,
    /// Capped at six
    pub max_items: usize,
    pub budget: Option<u32>,
    /// Stop descending as soon as a prefix exceeds the budget; otherwise
    /// over-budget loadouts are generated and filtered at the leaves
    pub prune_by_cost: bool,
}

impl Default for EnumeratorConfig {
    fn default() -> Self {
        EnumeratorConfig {
            min_items: 1,
            max_items: MAX_SLOTS,
            budget: None,
            prune_by_cost: true,
        }
    }
}

/// Counters describing one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumeratorStats {
    /// Prefixes visited
    pub visited: u64,
    /// Candidates yielded
    pub yielded: u64,
    /// Subtrees skipped for exceeding the budget
    pub pruned_by_cost: u64,
    /// Subtrees skipped by the branch filter
    pub pruned_by_filter: u64,
}

/// Lazy, restartable sequence of legal loadouts
pub struct BuildEnumerator<'c, F = AcceptAll> {
    items: &'c [ItemDefinition],
    config: EnumeratorConfig,
    filter: F,
    /// Next catalog index to try at each open depth
    starts: Vec<usize>,
    current: Vec<usize>,
    cost: u32,
    empty_pending: bool,
    stats: EnumeratorStats,
}

impl<'c> BuildEnumerator<'c, AcceptAll> {
    /// Enumerate without a branch filter
    pub fn new(items: &'c [ItemDefinition], config: EnumeratorConfig) -> Self {
        BuildEnumerator::with_filter(items, config, AcceptAll)
    }
}

impl<'c, F: BranchFilter> BuildEnumerator<'c, F> {
    /// Enumerate, consulting `filter` before each prefix
    pub fn with_filter(items: &'c [ItemDefinition], config: EnumeratorConfig, filter: F) -> Self {
        let mut enumerator = BuildEnumerator {
            items,
            config: EnumeratorConfig {
                max_items: config.max_items.min(MAX_SLOTS),
                ..config
            },
            filter,
            starts: Vec::new(),
            current: Vec::new(),
            cost: 0,
            empty_pending: false,
            stats: EnumeratorStats::default(),
        };
        enumerator.restart();
        enumerator
    }

    /// Start over from the first candidate
    pub fn restart(&mut self) {
        self.starts.clear();
        self.current.clear();
        self.cost = 0;
        self.stats = EnumeratorStats::default();
        self.empty_pending = self.config.min_items == 0;
        if self.config.max_items > 0 {
            self.starts.push(0);
        }
    }

    pub fn stats(&self) -> EnumeratorStats {
        self.stats
    }

    pub fn config(&self) -> &EnumeratorConfig {
        &self.config
    }

    fn over_budget(&self) -> bool {
        self.config.budget.map_or(false, |budget| self.cost > budget)
    }

    fn fits(&self, index: usize) -> bool {
        let item = &self.items[index];
        item.unique_tags.iter().all(|tag| {
            self.current
                .iter()
                .all(|&held| !self.items[held].unique_tags.contains(tag))
        })
    }

    fn push_item(&mut self, index: usize) {
        self.current.push(index);
        self.cost = self.cost.saturating_add(self.items[index].cost);
    }

    fn pop_item(&mut self) {
        if let Some(index) = self.current.pop() {
            self.cost = self.cost.saturating_sub(self.items[index].cost);
        }
    }
}

impl<F: BranchFilter> Iterator for BuildEnumerator<'_, F> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if self.empty_pending {
            self.empty_pending = false;
            self.stats.yielded += 1;
            return Some(Candidate {
                indices: Vec::new(),
                cost: 0,
            });
        }

        loop {
            // A full loadout has no open extension depth; drop its last item
            if !self.current.is_empty() && self.starts.len() == self.current.len() {
                self.pop_item();
            }

            let depth = self.starts.len().checked_sub(1)?;
            let mut found = None;
            while self.starts[depth] < self.items.len() {
                let index = self.starts[depth];
                self.starts[depth] += 1;
                if self.fits(index) {
                    found = Some(index);
                    break;
                }
            }

            let Some(index) = found else {
                // Depth exhausted: backtrack
                self.starts.pop();
                self.pop_item();
                continue;
            };

            self.push_item(index);
            self.stats.visited += 1;

            let over = self.over_budget();
            if over && self.config.prune_by_cost {
                self.stats.pruned_by_cost += 1;
                self.pop_item();
                continue;
            }
            if !self.filter.accept(&self.current, self.cost) {
                self.stats.pruned_by_filter += 1;
                self.pop_item();
                continue;
            }

            if self.current.len() < self.config.max_items {
                let next = if self.items[index].stackable { index } else { index + 1 };
                self.starts.push(next);
            }

            if !over && self.current.len() >= self.config.min_items {
                self.stats.yielded += 1;
                return Some(Candidate {
                    indices: self.current.clone(),
                    cost: self.cost,
                });
            }
        }
    }
}
