//! BuildQuery - What a caller asks the ranker for

use super::CancelToken;
use crate::defense::TargetSpec;
use crate::rotation::RotationStrategy;
use crate::types::ObjectiveMode;
use serde::{Deserialize, Serialize};

/// How the candidate space is searched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Evaluate every candidate, in parallel
    Exhaustive,
    /// Depth-first, skipping prefixes whose score bound cannot reach the top N
    #[default]
    BranchAndBound,
}

/// Parameters of one `top_builds` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildQuery {
    /// Champion id or name
    pub champion: String,
    pub level: u32,
    pub mode: ObjectiveMode,
    pub target: TargetSpec,
    /// Maximum number of results
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Gold budget; builds costing more are excluded
    #[serde(default)]
    pub budget: Option<u32>,
    /// Rune page id or name
    #[serde(default)]
    pub rune: Option<String>,
    #[serde(default)]
    pub strategy: RotationStrategy,
    #[serde(default)]
    pub search: SearchMode,
    #[serde(default = "default_min_items")]
    pub min_items: usize,
    /// Upper item count; the engine slot count when unset
    #[serde(default)]
    pub max_items: Option<usize>,
    /// Keep the damage timeline of every returned build
    #[serde(default)]
    pub keep_timelines: bool,
    #[serde(skip)]
    pub cancel: Option<CancelToken>,
}

fn default_limit() -> usize {
    10
}

fn default_min_items() -> usize {
    1
}

impl BuildQuery {
    pub fn new(
        champion: impl Into<String>,
        level: u32,
        mode: ObjectiveMode,
        target: TargetSpec,
    ) -> Self {
        BuildQuery {
            champion: champion.into(),
            level,
            mode,
            target,
            limit: default_limit(),
            budget: None,
            rune: None,
            strategy: RotationStrategy::default(),
            search: SearchMode::default(),
            min_items: default_min_items(),
            max_items: None,
            keep_timelines: false,
            cancel: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_budget(mut self, budget: u32) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_rune(mut self, rune: impl Into<String>) -> Self {
        self.rune = Some(rune.into());
        self
    }

    pub fn with_strategy(mut self, strategy: RotationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_search(mut self, search: SearchMode) -> Self {
        self.search = search;
        self
    }

    /// Restrict the number of items per build
    pub fn with_item_range(mut self, min_items: usize, max_items: usize) -> Self {
        self.min_items = min_items;
        self.max_items = Some(max_items);
        self
    }

    pub fn keep_timelines(mut self) -> Self {
        self.keep_timelines = true;
        self
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}
