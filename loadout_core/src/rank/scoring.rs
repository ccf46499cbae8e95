//! Scoring - Reduce a damage timeline to one comparable number

use crate::damage::Timeline;
use crate::types::ObjectiveMode;
use serde::{Deserialize, Serialize};

/// How a timeline becomes a score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub mode: ObjectiveMode,
    /// Weight of the largest single event subtracted in dot mode
    pub dot_spike_penalty: f64,
}

impl ScoringPolicy {
    pub fn new(mode: ObjectiveMode, dot_spike_penalty: f64) -> Self {
        ScoringPolicy {
            mode,
            dot_spike_penalty: dot_spike_penalty.max(0.0),
        }
    }

    /// Score a timeline; never above its total mitigated damage
    pub fn score(&self, timeline: &Timeline) -> f64 {
        let total = timeline.total_mitigated();
        match self.mode {
            ObjectiveMode::Burst => total,
            ObjectiveMode::Dot => total - self.dot_spike_penalty * timeline.largest_event(),
        }
    }
}
