//! Build search - Candidate enumeration and score bounds

mod bound;
mod enumerator;

pub use bound::ScoreBound;
pub use enumerator::{AcceptAll, BranchFilter, BuildEnumerator, EnumeratorConfig, EnumeratorStats};

use serde::{Deserialize, Serialize};

/// Maximum number of item slots
pub const MAX_SLOTS: usize = 6;

/// A legal item loadout, as ascending catalog indices
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Candidate {
    pub indices: Vec<usize>,
    /// Total gold cost
    pub cost: u32,
}
