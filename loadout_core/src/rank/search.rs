//! Search drivers - Feed enumerated candidates into a TopN

use super::evaluator::Evaluator;
use super::topn::TopN;
use super::BuildQuery;
use crate::error::BuildError;
use crate::search::BuildEnumerator;
use rayon::prelude::*;
use std::cell::Cell;
use tracing::debug;

/// Relative and absolute slack on the score bound, absorbing summation-order
/// differences between the bound and the simulation
const BOUND_SLACK: f64 = 1e-9;

/// Evaluate every candidate in parallel
pub(crate) fn exhaustive(evaluator: &Evaluator<'_>, query: &BuildQuery) -> Result<TopN, BuildError> {
    let config = evaluator.enumerator_config(query.min_items);
    let limit = query.limit;

    let top = BuildEnumerator::new(evaluator.items, config)
        .par_bridge()
        .try_fold(
            || TopN::new(limit),
            |mut top, candidate| {
                if query.is_cancelled() {
                    return Err(BuildError::Cancelled);
                }
                top.offer(evaluator.evaluate(&candidate.indices)?);
                Ok(top)
            },
        )
        .try_reduce(|| TopN::new(limit), |a, b| Ok(a.merge(b)))?;

    debug!(target: "rank", evaluated = top.evaluated(), "exhaustive search finished");
    Ok(top)
}

/// Depth-first search that skips prefixes whose bound cannot reach the top N
pub(crate) fn branch_and_bound(evaluator: &Evaluator<'_>, query: &BuildQuery) -> Result<TopN, BuildError> {
    let config = evaluator.enumerator_config(query.min_items);
    let bound = evaluator.bound();
    let threshold: Cell<Option<f64>> = Cell::new(None);

    let filter = |prefix: &[usize], _cost: u32| match threshold.get() {
        Some(worst) => bound.upper_bound(prefix) * (1.0 + BOUND_SLACK) + BOUND_SLACK >= worst,
        None => true,
    };

    let mut enumerator = BuildEnumerator::with_filter(evaluator.items, config, filter);
    let mut top = TopN::new(query.limit);
    for candidate in enumerator.by_ref() {
        if query.is_cancelled() {
            return Err(BuildError::Cancelled);
        }
        top.offer(evaluator.evaluate(&candidate.indices)?);
        threshold.set(top.threshold());
    }

    let stats = enumerator.stats();
    debug!(
        target: "rank",
        evaluated = top.evaluated(),
        visited = stats.visited,
        pruned_by_cost = stats.pruned_by_cost,
        pruned_by_bound = stats.pruned_by_filter,
        "branch and bound search finished"
    );
    Ok(top)
}
