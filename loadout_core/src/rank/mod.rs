//! Build ranker - Score every legal loadout and keep the best N
//!
//! Each candidate is resolved to a StatBlock, simulated under the query's
//! objective window and reduced to a score. Results are ordered by higher
//! score, then lower gold cost, then the lexicographically smaller list of
//! catalog indices.

mod cancel;
mod evaluator;
mod query;
mod scoring;
mod search;
mod topn;

pub use cancel::CancelToken;
pub use query::{BuildQuery, SearchMode};
pub use scoring::ScoringPolicy;
pub use topn::RankedResult;

use crate::catalog::CatalogSource;
use crate::config::EngineConfig;
use crate::error::BuildError;
use evaluator::Evaluator;
use tracing::info;

/// Rank builds for a query with the default engine constants
pub fn top_builds<C: CatalogSource + ?Sized>(
    catalog: &C,
    query: &BuildQuery,
) -> Result<Vec<RankedResult>, BuildError> {
    top_builds_with_config(catalog, query, &EngineConfig::default())
}

/// Rank builds for a query
///
/// Returns at most `query.limit` results, best first. A limit of zero returns
/// an empty list without searching. Fails with `EmptyResultSet` when no
/// candidate satisfies the constraints and with `Cancelled` when the query's
/// token is flipped mid-search.
pub fn top_builds_with_config<C: CatalogSource + ?Sized>(
    catalog: &C,
    query: &BuildQuery,
    config: &EngineConfig,
) -> Result<Vec<RankedResult>, BuildError> {
    let evaluator = Evaluator::prepare(catalog, query, config)?;
    if query.limit == 0 {
        return Ok(Vec::new());
    }
    if query.is_cancelled() {
        return Err(BuildError::Cancelled);
    }

    info!(
        target: "rank",
        champion = %evaluator.champion.id,
        level = query.level,
        mode = %query.mode,
        target_profile = %evaluator.target.name,
        limit = query.limit,
        budget = ?query.budget,
        search = ?query.search,
        catalog_version = catalog.version(),
        "ranking builds"
    );

    let top = match query.search {
        SearchMode::Exhaustive => search::exhaustive(&evaluator, query)?,
        SearchMode::BranchAndBound => search::branch_and_bound(&evaluator, query)?,
    };
    if top.is_empty() {
        return Err(BuildError::EmptyResultSet);
    }

    let evaluated = top.evaluated();
    let results: Vec<RankedResult> = top
        .into_sorted()
        .into_iter()
        .map(|entry| entry.into_result(evaluator.items))
        .collect();

    info!(
        target: "rank",
        evaluated,
        returned = results.len(),
        best = ?results.first().map(|r| r.score),
        "ranking finished"
    );
    Ok(results)
}

/// Score one explicit loadout, keeping its timeline
///
/// Items are looked up by id or name and placed in canonical order. The
/// query's limit, search and item range settings are ignored; its budget
/// still applies.
pub fn evaluate_build<C: CatalogSource + ?Sized>(
    catalog: &C,
    query: &BuildQuery,
    item_ids: &[&str],
) -> Result<RankedResult, BuildError> {
    evaluate_build_with_config(catalog, query, item_ids, &EngineConfig::default())
}

/// Score one explicit loadout with explicit engine constants
pub fn evaluate_build_with_config<C: CatalogSource + ?Sized>(
    catalog: &C,
    query: &BuildQuery,
    item_ids: &[&str],
    config: &EngineConfig,
) -> Result<RankedResult, BuildError> {
    let mut evaluator = Evaluator::prepare(catalog, query, config)?;
    evaluator.keep_timelines = true;

    let mut indices = item_ids
        .iter()
        .map(|id| catalog.item_index(id))
        .collect::<Result<Vec<_>, _>>()?;
    indices.sort_unstable();

    Ok(evaluator.evaluate(&indices)?.into_result(evaluator.items))
}
