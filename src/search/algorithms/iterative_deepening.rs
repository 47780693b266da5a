//! Iterative-deepening search.

use crate::search::algorithms::{depth_limited_search, SearchOutcome};
use crate::search::{Problem, SearchError};
use tracing::debug;

/// Runs depth-limited search with limits 0, 1, 2, ... until the result is
/// anything other than a cutoff.
///
/// Combines breadth-first's shallowest-goal guarantee with depth-first's
/// memory footprint, at the price of re-expanding shallow nodes once per
/// round. Diverges when no goal is reachable in an infinite state space;
/// on finite spaces the deepest round comes back `Failure` and the loop
/// stops.
pub fn iterative_deepening_search<P: Problem>(
    problem: &P,
) -> Result<SearchOutcome<P::State>, SearchError<P::State>> {
    for limit in 0.. {
        debug!(limit, "deepening");
        let outcome = depth_limited_search(problem, limit)?;
        if !outcome.is_cutoff() {
            return Ok(outcome);
        }
    }
    unreachable!("the deepening loop only ends by returning");
}
