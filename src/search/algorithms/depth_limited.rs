//! Depth-limited search.

use crate::search::algorithms::SearchOutcome;
use crate::search::{Node, Problem, SearchError, SearchStatistics};

/// Depth-first search truncated at `limit` edges from the root.
///
/// The outcome distinguishes an exhausted space (`Failure`) from a
/// truncated one (`Cutoff`); iterative deepening relies on that
/// distinction to know when deepening further is pointless. Nodes at the
/// limit are still goal-tested, they just contribute no children. Paths
/// that revisit one of their own states are pruned, which keeps the search
/// finite on cyclic graphs without a global reached set.
pub fn depth_limited_search<P: Problem>(
    problem: &P,
    limit: usize,
) -> Result<SearchOutcome<P::State>, SearchError<P::State>> {
    let mut statistics = SearchStatistics::new();
    let mut frontier = vec![Node::root(problem.initial_state().clone())];
    let mut outcome = SearchOutcome::Failure;

    while let Some(node) = frontier.pop() {
        if problem.is_goal(node.state()) {
            statistics.finalise_search();
            return Ok(SearchOutcome::Found(node));
        }
        if node.depth() >= limit {
            outcome = SearchOutcome::Cutoff;
            continue;
        }
        if node.is_cycle() {
            continue;
        }
        statistics.increment_expanded_nodes();
        for child in node.expand(problem) {
            statistics.increment_generated_nodes();
            frontier.push(child?);
        }
    }

    statistics.finalise_search();
    Ok(outcome)
}
