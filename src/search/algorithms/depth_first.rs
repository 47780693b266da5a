//! Depth-first search.

use crate::search::algorithms::SearchOutcome;
use crate::search::{Node, Problem, SearchError, SearchStatistics};

/// Dives along one branch at a time, backtracking only when a branch runs
/// out of children. Keeps no reached set, so memory stays proportional to
/// the stack but repeated states are re-explored; on state spaces with
/// cycles the search may never terminate. Fine for trees and directed
/// acyclic spaces.
pub fn depth_first_search<P: Problem>(
    problem: &P,
) -> Result<SearchOutcome<P::State>, SearchError<P::State>> {
    let mut statistics = SearchStatistics::new();
    let mut frontier = vec![Node::root(problem.initial_state().clone())];

    while let Some(node) = frontier.pop() {
        if problem.is_goal(node.state()) {
            statistics.finalise_search();
            return Ok(SearchOutcome::Found(node));
        }
        statistics.increment_expanded_nodes();
        for child in node.expand(problem) {
            statistics.increment_generated_nodes();
            frontier.push(child?);
        }
    }

    statistics.finalise_search();
    Ok(SearchOutcome::Failure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::binary_tree_problem;
    use ordered_float::OrderedFloat;

    #[test]
    fn a_deep_leaf_is_reached_through_its_branch() {
        let problem = binary_tree_problem("A", ["M"]);
        let outcome = depth_first_search(&problem).unwrap();
        let node = outcome.node().unwrap();
        let ancestors: Vec<_> = node.ancestors().map(|node| *node.state()).collect();
        assert_eq!(ancestors, vec!["F", "C", "A"]);
        // The tree's edges carry no costs.
        assert_eq!(node.path_cost(), OrderedFloat(0.0));
    }

    #[test]
    fn a_goal_root_needs_no_steps() {
        let problem = binary_tree_problem("A", ["A"]);
        let outcome = depth_first_search(&problem).unwrap();
        assert_eq!(outcome.node().unwrap().depth(), 0);
    }

    #[test]
    fn exhausting_the_tree_is_a_failure() {
        let problem = binary_tree_problem("A", ["Z"]);
        let outcome = depth_first_search(&problem).unwrap();
        assert!(outcome.is_failure());
    }

    #[test]
    fn interior_goals_are_found_on_the_way_down() {
        let problem = binary_tree_problem("A", ["E"]);
        let outcome = depth_first_search(&problem).unwrap();
        assert_eq!(outcome.node().unwrap().path_states(), vec!["A", "B", "E"]);
    }
}
