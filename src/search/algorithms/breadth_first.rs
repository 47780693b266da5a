//! Breadth-first search.

use crate::search::algorithms::SearchOutcome;
use crate::search::{Node, Problem, SearchError, SearchStatistics};
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

/// Explores the state space level by level, so the first goal reached sits
/// at minimal depth. Unlike uniform-cost search the goal test happens at
/// generation time; level order already guarantees that no shallower goal
/// is pending, and waiting until dequeue would buy nothing.
pub fn breadth_first_search<P: Problem>(
    problem: &P,
) -> Result<SearchOutcome<P::State>, SearchError<P::State>> {
    let mut statistics = SearchStatistics::new();
    let root = Node::root(problem.initial_state().clone());
    if problem.is_goal(root.state()) {
        statistics.finalise_search();
        return Ok(SearchOutcome::Found(root));
    }

    let mut reached: HashSet<P::State> = HashSet::from([root.state().clone()]);
    let mut frontier = VecDeque::from([root]);

    while let Some(node) = frontier.pop_front() {
        statistics.increment_expanded_nodes();
        for child in node.expand(problem) {
            let child = child?;
            statistics.increment_generated_nodes();
            if problem.is_goal(child.state()) {
                statistics.finalise_search();
                return Ok(SearchOutcome::Found(child));
            }
            if reached.insert(child.state().clone()) {
                frontier.push_back(child);
            }
        }
    }

    statistics.finalise_search();
    Ok(SearchOutcome::Failure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{decoy_cost_problem, romania_problem};
    use ordered_float::OrderedFloat;

    #[test]
    fn bucharest_is_three_roads_away() {
        let problem = romania_problem("Arad", ["Bucharest"]);
        let outcome = breadth_first_search(&problem).unwrap();
        let node = outcome.node().unwrap();
        assert_eq!(
            node.path_states(),
            vec!["Arad", "Sibiu", "Fagaras", "Bucharest"]
        );
        assert_eq!(node.depth(), 3);
    }

    #[test]
    fn the_shallowest_route_is_not_the_cheapest() {
        let problem = decoy_cost_problem();
        let outcome = breadth_first_search(&problem).unwrap();
        let node = outcome.node().unwrap();
        assert_eq!(node.path_states(), vec!["a", "d"]);
        assert_eq!(node.path_cost(), OrderedFloat(10.0));
    }

    #[test]
    fn a_goal_initial_state_returns_before_any_expansion() {
        let problem = romania_problem("Arad", ["Arad"]);
        let outcome = breadth_first_search(&problem).unwrap();
        assert_eq!(outcome.node().unwrap().path_states(), vec!["Arad"]);
    }

    #[test]
    fn an_unknown_goal_is_a_failure() {
        let problem = romania_problem("Arad", ["Atlantis"]);
        let outcome = breadth_first_search(&problem).unwrap();
        assert!(outcome.is_failure());
    }
}
