//! Generalised best-first search and its uniform-cost instantiation.

use crate::search::algorithms::SearchOutcome;
use crate::search::frontier::{path_cost_evaluation, EvaluationFn, PriorityQueue};
use crate::search::{Node, Problem, SearchError, SearchStatistics};
use std::collections::HashMap;
use std::rc::Rc;

/// Expands nodes in order of `evaluate`, cheapest first.
///
/// The goal test happens at dequeue time. For evaluations that bound the
/// true cost from below (in particular the path cost itself), this late
/// test is what makes the first returned goal provably the best one: a
/// cheaper path to it would still be sitting in the frontier.
pub fn best_first_search<P: Problem>(
    problem: &P,
    evaluate: EvaluationFn<P::State>,
) -> Result<SearchOutcome<P::State>, SearchError<P::State>> {
    let mut statistics = SearchStatistics::new();
    let root = Node::root(problem.initial_state().clone());
    let mut reached: HashMap<P::State, Rc<Node<P::State>>> =
        HashMap::from([(root.state().clone(), Rc::clone(&root))]);
    let mut frontier = PriorityQueue::new([root], evaluate);

    while let Some((_, node)) = frontier.pop() {
        if problem.is_goal(node.state()) {
            statistics.finalise_search();
            return Ok(SearchOutcome::Found(node));
        }
        statistics.increment_expanded_nodes();

        for child in node.expand(problem) {
            let child = child?;
            statistics.increment_generated_nodes();
            let cheaper = reached
                .get(child.state())
                .map_or(true, |best| child.path_cost() < best.path_cost());
            if cheaper {
                reached.insert(child.state().clone(), Rc::clone(&child));
                frontier.add(child);
            }
        }
    }

    statistics.finalise_search();
    Ok(SearchOutcome::Failure)
}

/// Best-first search ordered by cumulative path cost. Returns a
/// minimum-cost goal path whenever edge costs are non-negative.
pub fn uniform_cost_search<P: Problem>(
    problem: &P,
) -> Result<SearchOutcome<P::State>, SearchError<P::State>> {
    best_first_search(problem, path_cost_evaluation())
}
