//! Bidirectional best-first search.
//!
//! Two searches run towards each other: one forwards from the initial
//! state, one backwards from the goal over the reversed problem. Whenever
//! one direction reaches a state the other has already reached, the two
//! partial paths are spliced into a solution candidate; the search keeps
//! the best candidate until the termination predicate decides no cheaper
//! one can still appear.

use crate::search::algorithms::SearchOutcome;
use crate::search::frontier::{EvaluationFn, PriorityQueue};
use crate::search::{Action, Node, Problem, SearchError, SearchStatistics, State};
use std::collections::HashMap;
use std::rc::Rc;

/// Decides when the search may stop, given the best solution so far and
/// both frontiers.
pub type TerminationFn<S> =
    Box<dyn Fn(&SearchOutcome<S>, &PriorityQueue<S>, &PriorityQueue<S>) -> bool>;

/// The termination predicate matching path-cost evaluations: stop once the
/// best solution costs no more than the two frontiers' minimum evaluations
/// combined. Any path still undiscovered must cross both frontiers, so it
/// cannot beat that bound. An exhausted frontier drops out of the bound;
/// with both exhausted any solution at all terminates.
pub fn path_cost_termination<S: State>() -> TerminationFn<S> {
    Box::new(|solution, frontier_f, frontier_b| match solution.node() {
        None => false,
        Some(node) => match (frontier_f.min_evaluation(), frontier_b.min_evaluation()) {
            (Some(min_f), Some(min_b)) => node.path_cost() <= min_f + min_b,
            (Some(min_f), None) => node.path_cost() <= min_f,
            (None, Some(min_b)) => node.path_cost() <= min_b,
            (None, None) => true,
        },
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forwards,
    Backwards,
}

/// Searches `problem_f` from its initial state and `problem_b` (the same
/// instance reversed, e.g. via
/// [`GraphProblem::reversed`](crate::search::GraphProblem::reversed)) from
/// the goal, each direction ordered by its own evaluation function.
///
/// Each step advances whichever frontier currently has the smaller minimum
/// evaluation. With both evaluations set to path cost and
/// [`path_cost_termination`], the result is a cheapest path, found while
/// expanding roughly two half-radius balls instead of one full-radius one.
pub fn bidirectional_best_first_search<P, Q>(
    problem_f: &P,
    problem_b: &Q,
    evaluate_f: EvaluationFn<P::State>,
    evaluate_b: EvaluationFn<P::State>,
    has_terminated: TerminationFn<P::State>,
) -> Result<SearchOutcome<P::State>, SearchError<P::State>>
where
    P: Problem,
    Q: Problem<State = P::State>,
{
    let mut statistics = SearchStatistics::new();
    let root_f = Node::root(problem_f.initial_state().clone());
    let root_b = Node::root(problem_b.initial_state().clone());

    if problem_f.is_goal(root_f.state()) {
        statistics.finalise_search();
        return Ok(SearchOutcome::Found(root_f));
    }

    let mut reached_f = HashMap::from([(root_f.state().clone(), Rc::clone(&root_f))]);
    let mut reached_b = HashMap::from([(root_b.state().clone(), Rc::clone(&root_b))]);
    let mut frontier_f = PriorityQueue::new([root_f], evaluate_f);
    let mut frontier_b = PriorityQueue::new([root_b], evaluate_b);

    let mut solution = SearchOutcome::Failure;

    while !has_terminated(&solution, &frontier_f, &frontier_b) {
        let direction = match (frontier_f.min_evaluation(), frontier_b.min_evaluation()) {
            (Some(min_f), Some(min_b)) if min_f <= min_b => Direction::Forwards,
            (Some(_), Some(_)) | (None, Some(_)) => Direction::Backwards,
            (Some(_), None) => Direction::Forwards,
            (None, None) => break,
        };
        solution = match direction {
            Direction::Forwards => proceed(
                direction,
                problem_f,
                &mut frontier_f,
                &mut reached_f,
                &reached_b,
                solution,
                &mut statistics,
            )?,
            Direction::Backwards => proceed(
                direction,
                problem_b,
                &mut frontier_b,
                &mut reached_b,
                &reached_f,
                solution,
                &mut statistics,
            )?,
        };
    }

    statistics.finalise_search();
    Ok(solution)
}

/// One expansion step of a single direction. Children improving on their
/// own direction's reached map join the frontier; children whose state the
/// opposite direction has reached as well yield a solution candidate.
fn proceed<P: Problem>(
    direction: Direction,
    problem: &P,
    frontier: &mut PriorityQueue<P::State>,
    reached: &mut HashMap<P::State, Rc<Node<P::State>>>,
    reached_other: &HashMap<P::State, Rc<Node<P::State>>>,
    mut solution: SearchOutcome<P::State>,
    statistics: &mut SearchStatistics,
) -> Result<SearchOutcome<P::State>, SearchError<P::State>> {
    let node = match frontier.pop() {
        Some((_, node)) => node,
        None => return Ok(solution),
    };
    statistics.increment_expanded_nodes();

    for child in node.expand(problem) {
        let child = child?;
        statistics.increment_generated_nodes();
        let cheaper = reached
            .get(child.state())
            .map_or(true, |best| child.path_cost() < best.path_cost());
        if !cheaper {
            continue;
        }
        reached.insert(child.state().clone(), Rc::clone(&child));
        if let Some(other) = reached_other.get(child.state()) {
            let joined = match direction {
                Direction::Forwards => join_nodes(&child, other),
                Direction::Backwards => join_nodes(other, &child),
            };
            let improves = solution
                .node()
                .map_or(true, |best| joined.path_cost() < best.path_cost());
            if improves {
                solution = SearchOutcome::Found(joined);
            }
        }
        frontier.add(child);
    }
    Ok(solution)
}

/// Splices a forward partial path and a backward partial path meeting at a
/// common state into one forward path from the initial state to the goal.
///
/// The backward chain is walked towards its own root (the goal); each step
/// becomes a forward action entering the state the backward chain came
/// from, priced by that edge's recorded cost, so the joined node's path
/// cost works out to `forward.path_cost + backward.path_cost` worth of
/// edges with nothing counted twice.
fn join_nodes<S: State>(forward: &Rc<Node<S>>, backward: &Rc<Node<S>>) -> Rc<Node<S>> {
    debug_assert_eq!(
        forward.state(),
        backward.state(),
        "joined paths must meet at a common state"
    );
    let mut joined = Rc::clone(forward);
    let mut walk = Rc::clone(backward);
    while let Some(parent) = walk.parent() {
        let action = Action {
            target: parent.state().clone(),
            cost: walk.action().and_then(|action| action.cost),
        };
        joined = Node::child(&joined, action, parent.state().clone());
        let next = Rc::clone(parent);
        walk = next;
    }
    joined
}
