use crate::search::{Action, ActionList, Cost, Graph};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

/// Anything usable as a search state. Blanket-implemented, callers never
/// implement this by hand.
pub trait State: Clone + Debug + Eq + Hash {}

impl<T: Clone + Debug + Eq + Hash> State for T {}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError<S: State> {
    #[error("applying {action:?} in state {from:?} leads outside the problem's state space")]
    InvalidTransition { from: S, action: Action<S> },
}

/// A state-transition problem: where search starts, which states count as
/// goals, and which transitions exist.
pub trait Problem {
    type State: State;

    fn initial_state(&self) -> &Self::State;

    /// Whether `state` belongs to the goal set.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// The actions available from `state`. Empty when none are registered,
    /// which is not an error.
    fn actions(&self, state: &Self::State) -> ActionList<Self::State>;

    /// Applies `action` in `state`, failing when the resulting state falls
    /// outside the problem's state space.
    fn apply_action(
        &self,
        state: &Self::State,
        action: &Action<Self::State>,
    ) -> Result<Self::State, SearchError<Self::State>>;

    /// The cost of `action`, or `None` when the edge carries no weight.
    fn action_cost(&self, action: &Action<Self::State>) -> Option<Cost> {
        action.cost
    }
}

/// The reference [`Problem`] implementation: search over an explicit graph
/// from a single initial vertex towards a set of goal vertices.
#[derive(Debug, Clone)]
pub struct GraphProblem<S: State> {
    graph: Graph<S>,
    initial_state: S,
    goal_states: HashSet<S>,
}

impl<S: State> GraphProblem<S> {
    pub fn new(graph: Graph<S>, initial_state: S, goal_states: impl IntoIterator<Item = S>) -> Self {
        Self {
            graph,
            initial_state,
            goal_states: goal_states.into_iter().collect(),
        }
    }

    pub fn graph(&self) -> &Graph<S> {
        &self.graph
    }

    pub fn goal_states(&self) -> &HashSet<S> {
        &self.goal_states
    }

    /// The same instance searched from the goal towards the initial state,
    /// as consumed by bidirectional search. Only defined for single-goal
    /// instances; multi-goal instances have no single backward root.
    pub fn reversed(&self) -> Option<GraphProblem<S>> {
        let mut goals = self.goal_states.iter();
        let goal = goals.next()?;
        if goals.next().is_some() {
            return None;
        }
        Some(GraphProblem {
            graph: self.graph.reversed(),
            initial_state: goal.clone(),
            goal_states: HashSet::from([self.initial_state.clone()]),
        })
    }
}

impl<S: State> Problem for GraphProblem<S> {
    type State = S;

    fn initial_state(&self) -> &S {
        &self.initial_state
    }

    fn is_goal(&self, state: &S) -> bool {
        self.goal_states.contains(state)
    }

    fn actions(&self, state: &S) -> ActionList<S> {
        self.graph.edges(state).iter().cloned().collect()
    }

    fn apply_action(&self, state: &S, action: &Action<S>) -> Result<S, SearchError<S>> {
        if self.graph.contains_vertex(&action.target) {
            Ok(action.target.clone())
        } else {
            Err(SearchError::InvalidTransition {
                from: state.clone(),
                action: action.clone(),
            })
        }
    }
}
