//! State-space search: problems, nodes, frontiers, and the search
//! algorithms themselves.

mod action;
pub mod algorithms;
pub mod fixtures;
mod frontier;
mod graph;
pub mod loading;
mod node;
mod problem;
mod statistics;
mod verbosity;

pub use action::{Action, ActionList, Cost, TYPICAL_BRANCHING};
pub use frontier::{path_cost_evaluation, EvaluationFn, PriorityQueue};
pub use graph::Graph;
pub use node::{Ancestors, Node};
pub use problem::{GraphProblem, Problem, SearchError, State};
pub use statistics::SearchStatistics;
pub use verbosity::Verbosity;
