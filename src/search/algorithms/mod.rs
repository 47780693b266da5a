mod best_first;
mod bidirectional;
mod breadth_first;
mod depth_first;
mod depth_limited;
mod iterative_deepening;

pub use best_first::{best_first_search, uniform_cost_search};
pub use bidirectional::{bidirectional_best_first_search, path_cost_termination, TerminationFn};
pub use breadth_first::breadth_first_search;
pub use depth_first::depth_first_search;
pub use depth_limited::depth_limited_search;
pub use iterative_deepening::iterative_deepening_search;

use crate::search::{Node, State};
use std::rc::Rc;
use strum_macros::EnumIs;

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq, EnumIs)]
pub enum SearchOutcome<S: State> {
    /// A goal was reached; the node carries the whole path behind its
    /// parent links.
    Found(Rc<Node<S>>),
    /// A depth limit truncated the search, so a deeper solution may exist.
    Cutoff,
    /// The search space was exhausted without reaching a goal.
    Failure,
}

impl<S: State> SearchOutcome<S> {
    /// The goal node, when one was found.
    pub fn node(&self) -> Option<&Rc<Node<S>>> {
        match self {
            SearchOutcome::Found(node) => Some(node),
            SearchOutcome::Cutoff | SearchOutcome::Failure => None,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[clap(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AlgorithmName {
    #[clap(help = "Uniform-cost search, returns a cheapest path.")]
    UniformCost,
    #[clap(help = "Breadth-first search, returns a shallowest path.")]
    BreadthFirst,
    #[clap(help = "Depth-first search. May not terminate on graphs with cycles.")]
    DepthFirst,
    #[clap(help = "Depth-first search truncated at a depth limit.")]
    DepthLimited,
    #[clap(help = "Depth-limited search with an increasing limit.")]
    IterativeDeepening,
    #[clap(help = "Bidirectional uniform-cost search, requires a single goal state.")]
    Bidirectional,
}
