use ordered_float::OrderedFloat;
use smallvec::SmallVec;

/// Path and edge costs, wrapped so they are totally ordered and can live in
/// ordered containers.
pub type Cost = OrderedFloat<f64>;

/// Typical branching factor of the problems this crate targets. Action lists
/// up to this length are stored inline.
pub const TYPICAL_BRANCHING: usize = 4;

pub type ActionList<S> = SmallVec<[Action<S>; TYPICAL_BRANCHING]>;

/// A transition to `target`, optionally labelled with a non-negative cost.
///
/// An absent cost means the edge carries no recorded weight. Such edges are
/// still traversable but add nothing to a path's cumulative cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action<S> {
    pub target: S,
    pub cost: Option<Cost>,
}

impl<S> Action<S> {
    pub fn new(target: S, cost: f64) -> Self {
        Self {
            target,
            cost: Some(OrderedFloat(cost)),
        }
    }

    pub fn unweighted(target: S) -> Self {
        Self { target, cost: None }
    }

    /// The increment this action contributes to the cumulative cost of a
    /// path traversing it.
    pub fn path_increment(&self) -> Cost {
        self.cost.unwrap_or(OrderedFloat(0.0))
    }
}
