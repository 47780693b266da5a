use crate::search::{Cost, Node, State};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::rc::Rc;

/// Orders a frontier: maps a node to the cost by which the queue ranks it.
pub type EvaluationFn<S> = Box<dyn Fn(&Node<S>) -> Cost>;

/// The evaluation that turns best-first search into uniform-cost search.
pub fn path_cost_evaluation<S: State>() -> EvaluationFn<S> {
    Box::new(|node| node.path_cost())
}

/// Min-ordered frontier of search nodes, ranked by an evaluation function
/// fixed at construction time.
///
/// Each node's evaluation is computed once, on entry. Ties are broken by the
/// underlying binary heap in no particular order, and callers must not rely
/// on tie order.
pub struct PriorityQueue<S: State> {
    heap: BinaryHeap<Entry<S>>,
    evaluate: EvaluationFn<S>,
}

impl<S: State> PriorityQueue<S> {
    pub fn new(items: impl IntoIterator<Item = Rc<Node<S>>>, evaluate: EvaluationFn<S>) -> Self {
        let heap = items
            .into_iter()
            .map(|node| Entry {
                priority: evaluate(&node),
                node,
            })
            .collect();
        Self { heap, evaluate }
    }

    pub fn add(&mut self, node: Rc<Node<S>>) {
        let priority = (self.evaluate)(&node);
        self.heap.push(Entry { priority, node });
    }

    /// Removes and returns the minimum-evaluation entry, or `None` when the
    /// frontier is empty.
    pub fn pop(&mut self) -> Option<(Cost, Rc<Node<S>>)> {
        self.heap.pop().map(|entry| (entry.priority, entry.node))
    }

    /// The minimum-evaluation node, without removing it.
    pub fn top(&self) -> Option<&Rc<Node<S>>> {
        self.heap.peek().map(|entry| &entry.node)
    }

    /// The smallest evaluation currently queued, without removing it.
    pub fn min_evaluation(&self) -> Option<Cost> {
        self.heap.peek().map(|entry| entry.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<S: State> fmt::Debug for PriorityQueue<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.heap.len())
            .field("min_evaluation", &self.min_evaluation())
            .finish_non_exhaustive()
    }
}

/// Heap entry with the comparison flipped, turning std's max-heap into the
/// min-heap the search algorithms need.
struct Entry<S> {
    priority: Cost,
    node: Rc<Node<S>>,
}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
    }
}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<S> Eq for Entry<S> {}
