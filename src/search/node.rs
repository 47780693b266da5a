use crate::search::{Action, Cost, Problem, SearchError, State};
use ordered_float::OrderedFloat;
use std::rc::Rc;

/// A state reached via a specific path through the search tree.
///
/// Nodes are immutable once created and share their ancestry through
/// reference-counted parent links, so sibling subtrees reuse the common
/// prefix of the path. There are no child pointers.
#[derive(Debug, PartialEq, Eq)]
pub struct Node<S> {
    /// The state this node stands for.
    state: S,
    /// Predecessor on the path from the root, `None` for the root itself.
    parent: Option<Rc<Node<S>>>,
    /// Action applied in the parent to reach this node, `None` for the root.
    action: Option<Action<S>>,
    /// Cumulative cost of the path from the root to this node.
    path_cost: Cost,
    /// Number of edges on the path from the root to this node.
    depth: usize,
}

impl<S: State> Node<S> {
    pub fn root(state: S) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: None,
            action: None,
            path_cost: OrderedFloat(0.0),
            depth: 0,
        })
    }

    pub fn child(parent: &Rc<Self>, action: Action<S>, state: S) -> Rc<Self> {
        Rc::new(Self {
            state,
            path_cost: parent.path_cost + action.path_increment(),
            depth: parent.depth + 1,
            parent: Some(Rc::clone(parent)),
            action: Some(action),
        })
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<&Rc<Node<S>>> {
        self.parent.as_ref()
    }

    pub fn action(&self) -> Option<&Action<S>> {
        self.action.as_ref()
    }

    pub fn path_cost(&self) -> Cost {
        self.path_cost
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Walks the parent links upward, yielding each strict ancestor of this
    /// node, immediate parent first and root last. The root has no ancestors.
    pub fn ancestors(&self) -> Ancestors<'_, S> {
        Ancestors {
            next: self.parent.as_ref(),
        }
    }

    /// The states on the path from the root to this node, root first and
    /// this node's own state last.
    pub fn path_states(&self) -> Vec<S> {
        let mut states: Vec<S> = self.ancestors().map(|node| node.state.clone()).collect();
        states.reverse();
        states.push(self.state.clone());
        states
    }

    /// Whether this node's state already occurs somewhere on the path above
    /// it. Used to prune repeated states along a single path without a
    /// global visited set.
    pub fn is_cycle(&self) -> bool {
        self.ancestors().any(|ancestor| ancestor.state == self.state)
    }

    /// Generates the child node for every action available from this node's
    /// state. Children whose action leads outside the problem's state space
    /// surface as errors.
    pub fn expand<'a, P>(
        self: Rc<Self>,
        problem: &'a P,
    ) -> impl Iterator<Item = Result<Rc<Node<S>>, SearchError<S>>> + 'a
    where
        P: Problem<State = S>,
        S: 'a,
    {
        problem.actions(&self.state).into_iter().map(move |action| {
            let state = problem.apply_action(&self.state, &action)?;
            Ok(Node::child(&self, action, state))
        })
    }
}

/// Iterator over the strict ancestors of a node, nearest first.
#[derive(Debug)]
pub struct Ancestors<'a, S> {
    next: Option<&'a Rc<Node<S>>>,
}

impl<'a, S> Iterator for Ancestors<'a, S> {
    type Item = &'a Rc<Node<S>>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_ref();
        Some(current)
    }
}
