use crate::search::{Action, State};
use ordered_float::OrderedFloat;
use std::collections::{HashMap, HashSet};

/// Adjacency-map graph with optional edge costs, the usual backing store for
/// a [`GraphProblem`](crate::search::GraphProblem).
///
/// The vertex set covers every endpoint ever mentioned, so a directed
/// graph's destination-only vertices are still vertices even though they
/// have no outgoing edges.
#[derive(Debug, Clone)]
pub struct Graph<S: State> {
    edges: HashMap<S, Vec<Action<S>>>,
    vertices: HashSet<S>,
    directed: bool,
}

impl<S: State> Graph<S> {
    pub fn undirected() -> Self {
        Self {
            edges: HashMap::new(),
            vertices: HashSet::new(),
            directed: false,
        }
    }

    pub fn directed() -> Self {
        Self {
            edges: HashMap::new(),
            vertices: HashSet::new(),
            directed: true,
        }
    }

    /// Inserts an edge. Undirected graphs record it symmetrically in both
    /// adjacency lists with the same cost.
    pub fn add_edge(&mut self, from: S, to: S, cost: Option<f64>) {
        let cost = cost.map(OrderedFloat);
        self.vertices.insert(from.clone());
        self.vertices.insert(to.clone());
        self.edges
            .entry(from.clone())
            .or_default()
            .push(Action { target: to.clone(), cost });
        if !self.directed {
            self.edges
                .entry(to)
                .or_default()
                .push(Action { target: from, cost });
        }
    }

    /// The actions leaving `vertex`, empty for unknown vertices and for
    /// vertices with no outgoing edges.
    pub fn edges(&self, vertex: &S) -> &[Action<S>] {
        self.edges.get(vertex).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn vertices(&self) -> &HashSet<S> {
        &self.vertices
    }

    pub fn contains_vertex(&self, vertex: &S) -> bool {
        self.vertices.contains(vertex)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// The graph with every edge flipped. Reversing an undirected graph is
    /// the identity.
    pub fn reversed(&self) -> Graph<S> {
        if !self.directed {
            return self.clone();
        }
        let mut reversed = Graph::directed();
        for (from, actions) in &self.edges {
            for action in actions {
                reversed.add_edge(
                    action.target.clone(),
                    from.clone(),
                    action.cost.map(OrderedFloat::into_inner),
                );
            }
        }
        // Vertices without incident edges in the flipped direction survive.
        for vertex in &self.vertices {
            reversed.vertices.insert(vertex.clone());
        }
        reversed
    }
}
