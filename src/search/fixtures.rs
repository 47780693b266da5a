//! Ready-made graphs used by the tests, the demos, and the solver's
//! built-in maps.

use crate::search::{Graph, State};

const ROMANIA_ROADS: [(&str, &str, f64); 23] = [
    ("Oradea", "Zerind", 71.0),
    ("Oradea", "Sibiu", 151.0),
    ("Zerind", "Arad", 75.0),
    ("Arad", "Sibiu", 140.0),
    ("Arad", "Timisoara", 118.0),
    ("Timisoara", "Lugoj", 111.0),
    ("Lugoj", "Mehadia", 70.0),
    ("Mehadia", "Drobeta", 75.0),
    ("Drobeta", "Craiova", 120.0),
    ("Craiova", "Pitesti", 138.0),
    ("Craiova", "Rimnicu Vilcea", 146.0),
    ("Rimnicu Vilcea", "Pitesti", 97.0),
    ("Rimnicu Vilcea", "Sibiu", 80.0),
    ("Sibiu", "Fagaras", 99.0),
    ("Fagaras", "Bucharest", 211.0),
    ("Pitesti", "Bucharest", 101.0),
    ("Bucharest", "Giurgiu", 90.0),
    ("Bucharest", "Urziceni", 85.0),
    ("Urziceni", "Vaslui", 142.0),
    ("Urziceni", "Hirsova", 98.0),
    ("Vaslui", "Iasi", 92.0),
    ("Iasi", "Neamt", 87.0),
    ("Hirsova", "Eforie", 86.0),
];

/// The road map of Romania from the classic search literature: 20 cities
/// joined by undirected roads carrying driving distances.
pub fn romania_road_map<S>() -> Graph<S>
where
    S: State + From<&'static str>,
{
    let mut graph = Graph::undirected();
    for (from, to, distance) in ROMANIA_ROADS {
        graph.add_edge(S::from(from), S::from(to), Some(distance));
    }
    graph
}

const BINARY_TREE_BRANCHES: [(&str, &str); 14] = [
    ("A", "B"),
    ("A", "C"),
    ("B", "D"),
    ("B", "E"),
    ("C", "F"),
    ("C", "G"),
    ("D", "H"),
    ("D", "I"),
    ("E", "J"),
    ("E", "K"),
    ("F", "L"),
    ("F", "M"),
    ("G", "N"),
    ("G", "O"),
];

/// A complete binary tree of fifteen vertices "A" through "O", directed
/// from parent to child, with no edge costs.
pub fn binary_tree<S>() -> Graph<S>
where
    S: State + From<&'static str>,
{
    let mut graph = Graph::directed();
    for (parent, child) in BINARY_TREE_BRANCHES {
        graph.add_edge(S::from(parent), S::from(child), None);
    }
    graph
}
