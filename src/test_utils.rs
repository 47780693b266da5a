use crate::search::fixtures::{binary_tree, romania_road_map};
use crate::search::{Graph, GraphProblem};

/// A problem over the Romania road map with the given endpoints.
pub fn romania_problem(
    initial_state: &'static str,
    goal_states: impl IntoIterator<Item = &'static str>,
) -> GraphProblem<&'static str> {
    GraphProblem::new(romania_road_map(), initial_state, goal_states)
}

/// A problem over the directed fifteen-vertex binary tree.
pub fn binary_tree_problem(
    initial_state: &'static str,
    goal_states: impl IntoIterator<Item = &'static str>,
) -> GraphProblem<&'static str> {
    GraphProblem::new(binary_tree(), initial_state, goal_states)
}

/// Four vertices where the direct road from "a" to "d" costs 10 but the
/// detour through "b" and "c" costs 3: the shallowest path and the
/// cheapest path disagree.
pub fn decoy_cost_problem() -> GraphProblem<&'static str> {
    let mut graph = Graph::undirected();
    graph.add_edge("a", "d", Some(10.0));
    graph.add_edge("a", "b", Some(1.0));
    graph.add_edge("b", "c", Some(1.0));
    graph.add_edge("c", "d", Some(1.0));
    GraphProblem::new(graph, "a", ["d"])
}
