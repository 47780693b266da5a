//! Loading graph problems from JSON definitions.

use crate::search::{Graph, GraphProblem};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read problem definition: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed problem definition: {0}")]
    Json(#[from] serde_json::Error),
}

/// A graph problem as written in a definition file: an edge list plus the
/// endpoints of the search. Undirected unless stated otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDefinition {
    #[serde(default)]
    pub directed: bool,
    pub edges: Vec<EdgeDefinition>,
    pub initial_state: String,
    pub goal_states: Vec<String>,
}

/// One edge of a definition. A missing cost means an unweighted edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDefinition {
    pub from: String,
    pub to: String,
    pub cost: Option<f64>,
}

impl ProblemDefinition {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path)?;
        contents.parse()
    }

    /// Builds the searchable problem the definition describes.
    pub fn into_problem(self) -> GraphProblem<String> {
        let mut graph = if self.directed {
            Graph::directed()
        } else {
            Graph::undirected()
        };
        for edge in self.edges {
            graph.add_edge(edge.from, edge.to, edge.cost);
        }
        if !graph.contains_vertex(&self.initial_state) {
            warn!(
                initial_state = %self.initial_state,
                "initial state does not appear in any edge"
            );
        }
        GraphProblem::new(graph, self.initial_state, self.goal_states)
    }
}

impl FromStr for ProblemDefinition {
    type Err = LoadError;

    fn from_str(text: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::algorithms::uniform_cost_search;
    use crate::search::Problem;
    use ordered_float::OrderedFloat;

    const TRIANGLE: &str = r#"{
        "edges": [
            {"from": "a", "to": "b", "cost": 1.0},
            {"from": "b", "to": "c", "cost": 1.0},
            {"from": "a", "to": "c", "cost": 5.0}
        ],
        "initial_state": "a",
        "goal_states": ["c"]
    }"#;

    #[test]
    fn definitions_default_to_undirected_and_unweighted() {
        let definition: ProblemDefinition = r#"{
            "edges": [{"from": "x", "to": "y"}],
            "initial_state": "x",
            "goal_states": ["y"]
        }"#
        .parse()
        .unwrap();
        assert!(!definition.directed);
        assert_eq!(definition.edges[0].cost, None);
    }

    #[test]
    fn a_loaded_problem_is_searchable() {
        let definition: ProblemDefinition = TRIANGLE.parse().unwrap();
        let problem = definition.into_problem();
        assert_eq!(problem.initial_state(), "a");

        let outcome = uniform_cost_search(&problem).unwrap();
        let node = outcome.node().unwrap();
        assert_eq!(node.path_states(), vec!["a", "b", "c"]);
        assert_eq!(node.path_cost(), OrderedFloat(2.0));
    }

    #[test]
    fn directed_definitions_keep_their_direction() {
        let definition: ProblemDefinition = r#"{
            "directed": true,
            "edges": [{"from": "x", "to": "y", "cost": 2.0}],
            "initial_state": "y",
            "goal_states": ["x"]
        }"#
        .parse()
        .unwrap();
        let problem = definition.into_problem();
        let outcome = uniform_cost_search(&problem).unwrap();
        assert!(outcome.is_failure());
    }

    #[test]
    fn malformed_json_is_reported_as_such() {
        let result = "{not json".parse::<ProblemDefinition>();
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn missing_files_are_io_errors() {
        let result = ProblemDefinition::from_path(Path::new("/no/such/definition.json"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
