use serde::{Deserialize, Serialize};

use crate::{
    constants::{DEFAULT_K_PATHS, DEFAULT_SIMPLIFICATION_ROUNDS},
    cost_function::CostFunction,
    types::VertexId,
};

/// Parameters of a routing request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingQuery {
    pub start: VertexId,
    pub end: VertexId,
    pub simplification_rounds: usize,
    pub k: usize,
    pub cost_function: CostFunction,
    pub skyline: bool,
    /// Return the leftover candidates of the k-shortest-paths search too
    pub keep_candidates: bool,
    pub parallel_spurs: bool,
}

impl RoutingQuery {
    pub fn new(start: VertexId, end: VertexId) -> Self {
        RoutingQuery {
            start,
            end,
            ..RoutingQuery::default()
        }
    }
}

impl Default for RoutingQuery {
    fn default() -> Self {
        RoutingQuery {
            start: 0,
            end: 0,
            simplification_rounds: DEFAULT_SIMPLIFICATION_ROUNDS,
            k: DEFAULT_K_PATHS,
            cost_function: CostFunction::default(),
            skyline: true,
            keep_candidates: true,
            parallel_spurs: false,
        }
    }
}
