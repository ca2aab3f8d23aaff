use thiserror::Error;

use crate::types::VertexId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    #[error("Vertex {id} not found in graph")]
    VertexNotFound { id: VertexId },
    #[error("No path from vertex {start} to vertex {end}")]
    UnreachableDestination { start: VertexId, end: VertexId },
    #[error("Skyline filter requires at least one candidate path")]
    EmptyCandidateSet,
    #[error("Cannot join paths: path ending at {left_end} does not continue from {right_start}")]
    PathJoin {
        left_end: VertexId,
        right_start: VertexId,
    },
    #[error("Path is empty")]
    EmptyPath,
    #[error("Invalid edge cost component {component}: {value}")]
    InvalidCost { component: &'static str, value: f64 },
}

impl RoutingError {
    /// Errors that only mean "no path from here" and can be absorbed by a caller
    /// exploring alternatives.
    pub fn is_no_path(&self) -> bool {
        matches!(
            self,
            RoutingError::VertexNotFound { .. } | RoutingError::UnreachableDestination { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RoutingError>;
