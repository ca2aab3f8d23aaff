use crate::{error::Result, graph::Graph, routing::path::Path, types::VertexId, weighting::Weighting};

pub trait ShortestPathAlgorithm {
    /// Cheapest path from `start` to `end` under `weighting`.
    ///
    /// Fails with `VertexNotFound` when `start` is not in the graph and with
    /// `UnreachableDestination` when `end` cannot be reached.
    fn calc_path(
        &mut self,
        graph: &Graph,
        weighting: &impl Weighting,
        start: VertexId,
        end: VertexId,
    ) -> Result<Path>;
}
