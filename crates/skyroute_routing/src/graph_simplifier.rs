use serde::Serialize;
use tracing::debug;

use crate::{
    edge_cost::EdgeCost,
    error::Result,
    graph::Graph,
    types::VertexId,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SimplificationStats {
    /// Rounds that were run, including the last one if it changed nothing.
    pub rounds: usize,
    /// Vertices bypassed from one of their neighbors.
    pub bypassed: usize,
    /// Vertices deleted after losing all of their edges.
    pub removed_vertices: usize,
}

/// Removes vertices that only continue a road, merging their edges.
///
/// A vertex can be bypassed when it is neither the start nor the end of the
/// query and either
/// 1. it has exactly one incoming and one outgoing edge, or
/// 2. it has two incoming and two outgoing edges to two distinct neighbors that
///    both lead back to it (the middle of a two-way road).
///
/// A bypass is skipped when the observer already has an edge to the vertex it
/// would be connected to, so the graph never gains parallel edges.
pub struct GraphSimplifier {
    start: VertexId,
    end: VertexId,
}

impl GraphSimplifier {
    pub fn new(start: VertexId, end: VertexId) -> Self {
        GraphSimplifier { start, end }
    }

    /// Runs up to `rounds` rounds, stopping after the first round that does
    /// not change the graph. A graph simplified until it stops changing is
    /// left as is by further calls.
    pub fn simplify(&self, graph: &mut Graph, rounds: usize) -> Result<SimplificationStats> {
        let mut stats = SimplificationStats::default();

        for round in 0..rounds {
            let (bypassed, removed_vertices) = self.simplify_round(graph)?;
            stats.rounds += 1;
            stats.bypassed += bypassed;
            stats.removed_vertices += removed_vertices;

            debug!(
                "Simplification round {}: bypassed {}, removed {} vertices, {} vertices and {} edges left",
                round + 1,
                bypassed,
                removed_vertices,
                graph.vertex_count(),
                graph.edge_count()
            );

            if bypassed == 0 {
                break;
            }
        }

        Ok(stats)
    }

    /// One pass over a snapshot of every vertex id.
    pub fn simplify_round(&self, graph: &mut Graph) -> Result<(usize, usize)> {
        let mut bypassed = 0;
        let mut removed_vertices = 0;

        for observer in graph.vertex_ids() {
            if !graph.contains_vertex(observer) {
                continue;
            }

            let (observer_bypassed, observer_removed) =
                self.filter_vertex_neighbors(graph, observer)?;
            bypassed += observer_bypassed;
            removed_vertices += observer_removed;
        }

        Ok((bypassed, removed_vertices))
    }

    pub fn can_be_filtered(&self, graph: &Graph, id: VertexId) -> bool {
        if id == self.start || id == self.end {
            return false;
        }

        let Ok(vertex) = graph.vertex(id) else {
            return false;
        };

        if vertex.has_edge_to(id) {
            return false;
        }

        if vertex.has_equal_degrees(1) {
            return true;
        }

        if vertex.has_equal_degrees(2) {
            let neighbors = vertex.neighbors();
            if neighbors[0].vertex() == neighbors[1].vertex() {
                return false;
            }

            return neighbors.iter().all(|neighbor| {
                graph
                    .vertex(neighbor.vertex())
                    .is_ok_and(|other| other.has_edge_to(id))
            });
        }

        false
    }

    /// Bypasses every neighbor of `observer` that can be filtered. Returns the
    /// number of bypassed neighbors and the number of deleted vertices.
    pub fn filter_vertex_neighbors(
        &self,
        graph: &mut Graph,
        observer: VertexId,
    ) -> Result<(usize, usize)> {
        let edges: Vec<(VertexId, EdgeCost)> = graph
            .vertex(observer)?
            .neighbors()
            .iter()
            .map(|neighbor| (neighbor.vertex(), *neighbor.cost()))
            .collect();

        let mut bypassed = 0;
        let mut removed_vertices = 0;

        for (via, cost) in edges {
            if via == observer || !self.can_be_filtered(graph, via) {
                continue;
            }

            // An earlier bypass may already have consumed this edge
            if !graph.vertex(observer)?.has_edge(via, &cost) {
                continue;
            }

            let next = graph
                .vertex(via)?
                .edge_to_other_than(observer)
                .map(|neighbor| (neighbor.vertex(), *neighbor.cost()));

            match next {
                // Merging would turn two distinct routes into parallel edges
                Some((target, _)) if graph.vertex(observer)?.has_edge_to(target) => continue,
                Some((target, next_cost)) => {
                    graph.add_edge(observer, target, EdgeCost::combine([&cost, &next_cost]))?;
                    graph.remove_edge_entry(via, target, &next_cost)?;
                }
                None => {
                    // Dead end, the only way out leads back to the observer
                    graph.remove_edge(via, observer)?;
                }
            }
            graph.remove_edge_entry(observer, via, &cost)?;
            bypassed += 1;

            if graph.vertex(via)?.is_isolated() {
                graph.remove_vertex(via)?;
                removed_vertices += 1;
            }
        }

        Ok((bypassed, removed_vertices))
    }
}
