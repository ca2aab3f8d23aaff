use crate::{edge_cost::EdgeCost, geopoint::GeoPoint, types::VertexId};

/// Outgoing edge of a vertex.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Neighbor {
    vertex: VertexId,
    cost: EdgeCost,
}

impl Neighbor {
    pub fn new(vertex: VertexId, cost: EdgeCost) -> Self {
        Neighbor { vertex, cost }
    }

    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    pub fn cost(&self) -> &EdgeCost {
        &self.cost
    }
}

/// A road node and its outgoing edges.
///
/// Adjacency is only mutated through [`crate::graph::Graph`], which keeps the
/// in-degree of the edge targets in sync.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    point: GeoPoint,
    neighbors: Vec<Neighbor>,
    in_degree: usize,
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Vertex) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Vertex {
    pub(crate) fn new(id: VertexId, point: GeoPoint) -> Self {
        Vertex {
            id,
            point,
            neighbors: Vec::new(),
            in_degree: 0,
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn point(&self) -> GeoPoint {
        self.point
    }

    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    pub fn out_degree(&self) -> usize {
        self.neighbors.len()
    }

    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    pub fn is_isolated(&self) -> bool {
        self.in_degree == 0 && self.neighbors.is_empty()
    }

    /// Both the in-degree and the out-degree equal `degree`.
    pub fn has_equal_degrees(&self, degree: usize) -> bool {
        self.in_degree == degree && self.out_degree() == degree
    }

    pub fn has_edge_to(&self, vertex: VertexId) -> bool {
        self.neighbors.iter().any(|neighbor| neighbor.vertex == vertex)
    }

    pub(crate) fn has_edge(&self, vertex: VertexId, cost: &EdgeCost) -> bool {
        self.neighbors
            .iter()
            .any(|neighbor| neighbor.vertex == vertex && neighbor.cost == *cost)
    }

    /// First outgoing edge leading somewhere else than `excluded`.
    pub fn edge_to_other_than(&self, excluded: VertexId) -> Option<&Neighbor> {
        self.neighbors
            .iter()
            .find(|neighbor| neighbor.vertex != excluded)
    }

    pub(crate) fn push_neighbor(&mut self, neighbor: Neighbor) {
        self.neighbors.push(neighbor);
    }

    /// Removes the first edge to `vertex`, restricted to the given cost when one
    /// is provided.
    pub(crate) fn take_neighbor(
        &mut self,
        vertex: VertexId,
        cost: Option<&EdgeCost>,
    ) -> Option<Neighbor> {
        let position = self.neighbors.iter().position(|neighbor| {
            neighbor.vertex == vertex && cost.is_none_or(|cost| neighbor.cost == *cost)
        })?;

        Some(self.neighbors.remove(position))
    }

    pub(crate) fn take_neighbors(&mut self) -> Vec<Neighbor> {
        std::mem::take(&mut self.neighbors)
    }

    pub(crate) fn increment_in_degree(&mut self) {
        self.in_degree += 1;
    }

    pub(crate) fn decrement_in_degree(&mut self) {
        debug_assert!(self.in_degree > 0, "in-degree of {} underflows", self.id);
        self.in_degree = self.in_degree.saturating_sub(1);
    }
}
