use std::fmt::Write;

use fxhash::FxHashMap;
use tracing::warn;

use crate::{
    edge_cost::EdgeCost,
    error::{Result, RoutingError},
    geopoint::GeoPoint,
    graph_simplifier::{GraphSimplifier, SimplificationStats},
    types::VertexId,
    vertex::{Neighbor, Vertex},
};

/// A vertex taken out of the graph together with every edge that touched it.
#[derive(Debug, Clone)]
pub struct RemovedVertex {
    id: VertexId,
    point: GeoPoint,
    outgoing: Vec<Neighbor>,
    incoming: Vec<(VertexId, EdgeCost)>,
}

impl RemovedVertex {
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn outgoing(&self) -> &[Neighbor] {
        &self.outgoing
    }

    pub fn incoming(&self) -> &[(VertexId, EdgeCost)] {
        &self.incoming
    }
}

/// Directed road graph owning its vertices.
///
/// Every edge exists only as an entry of its source vertex. All edge mutations
/// go through this type so the in-degree of the targets stays correct.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: FxHashMap<VertexId, Vertex>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Graph {
            vertices: FxHashMap::with_capacity_and_hasher(vertices, Default::default()),
            edge_count: 0,
        }
    }

    /// Adds a vertex without edges. Returns `false` and leaves the graph
    /// untouched when the id is already present.
    pub fn add_vertex(&mut self, id: VertexId, point: GeoPoint) -> bool {
        if self.vertices.contains_key(&id) {
            warn!("Vertex {} already exists, ignoring duplicate", id);
            return false;
        }

        self.vertices.insert(id, Vertex::new(id, point));
        true
    }

    pub fn vertex(&self, id: VertexId) -> Result<&Vertex> {
        self.vertices
            .get(&id)
            .ok_or(RoutingError::VertexNotFound { id })
    }

    fn vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex> {
        self.vertices
            .get_mut(&id)
            .ok_or(RoutingError::VertexNotFound { id })
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Sorted snapshot of the vertex ids, safe to iterate while mutating.
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        let mut ids: Vec<VertexId> = self.vertices.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn add_edge(&mut self, from: VertexId, to: VertexId, cost: EdgeCost) -> Result<()> {
        if !self.contains_vertex(to) {
            return Err(RoutingError::VertexNotFound { id: to });
        }

        self.vertex_mut(from)?.push_neighbor(Neighbor::new(to, cost));
        self.vertex_mut(to)?.increment_in_degree();
        self.edge_count += 1;

        Ok(())
    }

    /// Removes the first edge `from -> to`. Removing an edge that does not
    /// exist is a no-op returning `None`.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<Option<EdgeCost>> {
        let removed = self.vertex_mut(from)?.take_neighbor(to, None);
        Ok(removed.map(|neighbor| {
            self.after_edge_removed(to);
            *neighbor.cost()
        }))
    }

    /// Removes exactly the edge `from -> to` carrying `cost`.
    pub fn remove_edge_entry(
        &mut self,
        from: VertexId,
        to: VertexId,
        cost: &EdgeCost,
    ) -> Result<bool> {
        let removed = self.vertex_mut(from)?.take_neighbor(to, Some(cost));
        if removed.is_some() {
            self.after_edge_removed(to);
        }

        Ok(removed.is_some())
    }

    /// Removes every parallel edge `from -> to` and returns their costs.
    pub fn remove_edges_between(&mut self, from: VertexId, to: VertexId) -> Result<Vec<EdgeCost>> {
        let mut costs = Vec::new();
        while let Some(cost) = self.remove_edge(from, to)? {
            costs.push(cost);
        }

        Ok(costs)
    }

    fn after_edge_removed(&mut self, to: VertexId) {
        self.edge_count -= 1;
        if let Some(target) = self.vertices.get_mut(&to) {
            target.decrement_in_degree();
        }
    }

    /// Removes a vertex and every edge pointing to or leaving it.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<RemovedVertex> {
        let vertex = self.vertex(id)?;
        let self_loops = vertex
            .neighbors()
            .iter()
            .filter(|neighbor| neighbor.vertex() == id)
            .count();
        let mut remaining_inbound = vertex.in_degree().saturating_sub(self_loops);

        let mut incoming = Vec::with_capacity(remaining_inbound);
        for (&source_id, source) in self.vertices.iter_mut() {
            if remaining_inbound == 0 {
                break;
            }
            if source_id == id {
                continue;
            }

            while let Some(neighbor) = source.take_neighbor(id, None) {
                incoming.push((source_id, *neighbor.cost()));
                remaining_inbound = remaining_inbound.saturating_sub(1);
            }
        }
        self.edge_count -= incoming.len();

        let mut vertex = self
            .vertices
            .remove(&id)
            .ok_or(RoutingError::VertexNotFound { id })?;
        let outgoing = vertex.take_neighbors();
        self.edge_count -= outgoing.len();

        for neighbor in &outgoing {
            if let Some(target) = self.vertices.get_mut(&neighbor.vertex()) {
                target.decrement_in_degree();
            }
        }

        Ok(RemovedVertex {
            id,
            point: vertex.point(),
            outgoing,
            incoming,
        })
    }

    /// Puts back a vertex removed with [`Graph::remove_vertex`], with all of its
    /// edges. The vertices on the other end of those edges must be present.
    pub fn restore_vertex(&mut self, removed: RemovedVertex) -> Result<()> {
        self.add_vertex(removed.id, removed.point);

        for neighbor in removed.outgoing {
            self.add_edge(removed.id, neighbor.vertex(), *neighbor.cost())?;
        }

        for (source, cost) in removed.incoming {
            self.add_edge(source, removed.id, cost)?;
        }

        Ok(())
    }

    /// Component-wise maximum over every edge cost in the graph.
    pub fn max_edge_cost(&self) -> EdgeCost {
        let mut max = [0.0f64; 3];
        for neighbor in self.vertices.values().flat_map(|vertex| vertex.neighbors()) {
            for (current, component) in max.iter_mut().zip(neighbor.cost().components()) {
                *current = current.max(component);
            }
        }

        EdgeCost::new(max[0], max[1], max[2])
    }

    /// Collapses pass-through vertices, keeping `start` and `end`.
    pub fn simplify(
        &mut self,
        start: VertexId,
        end: VertexId,
        rounds: usize,
    ) -> Result<SimplificationStats> {
        GraphSimplifier::new(start, end).simplify(self, rounds)
    }

    /// Graphviz `dot` rendering of the edges, for debugging.
    pub fn to_graphviz(&self) -> String {
        let mut out = String::from("digraph {\n");
        for id in self.vertex_ids() {
            let Some(vertex) = self.vertices.get(&id) else {
                continue;
            };
            for neighbor in vertex.neighbors() {
                let _ = writeln!(
                    out,
                    "  {} -> {} [label=\"{:.0}\"]",
                    id,
                    neighbor.vertex(),
                    neighbor.cost().distance()
                );
            }
        }
        out.push('}');
        out
    }
}
