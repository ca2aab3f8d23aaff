use std::fmt;

use geo_types::{Coord, LineString};
use serde::Serialize;

use crate::{
    edge_cost::EdgeCost,
    error::{Result, RoutingError},
    geopoint::GeoPoint,
    types::VertexId,
    weighting::{Weight, Weighting},
};

/// A vertex of a path and the cost of the edge that leads to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathItem {
    vertex: VertexId,
    point: GeoPoint,
    cost: Option<EdgeCost>,
}

impl PathItem {
    pub fn new(vertex: VertexId, point: GeoPoint, cost: Option<EdgeCost>) -> Self {
        PathItem {
            vertex,
            point,
            cost,
        }
    }

    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    pub fn point(&self) -> GeoPoint {
        self.point
    }

    /// `None` for the first item of a path.
    pub fn cost(&self) -> Option<&EdgeCost> {
        self.cost.as_ref()
    }
}

/// Ordered vertices from a source to a destination, with the cost of every
/// traversed edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Path {
    items: Vec<PathItem>,
}

impl Path {
    pub fn new() -> Self {
        Path::default()
    }

    pub fn from_items(mut items: Vec<PathItem>) -> Self {
        if let Some(first) = items.first_mut() {
            first.cost = None;
        }
        Path { items }
    }

    pub fn single(vertex: VertexId, point: GeoPoint) -> Self {
        Path {
            items: vec![PathItem::new(vertex, point, None)],
        }
    }

    pub fn items(&self) -> &[PathItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&PathItem> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&PathItem> {
        self.items.last()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.items.iter().map(PathItem::vertex)
    }

    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices().collect()
    }

    /// Appends a vertex reached through an edge of the given cost. The cost is
    /// dropped when the path is empty.
    pub fn push(&mut self, vertex: VertexId, point: GeoPoint, cost: EdgeCost) {
        let cost = if self.items.is_empty() {
            None
        } else {
            Some(cost)
        };
        self.items.push(PathItem::new(vertex, point, cost));
    }

    /// Prepends a vertex, `cost` being the cost of the edge from the new first
    /// vertex to the previous one.
    pub fn push_front(&mut self, vertex: VertexId, point: GeoPoint, cost: EdgeCost) {
        if let Some(first) = self.items.first_mut() {
            first.cost = Some(cost);
        }
        self.items.insert(0, PathItem::new(vertex, point, None));
    }

    /// Items `start..end`. An item cut from its predecessor loses its cost.
    pub fn slice(&self, start: usize, end: usize) -> Path {
        let end = end.min(self.items.len());
        let start = start.min(end);
        Path::from_items(self.items[start..end].to_vec())
    }

    /// Appends `other`, which has to start where `self` ends.
    pub fn join(&self, other: &Path) -> Result<Path> {
        let Some(last) = self.last() else {
            return Ok(other.clone());
        };
        let first = other.first().ok_or(RoutingError::EmptyPath)?;

        if last.vertex != first.vertex {
            return Err(RoutingError::PathJoin {
                left_end: last.vertex,
                right_start: first.vertex,
            });
        }

        let mut items = Vec::with_capacity(self.items.len() + other.items.len() - 1);
        items.extend_from_slice(&self.items);
        items.extend_from_slice(&other.items[1..]);

        Ok(Path { items })
    }

    pub fn edge_costs(&self) -> impl Iterator<Item = &EdgeCost> {
        self.items.iter().filter_map(PathItem::cost)
    }

    /// `(from, to, cost)` for every traversed edge.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, &EdgeCost)> {
        self.items.windows(2).filter_map(|pair| {
            pair[1]
                .cost
                .as_ref()
                .map(|cost| (pair[0].vertex, pair[1].vertex, cost))
        })
    }

    /// Aggregated cost of the whole path.
    pub fn evaluate(&self) -> EdgeCost {
        EdgeCost::combine(self.edge_costs())
    }

    /// Sum of the edge weights, the value a shortest path search minimizes.
    pub fn weight(&self, weighting: &impl Weighting) -> Weight {
        self.edge_costs()
            .map(|cost| weighting.calc_edge_weight(cost))
            .sum()
    }

    pub fn distance(&self) -> f64 {
        self.edge_costs().map(EdgeCost::distance).sum()
    }

    pub fn same_vertices(&self, other: &Path) -> bool {
        self.items.len() == other.items.len() && self.vertices().eq(other.vertices())
    }

    pub fn starts_with(&self, root: &Path) -> bool {
        root.items.len() <= self.items.len()
            && root
                .vertices()
                .zip(self.vertices())
                .all(|(expected, actual)| expected == actual)
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices().any(|id| id == vertex)
    }

    pub fn dominates(&self, other: &Path) -> bool {
        self.evaluate().dominates(&other.evaluate())
    }

    pub fn line_string(&self) -> LineString<f64> {
        LineString::new(
            self.items
                .iter()
                .map(|item| Coord::from(item.point))
                .collect(),
        )
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vertices = self.vertices();
        if let Some(first) = vertices.next() {
            write!(f, "{}", first)?;
        }
        for vertex in vertices {
            write!(f, " -> {}", vertex)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_graph_utils::test_graph::{TestWeighting, unit_cost};

    use super::*;

    fn point(vertex: VertexId) -> GeoPoint {
        GeoPoint::new(0.0, vertex as f64)
    }

    fn path(vertices: &[VertexId]) -> Path {
        let mut path = Path::new();
        for &vertex in vertices {
            path.push(vertex, point(vertex), unit_cost(1.0));
        }
        path
    }

    #[test]
    fn first_item_has_no_cost() {
        let path = path(&[1, 2, 3]);

        assert!(path.first().unwrap().cost().is_none());
        assert_eq!(path.items()[1].cost(), Some(&unit_cost(1.0)));
        assert_eq!(path.evaluate(), unit_cost(2.0));
        assert_eq!(path.to_string(), "1 -> 2 -> 3");
    }

    #[test]
    fn push_front_moves_the_cost() {
        let mut path = path(&[2, 3]);
        path.push_front(1, point(1), unit_cost(4.0));

        assert_eq!(path.vertex_ids(), vec![1, 2, 3]);
        assert!(path.first().unwrap().cost().is_none());
        assert_eq!(path.items()[1].cost(), Some(&unit_cost(4.0)));
        assert_eq!(path.distance(), 5.0);
    }

    #[test]
    fn slice_drops_incoming_cost() {
        let path = path(&[1, 2, 3, 4]);

        let root = path.slice(0, 2);
        assert_eq!(root.vertex_ids(), vec![1, 2]);
        assert_eq!(root.distance(), 1.0);

        let tail = path.slice(2, 10);
        assert_eq!(tail.vertex_ids(), vec![3, 4]);
        assert!(tail.first().unwrap().cost().is_none());
        assert_eq!(tail.distance(), 1.0);

        assert!(path.slice(3, 1).is_empty());
    }

    #[test]
    fn join_keeps_every_edge() {
        let root = path(&[1, 2]);
        let spur = path(&[2, 3, 4]);

        let joined = root.join(&spur).unwrap();

        assert_eq!(joined.vertex_ids(), vec![1, 2, 3, 4]);
        assert_eq!(joined.evaluate(), unit_cost(3.0));
        assert_eq!(joined.edges().count(), 3);
    }

    #[test]
    fn join_mismatch_fails() {
        let err = path(&[1, 2]).join(&path(&[3, 4])).unwrap_err();

        assert_eq!(
            err,
            RoutingError::PathJoin {
                left_end: 2,
                right_start: 3
            }
        );
        assert_eq!(path(&[1]).join(&Path::new()), Err(RoutingError::EmptyPath));
        assert_eq!(Path::new().join(&path(&[1, 2])), Ok(path(&[1, 2])));
    }

    #[test]
    fn prefix_and_equality() {
        let path = path(&[1, 2, 3]);

        assert!(path.starts_with(&Path::single(1, point(1))));
        assert!(path.starts_with(&path.slice(0, 2)));
        assert!(!path.starts_with(&Path::single(2, point(2))));
        assert!(path.same_vertices(&path.clone()));
        assert!(!path.same_vertices(&path.slice(0, 2)));
        assert!(path.contains_vertex(3));
    }

    #[test]
    fn weight_sums_edge_weights() {
        let mut path = Path::single(1, point(1));
        path.push(2, point(2), EdgeCost::new(3.0, 1.0, 1.0));
        path.push(3, point(3), EdgeCost::new(4.0, 1.0, 1.0));

        assert_eq!(path.weight(&TestWeighting), 7.0);
        assert_eq!(Path::single(1, point(1)).weight(&TestWeighting), 0.0);
    }

    #[test]
    fn dominance_between_paths() {
        let short = path(&[1, 2, 3]);
        let long = path(&[1, 4, 5, 3]);

        assert!(short.dominates(&long));
        assert!(!long.dominates(&short));
    }

    #[test]
    fn line_string_uses_lng_lat() {
        let path = path(&[1, 2]);
        let line = path.line_string();

        assert_eq!(line.0.len(), 2);
        assert_eq!(line.0[1], Coord { x: 2.0, y: 0.0 });
    }
}
