use fxhash::FxHashMap;
use tracing::trace;

use crate::{
    edge_cost::EdgeCost,
    error::{Result, RoutingError},
    graph::Graph,
    routing::{
        path::{Path, PathItem},
        priority_queue::PriorityQueue,
        shortest_path_algorithm::ShortestPathAlgorithm,
    },
    types::VertexId,
    weighting::{Weight, Weighting},
};

/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm

struct NodeData {
    settled: bool,
    weight: Weight,
    parent: Option<(VertexId, EdgeCost)>,
}

impl NodeData {
    fn new(weight: Weight, parent: Option<(VertexId, EdgeCost)>) -> Self {
        NodeData {
            settled: false,
            weight,
            parent,
        }
    }
}

/// Label-setting search over an indexed min-heap. Vertices with equal weights
/// are settled by increasing id, so the search does not depend on the order
/// of the adjacency lists.
#[derive(Default)]
pub struct Dijkstra {
    heap: PriorityQueue<(Weight, VertexId)>,
    data: FxHashMap<VertexId, NodeData>,
}

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra::default()
    }

    fn init(&mut self, start: VertexId) {
        self.heap.clear();
        self.data.clear();

        self.data.insert(start, NodeData::new(0.0, None));
        self.heap.push_or_decrease(start, (0.0, start));
    }

    fn is_settled(&self, node: VertexId) -> bool {
        self.data.get(&node).is_some_and(|data| data.settled)
    }

    fn current_shortest_weight(&self, node: VertexId) -> Weight {
        self.data
            .get(&node)
            .map_or(Weight::INFINITY, |data| data.weight)
    }

    fn set_settled(&mut self, node: VertexId) {
        if let Some(data) = self.data.get_mut(&node) {
            data.settled = true;
        }
    }

    fn build_path(&self, graph: &Graph, end: VertexId) -> Result<Path> {
        let mut items = Vec::with_capacity(32);

        let mut node = end;
        loop {
            let parent = self.data.get(&node).and_then(|data| data.parent);
            let point = graph.vertex(node)?.point();
            items.push(PathItem::new(node, point, parent.map(|(_, cost)| cost)));

            match parent {
                Some((parent, _)) => node = parent,
                None => break,
            }
        }

        items.reverse();

        Ok(Path::from_items(items))
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn calc_path(
        &mut self,
        graph: &Graph,
        weighting: &impl Weighting,
        start: VertexId,
        end: VertexId,
    ) -> Result<Path> {
        let start_vertex = graph.vertex(start)?;

        if !graph.contains_vertex(end) {
            return Err(RoutingError::UnreachableDestination { start, end });
        }

        if start == end {
            return Ok(Path::single(start, start_vertex.point()));
        }

        self.init(start);

        let mut settled = 0;

        while let Some((node, (weight, _))) = self.heap.pop() {
            self.set_settled(node);
            settled += 1;

            if node == end {
                trace!("Dijkstra {} -> {}: settled {} vertices", start, end, settled);
                return self.build_path(graph, end);
            }

            for neighbor in graph.vertex(node)?.neighbors() {
                let adj_node = neighbor.vertex();

                if self.is_settled(adj_node) {
                    continue;
                }

                let edge_weight = weighting.calc_edge_weight(neighbor.cost());

                if !edge_weight.is_finite() || edge_weight < 0.0 {
                    continue;
                }

                let next_weight = weight + edge_weight;

                if next_weight < self.current_shortest_weight(adj_node) {
                    self.data.insert(
                        adj_node,
                        NodeData::new(next_weight, Some((node, *neighbor.cost()))),
                    );
                    self.heap.push_or_decrease(adj_node, (next_weight, adj_node));
                }
            }
        }

        trace!("Dijkstra {} -> {}: settled {} vertices, no path", start, end, settled);

        Err(RoutingError::UnreachableDestination { start, end })
    }
}
