use tracing::debug;

use crate::{
    edge_cost::EdgeCost,
    error::{Result, RoutingError},
    graph::Graph,
    road_network::{RoadNetwork, RoadNode, RoadWay},
};

/// Builds a routing graph from road nodes and ways.
///
/// Every node becomes a vertex. Every pair of consecutive nodes of a way becomes
/// an edge in the direction of travel, and a second edge in the opposite
/// direction unless the way is one-way.
pub struct GraphBuilder;

impl GraphBuilder {
    pub fn build(network: &RoadNetwork) -> Result<Graph> {
        Self::build_graph(&network.nodes, &network.ways)
    }

    pub fn build_graph(nodes: &[RoadNode], ways: &[RoadWay]) -> Result<Graph> {
        let mut graph = Graph::with_capacity(nodes.len());

        for node in nodes {
            graph.add_vertex(node.id, node.point());
        }

        for way in ways {
            Self::add_way(&mut graph, way)?;
        }

        debug!(
            "Built graph with {} vertices and {} edges from {} ways",
            graph.vertex_count(),
            graph.edge_count(),
            ways.len()
        );

        Ok(graph)
    }

    fn add_way(graph: &mut Graph, way: &RoadWay) -> Result<()> {
        let road_class = way.road_class();
        let oneway = way.is_oneway();
        let reverse = way.is_reverse_oneway();

        for pair in way.node_ids.windows(2) {
            let (from, to) = (pair[0], pair[1]);

            // Repeated node ids would only produce self-loops
            if from == to {
                continue;
            }

            let from_point = graph.vertex(from)?.point();
            let to_point = graph.vertex(to)?.point();
            let cost = EdgeCost::for_road(from_point.haversine_distance(&to_point), road_class);

            if !oneway || !reverse {
                graph.add_edge(from, to, cost)?;
            }

            if !oneway || reverse {
                graph.add_edge(to, from, cost)?;
            }
        }

        Ok(())
    }
}

impl TryFrom<&RoadNetwork> for Graph {
    type Error = RoutingError;

    fn try_from(network: &RoadNetwork) -> Result<Self> {
        GraphBuilder::build(network)
    }
}
