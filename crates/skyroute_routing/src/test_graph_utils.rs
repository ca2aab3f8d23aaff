#[cfg(test)]
pub mod test_graph {
    use crate::{
        edge_cost::EdgeCost,
        geopoint::GeoPoint,
        graph::Graph,
        road_network::{RoadNetwork, RoadNode, RoadWay},
        types::VertexId,
        weighting::{Weight, Weighting},
    };

    pub fn kilometers(value: f64) -> f64 {
        value * 1000.0
    }

    /// Cost where time equals distance, with a neutral road penalty.
    pub fn unit_cost(distance: f64) -> EdgeCost {
        EdgeCost::new(distance, distance, 1.0)
    }

    fn graph_with_vertices(count: VertexId) -> Graph {
        let mut graph = Graph::new();
        for id in 1..=count {
            graph.add_vertex(id, GeoPoint::new(0.0, id as f64 * 0.001));
        }
        graph
    }

    /// 1 -> 2 -> ... -> count, every edge of distance 1.
    pub fn chain_graph(count: VertexId) -> Graph {
        let mut graph = graph_with_vertices(count);
        for id in 1..count {
            graph.add_edge(id, id + 1, unit_cost(1.0)).unwrap();
        }
        graph
    }

    pub fn bidirectional_chain_graph(count: VertexId) -> Graph {
        let mut graph = chain_graph(count);
        for id in 1..count {
            graph.add_edge(id + 1, id, unit_cost(1.0)).unwrap();
        }
        graph
    }

    /// 1 -> 2 -> 4 and 1 -> 3 -> 4, both of distance 2.
    pub fn diamond_graph() -> Graph {
        let mut graph = graph_with_vertices(4);
        for (from, to) in [(1, 2), (2, 4), (1, 3), (3, 4)] {
            graph.add_edge(from, to, unit_cost(1.0)).unwrap();
        }
        graph
    }

    pub enum RomaniaGraphCity {
        Arad = 1,
        Bucharest = 2,
        Craiova = 3,
        Dobreta = 4,
        Eforie = 5,
        Fagaras = 6,
        Giurgiu = 7,
        Hirsova = 8,
        Iasi = 9,
        Lugoj = 10,
        Mehadia = 11,
        Neamt = 12,
        Oradea = 13,
        Pitesti = 14,
        RimnicuVilcea = 15,
        Sibiu = 16,
        Timisoara = 17,
        Urziceni = 18,
        Vaslui = 19,
        Zerind = 20,
    }

    impl From<RomaniaGraphCity> for VertexId {
        fn from(value: RomaniaGraphCity) -> Self {
            value as VertexId
        }
    }

    // https://user-images.githubusercontent.com/43790152/97784960-1a142580-1bc4-11eb-9070-39c03eb16df2.png
    fn romania_graph_edges() -> Vec<(RomaniaGraphCity, RomaniaGraphCity, f64)> {
        use RomaniaGraphCity::*;

        vec![
            (Oradea, Zerind, 71.0),
            (Oradea, Sibiu, 151.0),
            (Zerind, Arad, 75.0),
            (Arad, Sibiu, 140.0),
            (Arad, Timisoara, 118.0),
            (Timisoara, Lugoj, 111.0),
            (Lugoj, Mehadia, 70.0),
            (Mehadia, Dobreta, 75.0),
            (Dobreta, Craiova, 120.0),
            (Craiova, RimnicuVilcea, 146.0),
            (Craiova, Pitesti, 138.0),
            (RimnicuVilcea, Pitesti, 97.0),
            (RimnicuVilcea, Sibiu, 80.0),
            (Sibiu, Fagaras, 99.0),
            (Fagaras, Bucharest, 211.0),
            (Pitesti, Bucharest, 101.0),
            (Bucharest, Giurgiu, 90.0),
            (Bucharest, Urziceni, 85.0),
            (Urziceni, Hirsova, 98.0),
            (Hirsova, Eforie, 86.0),
            (Urziceni, Vaslui, 142.0),
            (Vaslui, Iasi, 92.0),
            (Iasi, Neamt, 87.0),
        ]
    }

    /// Two-way roads between Romanian cities, distances in meters.
    pub fn romania_graph() -> Graph {
        let mut graph = graph_with_vertices(20);

        for (start, end, distance) in romania_graph_edges() {
            let (start, end) = (VertexId::from(start), VertexId::from(end));
            let cost = unit_cost(kilometers(distance));
            graph.add_edge(start, end, cost).unwrap();
            graph.add_edge(end, start, cost).unwrap();
        }

        graph
    }

    /// Small road network of 21 nodes on a grid of one degree cells. Ways
    /// listed in both directions are one-way.
    pub fn sample_network() -> RoadNetwork {
        let coordinates: [(VertexId, f64, f64); 21] = [
            (1, 4.0, 1.0),
            (2, 4.0, 2.0),
            (3, 4.0, 3.0),
            (4, 4.0, 4.0),
            (5, 4.0, 5.0),
            (6, 5.0, 5.0),
            (7, 6.0, 5.0),
            (8, 7.0, 5.0),
            (9, 1.0, 3.0),
            (10, 2.0, 4.0),
            (11, 2.0, 5.0),
            (12, 3.0, 5.0),
            (13, 2.0, 3.0),
            (14, 3.0, 3.0),
            (15, 5.0, 3.0),
            (16, 6.0, 3.0),
            (17, 7.0, 3.0),
            (18, 7.0, 2.0),
            (19, 6.0, 2.0),
            (20, 7.0, 1.0),
            (21, 8.0, 1.0),
        ];

        let nodes = coordinates
            .iter()
            .map(|&(id, x, y)| RoadNode::new(id, y, x))
            .collect();

        let oneway = |node_ids: Vec<VertexId>| {
            RoadWay::new(node_ids)
                .with_tag("highway", "primary")
                .with_tag("oneway", "yes")
        };
        let two_way = |node_ids: Vec<VertexId>| RoadWay::new(node_ids).with_tag("highway", "primary");

        let ways = vec![
            oneway(vec![1, 2, 3, 4, 5, 6, 7, 8]),
            oneway(vec![8, 7, 6, 5, 4, 3, 2, 1]),
            two_way(vec![9, 10, 11, 12, 5]),
            oneway(vec![9, 13, 14, 3, 15, 16]),
            oneway(vec![16, 15, 3, 14, 13, 9]),
            two_way(vec![17, 18, 19, 16, 17]),
            oneway(vec![18, 20, 21]),
            oneway(vec![21, 20, 18]),
        ];

        RoadNetwork::new(nodes, ways)
    }

    pub struct TestWeighting;

    impl Weighting for TestWeighting {
        fn calc_edge_weight(&self, cost: &EdgeCost) -> Weight {
            cost.distance()
        }
    }
}
