#![allow(dead_code)]

use rand::{Rng, SeedableRng, rngs::StdRng};
use skyroute_routing::{
    edge_cost::EdgeCost,
    geopoint::GeoPoint,
    graph::Graph,
    road_network::{RoadNetwork, RoadNode, RoadWay},
    types::VertexId,
};

pub const HIGHWAYS: [&str; 6] = [
    "motorway",
    "primary",
    "secondary",
    "tertiary",
    "residential",
    "living_street",
];

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random directed graph with vertices `1..=vertices`. Roads are two-way
/// with probability `two_way`, there are no self-loops nor parallel edges.
pub fn random_graph(rng: &mut StdRng, vertices: VertexId, roads: usize, two_way: f64) -> Graph {
    let mut graph = Graph::new();
    for id in 1..=vertices {
        graph.add_vertex(
            id,
            GeoPoint::new(rng.random_range(50.0..50.1), rng.random_range(4.0..4.1)),
        );
    }

    for _ in 0..roads {
        let from = rng.random_range(1..=vertices);
        let to = rng.random_range(1..=vertices);
        if from == to || graph.vertex(from).unwrap().has_edge_to(to) {
            continue;
        }

        let cost = random_cost(rng);
        graph.add_edge(from, to, cost).unwrap();

        if rng.random_bool(two_way) && !graph.vertex(to).unwrap().has_edge_to(from) {
            graph.add_edge(to, from, cost).unwrap();
        }
    }

    graph
}

pub fn random_cost(rng: &mut StdRng) -> EdgeCost {
    let distance = rng.random_range(10.0..1000.0);
    let speed = rng.random_range(5.0..30.0);
    EdgeCost::new(distance, distance / speed / 60.0, rng.random_range(1.0..6.0))
}

/// Road network laid out as a `size` x `size` grid of two-way roads, with a
/// road class chosen at random for every row and column.
pub fn grid_network(rng: &mut StdRng, size: VertexId) -> RoadNetwork {
    let id = |row: VertexId, column: VertexId| row * size + column + 1;

    let mut nodes = Vec::new();
    for row in 0..size {
        for column in 0..size {
            nodes.push(RoadNode::new(
                id(row, column),
                50.0 + row as f64 * 0.001,
                4.0 + column as f64 * 0.001,
            ));
        }
    }

    let mut ways = Vec::new();
    for line in 0..size {
        let row: Vec<VertexId> = (0..size).map(|column| id(line, column)).collect();
        let column: Vec<VertexId> = (0..size).map(|row| id(row, line)).collect();

        for node_ids in [row, column] {
            let highway = HIGHWAYS[rng.random_range(0..HIGHWAYS.len())];
            ways.push(RoadWay::new(node_ids).with_tag("highway", highway));
        }
    }

    RoadNetwork::new(nodes, ways)
}

pub fn assert_close(left: f64, right: f64) {
    let tolerance = 1e-9 * left.abs().max(right.abs()).max(1.0);
    assert!(
        (left - right).abs() <= tolerance,
        "{} and {} differ by more than {}",
        left,
        right,
        tolerance
    );
}
