use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use skyroute_routing::{
    cost_function::CostFunction,
    graph::Graph,
    graph_builder::GraphBuilder,
    pipeline::RoutingPipeline,
    road_network::{RoadNetwork, RoadNode, RoadWay},
    routing::{
        dijkstra::Dijkstra, shortest_path_algorithm::ShortestPathAlgorithm,
        yen::YenKShortestPaths,
    },
    routing_query::RoutingQuery,
    types::VertexId,
    weighting::CostWeighting,
};

const HIGHWAYS: [&str; 5] = ["motorway", "primary", "secondary", "residential", "service"];
const GRID_SIZE: VertexId = 30;

fn grid_network(size: VertexId) -> RoadNetwork {
    let mut rng = StdRng::seed_from_u64(42);
    let id = |row: VertexId, column: VertexId| row * size + column + 1;

    let nodes = (0..size)
        .flat_map(|row| (0..size).map(move |column| (row, column)))
        .map(|(row, column)| {
            RoadNode::new(
                id(row, column),
                50.0 + row as f64 * 0.001,
                4.0 + column as f64 * 0.001,
            )
        })
        .collect();

    let mut ways = Vec::new();
    for line in 0..size {
        for node_ids in [
            (0..size).map(|column| id(line, column)).collect::<Vec<_>>(),
            (0..size).map(|row| id(row, line)).collect::<Vec<_>>(),
        ] {
            let highway = HIGHWAYS[rng.random_range(0..HIGHWAYS.len())];
            ways.push(RoadWay::new(node_ids).with_tag("highway", highway));
        }
    }

    RoadNetwork::new(nodes, ways)
}

fn simplified_graph(network: &RoadNetwork, end: VertexId) -> Graph {
    let mut graph = GraphBuilder::build(network).unwrap();
    graph.simplify(1, end, 5).unwrap();
    graph
}

fn dijkstra_benchmark(c: &mut Criterion) {
    let end = GRID_SIZE * GRID_SIZE;
    let graph = simplified_graph(&grid_network(GRID_SIZE), end);
    let weighting = CostWeighting::for_graph(CostFunction::ArithmeticMean, &graph);
    let mut dijkstra = Dijkstra::new();

    c.bench_function("dijkstra grid", |b| {
        b.iter(|| {
            dijkstra
                .calc_path(&graph, &weighting, black_box(1), black_box(end))
                .unwrap()
        })
    });
}

fn yen_benchmark(c: &mut Criterion) {
    let end = GRID_SIZE * GRID_SIZE;
    let mut graph = simplified_graph(&grid_network(GRID_SIZE), end);
    let weighting = CostWeighting::for_graph(CostFunction::ArithmeticMean, &graph);

    let mut group = c.benchmark_group("yen");
    group.sample_size(20);

    group.bench_function("yen k=5 sequential", |b| {
        b.iter(|| {
            YenKShortestPaths::new()
                .find_paths(&mut graph, &weighting, black_box(1), black_box(end), 5)
                .unwrap()
        })
    });

    group.bench_function("yen k=5 parallel spurs", |b| {
        b.iter(|| {
            YenKShortestPaths::new()
                .parallel_spurs(true)
                .find_paths(&mut graph, &weighting, black_box(1), black_box(end), 5)
                .unwrap()
        })
    });

    group.finish();
}

fn pipeline_benchmark(c: &mut Criterion) {
    let network = grid_network(GRID_SIZE);
    let query = RoutingQuery::new(1, GRID_SIZE * GRID_SIZE);

    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);
    group.bench_function("pipeline grid", |b| {
        b.iter(|| RoutingPipeline::run_network(black_box(&network), &query).unwrap())
    });
    group.finish();
}

criterion_group!(benches, dijkstra_benchmark, yen_benchmark, pipeline_benchmark);
criterion_main!(benches);
