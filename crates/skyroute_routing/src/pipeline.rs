use serde::Serialize;
use tracing::{debug, info};

use crate::{
    diversity::DiversityStats,
    error::Result,
    graph::Graph,
    graph_builder::GraphBuilder,
    graph_simplifier::SimplificationStats,
    road_network::{RoadNetwork, RoadNode, RoadWay},
    routing::{path::Path, yen::YenKShortestPaths},
    routing_query::RoutingQuery,
    skyline::skyline,
    stopwatch::Stopwatch,
    weighting::CostWeighting,
};

#[derive(Debug, Clone, Serialize)]
pub struct RoutingOutcome {
    pub paths: Vec<Path>,
    /// Paths returned by the k-shortest-paths search, before the skyline.
    pub k_paths_found: usize,
    pub simplification: SimplificationStats,
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Diversity of the k-shortest-paths result.
    pub diversity: Option<DiversityStats>,
    /// Diversity of the returned paths.
    pub final_diversity: Option<DiversityStats>,
}

/// Build, simplify, k-shortest-paths and skyline for one request.
pub struct RoutingPipeline;

impl RoutingPipeline {
    pub fn run(nodes: &[RoadNode], ways: &[RoadWay], query: &RoutingQuery) -> Result<RoutingOutcome> {
        let stopwatch = Stopwatch::started("pipeline/build_graph");
        let mut graph = GraphBuilder::build_graph(nodes, ways)?;
        stopwatch.finish();

        Self::run_on_graph(&mut graph, query)
    }

    pub fn run_network(network: &RoadNetwork, query: &RoutingQuery) -> Result<RoutingOutcome> {
        Self::run(&network.nodes, &network.ways, query)
    }

    /// Runs the request on an already built graph, which is simplified in
    /// place.
    pub fn run_on_graph(graph: &mut Graph, query: &RoutingQuery) -> Result<RoutingOutcome> {
        let total = Stopwatch::started("pipeline");
        info!(
            "Routing {} -> {} on {} vertices and {} edges",
            query.start,
            query.end,
            graph.vertex_count(),
            graph.edge_count()
        );

        if query.simplification_rounds > 0 && !query.cost_function.is_additive() {
            debug!(
                "Cost function {} is not additive, simplification may change path weights",
                query.cost_function
            );
        }

        let stopwatch = Stopwatch::started("pipeline/simplify");
        let simplification = graph.simplify(query.start, query.end, query.simplification_rounds)?;
        stopwatch.finish();

        info!(
            "Simplified graph to {} vertices and {} edges in {} rounds",
            graph.vertex_count(),
            graph.edge_count(),
            simplification.rounds
        );

        let weighting = CostWeighting::for_graph(query.cost_function, graph);

        let stopwatch = Stopwatch::started("pipeline/k_paths");
        let paths = YenKShortestPaths::new()
            .keep_candidates(query.keep_candidates)
            .parallel_spurs(query.parallel_spurs)
            .find_paths(graph, &weighting, query.start, query.end, query.k)?;
        stopwatch.finish();

        let k_paths_found = paths.len();
        let diversity = DiversityStats::from_paths(&paths);
        info!("Found {} paths", k_paths_found);
        if let Some(diversity) = &diversity {
            debug!(
                "Diversity min {:.3}, max {:.3}, mean {:.3}",
                diversity.min, diversity.max, diversity.mean
            );
        }

        let paths = if query.skyline && !paths.is_empty() {
            let stopwatch = Stopwatch::started("pipeline/skyline");
            let paths = skyline(paths)?;
            stopwatch.finish();
            info!("Skyline kept {} of {} paths", paths.len(), k_paths_found);
            paths
        } else {
            paths
        };

        let final_diversity = DiversityStats::from_paths(&paths);
        info!(
            "Routed {} -> {} in {:?}",
            query.start,
            query.end,
            total.elapsed()
        );

        Ok(RoutingOutcome {
            paths,
            k_paths_found,
            simplification,
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            diversity,
            final_diversity,
        })
    }
}
