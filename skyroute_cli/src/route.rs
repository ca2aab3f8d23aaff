use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Args;
use comfy_table::Table;
use skyroute_routing::{
    constants::{DEFAULT_K_PATHS, DEFAULT_SIMPLIFICATION_ROUNDS},
    cost_function::CostFunction,
    pipeline::{RoutingOutcome, RoutingPipeline},
    render::paths_to_geojson,
    routing_query::RoutingQuery,
    types::VertexId,
};
use tracing::info;

use crate::network_file::read_network;

#[derive(Args)]
pub struct RouteArgs {
    /// Road network JSON file
    #[arg(short, long)]
    network: PathBuf,

    #[arg(short, long)]
    start: VertexId,

    #[arg(short, long)]
    end: VertexId,

    /// Number of shortest paths to compute
    #[arg(short, long, default_value_t = DEFAULT_K_PATHS)]
    k: usize,

    /// Simplification rounds before routing
    #[arg(short, long, default_value_t = DEFAULT_SIMPLIFICATION_ROUNDS)]
    rounds: usize,

    /// Cost function, e.g. "distance", "time" or "weighted_sum:1,60,0"
    #[arg(short, long, default_value_t = CostFunction::default())]
    cost_function: CostFunction,

    /// Keep every path instead of the non-dominated ones
    #[arg(long)]
    no_skyline: bool,

    /// Only return the paths accepted by Yen, without leftover candidates
    #[arg(long)]
    accepted_only: bool,

    #[arg(long)]
    parallel_spurs: bool,

    /// Output GeoJSON file
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl RouteArgs {
    fn query(&self) -> RoutingQuery {
        RoutingQuery {
            simplification_rounds: self.rounds,
            k: self.k,
            cost_function: self.cost_function,
            skyline: !self.no_skyline,
            keep_candidates: !self.accepted_only,
            parallel_spurs: self.parallel_spurs,
            ..RoutingQuery::new(self.start, self.end)
        }
    }
}

fn paths_table(outcome: &RoutingOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Vertices", "Distance (m)", "Time (min)", "Road cost"]);

    for (index, path) in outcome.paths.iter().enumerate() {
        let cost = path.evaluate();
        table.add_row(vec![
            (index + 1).to_string(),
            path.len().to_string(),
            format!("{:.1}", cost.distance()),
            format!("{:.2}", cost.time()),
            format!("{:.3}", cost.road_cost()),
        ]);
    }

    table
}

pub fn run(args: RouteArgs) -> Result<(), anyhow::Error> {
    let network = read_network(&args.network)?;
    let query = args.query();

    let outcome = RoutingPipeline::run_network(&network, &query)?;

    info!(
        "{} of {} paths kept, graph simplified to {} vertices and {} edges",
        outcome.paths.len(),
        outcome.k_paths_found,
        outcome.vertex_count,
        outcome.edge_count
    );
    if let Some(diversity) = &outcome.final_diversity {
        info!(
            "Diversity min {:.3}, max {:.3}, mean {:.3}",
            diversity.min, diversity.max, diversity.mean
        );
    }

    println!("{}", paths_table(&outcome));

    if let Some(out) = &args.out {
        let geojson = paths_to_geojson(&outcome.paths);
        fs::write(out, geojson.to_string())
            .with_context(|| format!("Cannot write {}", out.display()))?;
        info!("Wrote {} paths to {}", outcome.paths.len(), out.display());
    }

    Ok(())
}
