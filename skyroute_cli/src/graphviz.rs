use std::path::PathBuf;

use clap::Args;
use skyroute_routing::{graph_builder::GraphBuilder, types::VertexId};

use crate::network_file::read_network;

#[derive(Args)]
pub struct GraphvizArgs {
    /// Road network JSON file
    #[arg(short, long)]
    network: PathBuf,

    /// Vertex kept by the simplification
    #[arg(short, long, requires = "end")]
    start: Option<VertexId>,

    /// Vertex kept by the simplification
    #[arg(short, long, requires = "start")]
    end: Option<VertexId>,

    /// Simplification rounds, only applied with --start and --end
    #[arg(short, long, default_value_t = 0)]
    rounds: usize,
}

pub fn run(args: GraphvizArgs) -> Result<(), anyhow::Error> {
    let network = read_network(&args.network)?;
    let mut graph = GraphBuilder::build(&network)?;

    if let (Some(start), Some(end)) = (args.start, args.end) {
        graph.simplify(start, end, args.rounds)?;
    }

    print!("{}", graph.to_graphviz());

    Ok(())
}
