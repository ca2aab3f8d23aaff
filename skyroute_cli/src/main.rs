use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{graphviz::GraphvizArgs, route::RouteArgs};

mod graphviz;
mod network_file;
mod route;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Computes alternative routes between two vertices of a road network
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Prints the (optionally simplified) road graph in dot format
    Graphviz {
        #[command(flatten)]
        args: GraphvizArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Route { args }) => route::run(args)?,
        Some(Commands::Graphviz { args }) => graphviz::run(args)?,
        None => {}
    }

    Ok(())
}
