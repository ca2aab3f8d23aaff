use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use skyroute_routing::road_network::RoadNetwork;
use tracing::info;

pub fn read_network(path: &Path) -> anyhow::Result<RoadNetwork> {
    let file = File::open(path)
        .with_context(|| format!("Cannot open road network {}", path.display()))?;
    let reader = BufReader::new(file);
    let network: RoadNetwork = serde_json::from_reader(reader)
        .with_context(|| format!("Invalid road network {}", path.display()))?;

    info!(
        "Loaded {} nodes and {} ways from {}",
        network.nodes.len(),
        network.ways.len(),
        path.display()
    );

    Ok(network)
}
