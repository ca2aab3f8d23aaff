use fxhash::FxHashSet;
use serde::Serialize;

use crate::{routing::path::Path, types::VertexId};

/// Share of `path` that does not follow `reference`: the distance driven on
/// edges absent from `reference`, relative to the length of `reference`,
/// capped at 1.
pub fn path_diversity(reference: &Path, path: &Path) -> f64 {
    let shared: FxHashSet<(VertexId, VertexId)> =
        reference.edges().map(|(from, to, _)| (from, to)).collect();

    let not_shared: f64 = path
        .edges()
        .filter(|(from, to, _)| !shared.contains(&(*from, *to)))
        .map(|(_, _, cost)| cost.distance())
        .sum();

    let reference_distance = reference.distance();
    if reference_distance <= 0.0 {
        return if not_shared > 0.0 { 1.0 } else { 0.0 };
    }

    (not_shared / reference_distance).min(1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiversityStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl DiversityStats {
    /// Diversity of every path after the first one, measured against the
    /// first. `None` when there is no alternative.
    pub fn from_paths(paths: &[Path]) -> Option<DiversityStats> {
        let (reference, alternatives) = paths.split_first()?;
        if alternatives.is_empty() {
            return None;
        }

        let diversities: Vec<f64> = alternatives
            .iter()
            .map(|path| path_diversity(reference, path))
            .collect();

        Some(DiversityStats {
            min: diversities.iter().copied().fold(f64::INFINITY, f64::min),
            max: diversities.iter().copied().fold(0.0, f64::max),
            mean: diversities.iter().sum::<f64>() / diversities.len() as f64,
        })
    }
}
