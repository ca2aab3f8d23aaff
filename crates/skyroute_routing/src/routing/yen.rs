use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{
    error::Result,
    graph::Graph,
    graph_edit::GraphEdit,
    routing::{dijkstra::Dijkstra, path::Path, shortest_path_algorithm::ShortestPathAlgorithm},
    types::VertexId,
    weighting::{Weight, Weighting},
};

/// https://en.wikipedia.org/wiki/Yen%27s_algorithm

struct Candidate {
    path: Path,
    weight: Weight,
    distance: f64,
}

impl Candidate {
    fn new(path: Path, weighting: &impl Weighting) -> Self {
        Candidate {
            weight: path.weight(weighting),
            distance: path.distance(),
            path,
        }
    }
}

/// Loopless alternative paths between two vertices, cheapest first.
///
/// Each alternative leaves an already accepted path at a spur vertex. The spur
/// searches run on the graph with the edges of the accepted paths sharing the
/// root removed, along with the root vertices. Those removals are undone after
/// every search.
pub struct YenKShortestPaths<A = Dijkstra> {
    algorithm: A,
    keep_candidates: bool,
    parallel_spurs: bool,
}

impl Default for YenKShortestPaths<Dijkstra> {
    fn default() -> Self {
        YenKShortestPaths::with_algorithm(Dijkstra::new())
    }
}

impl YenKShortestPaths<Dijkstra> {
    pub fn new() -> Self {
        YenKShortestPaths::default()
    }
}

impl<A> YenKShortestPaths<A>
where
    A: ShortestPathAlgorithm + Default,
{
    pub fn with_algorithm(algorithm: A) -> Self {
        YenKShortestPaths {
            algorithm,
            keep_candidates: true,
            parallel_spurs: false,
        }
    }

    /// Whether the candidates left over once `k` paths are accepted are
    /// returned after the accepted paths. Enabled by default.
    pub fn keep_candidates(mut self, keep_candidates: bool) -> Self {
        self.keep_candidates = keep_candidates;
        self
    }

    /// Runs the spur searches of an iteration in parallel, each on its own copy
    /// of the graph. The result does not change.
    pub fn parallel_spurs(mut self, parallel_spurs: bool) -> Self {
        self.parallel_spurs = parallel_spurs;
        self
    }

    /// Up to `k` accepted paths sorted by weight, followed by the remaining
    /// candidates when they are kept. The graph is left as it was given.
    pub fn find_paths<W>(
        &mut self,
        graph: &mut Graph,
        weighting: &W,
        start: VertexId,
        end: VertexId,
        k: usize,
    ) -> Result<Vec<Path>>
    where
        W: Weighting + Sync,
    {
        if k == 0 {
            return Ok(Vec::new());
        }

        let first = self.algorithm.calc_path(graph, weighting, start, end)?;
        let mut accepted = vec![first];
        let mut candidates: Vec<Candidate> = Vec::new();

        while accepted.len() < k {
            let spur_paths = if self.parallel_spurs {
                Self::parallel_spur_paths(graph, weighting, &accepted, end)?
            } else {
                self.sequential_spur_paths(graph, weighting, &accepted, end)?
            };

            for path in spur_paths.into_iter().flatten() {
                let known = accepted.iter().any(|other| other.same_vertices(&path))
                    || candidates
                        .iter()
                        .any(|candidate| candidate.path.same_vertices(&path));

                if !known {
                    candidates.push(Candidate::new(path, weighting));
                }
            }

            debug!(
                "Yen iteration {}: {} candidates",
                accepted.len(),
                candidates.len()
            );

            if candidates.is_empty() {
                break;
            }

            candidates.sort_by(|a, b| {
                a.weight
                    .total_cmp(&b.weight)
                    .then_with(|| a.distance.total_cmp(&b.distance))
            });

            let best = candidates.remove(0);
            accepted.push(best.path);
        }

        debug!(
            "Yen {} -> {}: {} paths accepted, {} candidates left",
            start,
            end,
            accepted.len(),
            candidates.len()
        );

        if self.keep_candidates {
            accepted.extend(candidates.into_iter().map(|candidate| candidate.path));
        }

        Ok(accepted)
    }

    fn sequential_spur_paths<W: Weighting>(
        &mut self,
        graph: &mut Graph,
        weighting: &W,
        accepted: &[Path],
        end: VertexId,
    ) -> Result<Vec<Option<Path>>> {
        let Some(previous) = accepted.last() else {
            return Ok(Vec::new());
        };

        let mut spur_paths = Vec::with_capacity(previous.len());
        for spur_index in 0..previous.len().saturating_sub(1) {
            spur_paths.push(Self::spur_path(
                &mut self.algorithm,
                graph,
                weighting,
                accepted,
                spur_index,
                end,
            )?);
        }

        Ok(spur_paths)
    }

    fn parallel_spur_paths<W: Weighting + Sync>(
        graph: &Graph,
        weighting: &W,
        accepted: &[Path],
        end: VertexId,
    ) -> Result<Vec<Option<Path>>> {
        let Some(previous) = accepted.last() else {
            return Ok(Vec::new());
        };

        (0..previous.len().saturating_sub(1))
            .into_par_iter()
            .map(|spur_index| {
                let mut graph = graph.clone();
                let mut algorithm = A::default();
                Self::spur_path(
                    &mut algorithm,
                    &mut graph,
                    weighting,
                    accepted,
                    spur_index,
                    end,
                )
            })
            .collect()
    }

    /// The alternative leaving the last accepted path at `spur_index`, if any.
    fn spur_path<W: Weighting>(
        algorithm: &mut A,
        graph: &mut Graph,
        weighting: &W,
        accepted: &[Path],
        spur_index: usize,
        end: VertexId,
    ) -> Result<Option<Path>> {
        let Some(previous) = accepted.last() else {
            return Ok(None);
        };

        let root = previous.slice(0, spur_index + 1);
        let spur_vertex = previous.items()[spur_index].vertex();

        let mut edit = GraphEdit::new(graph);

        for path in accepted {
            if path.len() > spur_index + 1 && path.starts_with(&root) {
                let items = path.items();
                edit.remove_edges_between(
                    items[spur_index].vertex(),
                    items[spur_index + 1].vertex(),
                )?;
            }
        }

        for vertex in root.vertices().take(spur_index) {
            edit.remove_vertex(vertex)?;
        }

        match algorithm.calc_path(edit.graph(), weighting, spur_vertex, end) {
            Ok(spur) => Ok(Some(root.join(&spur)?)),
            Err(err) if err.is_no_path() => {
                trace!("No spur path from {}: {}", spur_vertex, err);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
