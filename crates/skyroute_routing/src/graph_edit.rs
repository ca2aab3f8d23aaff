use tracing::error;

use crate::{
    edge_cost::EdgeCost,
    error::Result,
    graph::{Graph, RemovedVertex},
    types::VertexId,
};

enum Removal {
    Edges {
        from: VertexId,
        to: VertexId,
        costs: Vec<EdgeCost>,
    },
    Vertex(RemovedVertex),
}

/// Temporary removals on a graph, undone in reverse order when dropped.
///
/// Routing code borrows the graph through the edit so that every removal is
/// recorded. The graph is read through [`GraphEdit::graph`] while the edit is alive.
pub struct GraphEdit<'a> {
    graph: &'a mut Graph,
    journal: Vec<Removal>,
}

impl<'a> GraphEdit<'a> {
    pub fn new(graph: &'a mut Graph) -> Self {
        GraphEdit {
            graph,
            journal: Vec::new(),
        }
    }

    pub fn graph(&self) -> &Graph {
        self.graph
    }

    /// Number of removals that will be undone on drop.
    pub fn len(&self) -> usize {
        self.journal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.journal.is_empty()
    }

    pub fn remove_edges_between(&mut self, from: VertexId, to: VertexId) -> Result<usize> {
        let costs = self.graph.remove_edges_between(from, to)?;
        let removed = costs.len();
        if removed > 0 {
            self.journal.push(Removal::Edges { from, to, costs });
        }

        Ok(removed)
    }

    pub fn remove_vertex(&mut self, id: VertexId) -> Result<()> {
        let removed = self.graph.remove_vertex(id)?;
        self.journal.push(Removal::Vertex(removed));

        Ok(())
    }

    fn restore(graph: &mut Graph, removal: Removal) -> Result<()> {
        match removal {
            Removal::Edges { from, to, costs } => {
                for cost in costs {
                    graph.add_edge(from, to, cost)?;
                }
                Ok(())
            }
            Removal::Vertex(removed) => graph.restore_vertex(removed),
        }
    }
}

impl Drop for GraphEdit<'_> {
    fn drop(&mut self) {
        while let Some(removal) = self.journal.pop() {
            if let Err(err) = Self::restore(self.graph, removal) {
                error!("Failed to restore graph edit: {}", err);
            }
        }
    }
}
