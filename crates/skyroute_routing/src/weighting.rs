use crate::{
    cost_function::{CostFunction, CostScale},
    edge_cost::EdgeCost,
    graph::Graph,
};

pub type Weight = f64;

pub trait Weighting {
    /// Non-negative weight of an edge. Edges with a non-finite weight are not
    /// traversed.
    fn calc_edge_weight(&self, cost: &EdgeCost) -> Weight;
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostWeighting {
    function: CostFunction,
    scale: CostScale,
}

impl CostWeighting {
    pub fn new(function: CostFunction) -> Self {
        CostWeighting {
            function,
            scale: CostScale::UNIT,
        }
    }

    pub fn with_scale(function: CostFunction, scale: CostScale) -> Self {
        CostWeighting { function, scale }
    }

    /// Normalizes components by the maxima of `graph` when the function
    /// needs it.
    pub fn for_graph(function: CostFunction, graph: &Graph) -> Self {
        let scale = if function.is_normalized() {
            CostScale::from_graph(graph)
        } else {
            CostScale::UNIT
        };

        CostWeighting { function, scale }
    }

    pub fn function(&self) -> CostFunction {
        self.function
    }

    pub fn scale(&self) -> &CostScale {
        &self.scale
    }
}

impl Weighting for CostWeighting {
    #[inline(always)]
    fn calc_edge_weight(&self, cost: &EdgeCost) -> Weight {
        cost.reduce(|cost| self.function.apply(cost, &self.scale))
    }
}
