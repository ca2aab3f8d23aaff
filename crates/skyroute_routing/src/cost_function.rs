use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{edge_cost::EdgeCost, graph::Graph};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown cost function {0}")]
pub struct UnknownCostFunction(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostWeights {
    pub distance: f64,
    pub time: f64,
    pub road_cost: f64,
}

impl CostWeights {
    pub fn new(distance: f64, time: f64, road_cost: f64) -> Self {
        CostWeights {
            distance,
            time,
            road_cost,
        }
    }
}

/// Graph-wide maximum of each cost component. Mixing components with
/// different units only makes sense once every component is brought to the
/// same range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostScale {
    pub distance: f64,
    pub time: f64,
    pub road_cost: f64,
}

impl CostScale {
    pub const UNIT: CostScale = CostScale {
        distance: 1.0,
        time: 1.0,
        road_cost: 1.0,
    };

    pub fn from_graph(graph: &Graph) -> Self {
        let max = graph.max_edge_cost();
        let or_unit = |value: f64| if value > 0.0 { value } else { 1.0 };

        CostScale {
            distance: or_unit(max.distance()),
            time: or_unit(max.time()),
            road_cost: or_unit(max.road_cost()),
        }
    }

    pub fn normalize(&self, cost: &EdgeCost) -> [f64; 3] {
        [
            cost.distance() / self.distance,
            cost.time() / self.time,
            cost.road_cost() / self.road_cost,
        ]
    }
}

impl Default for CostScale {
    fn default() -> Self {
        CostScale::UNIT
    }
}

/// Named ways of turning an [`EdgeCost`] into the single value a shortest path
/// search minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostFunction {
    Distance,
    Time,
    /// Road penalty times distance
    RoadType,
    #[default]
    ArithmeticMean,
    GeometricMean,
    Minimum,
    Maximum,
    /// √(time + distance)
    SqrtPlus,
    /// √(time × distance)
    SqrtMultiply,
    WeightedSum(CostWeights),
}

impl CostFunction {
    pub const NAMED: [CostFunction; 9] = [
        CostFunction::Distance,
        CostFunction::Time,
        CostFunction::RoadType,
        CostFunction::ArithmeticMean,
        CostFunction::GeometricMean,
        CostFunction::Minimum,
        CostFunction::Maximum,
        CostFunction::SqrtPlus,
        CostFunction::SqrtMultiply,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CostFunction::Distance => "distance",
            CostFunction::Time => "time",
            CostFunction::RoadType => "road_type",
            CostFunction::ArithmeticMean => "arithmetic_mean",
            CostFunction::GeometricMean => "geometric_mean",
            CostFunction::Minimum => "minimum",
            CostFunction::Maximum => "maximum",
            CostFunction::SqrtPlus => "sqrt_plus",
            CostFunction::SqrtMultiply => "sqrt_multiply",
            CostFunction::WeightedSum(_) => "weighted_sum",
        }
    }

    /// Whether the weight of a merged edge equals the sum of the weights of
    /// the edges it replaces. Graph simplification keeps shortest paths only
    /// for these functions.
    pub fn is_additive(&self) -> bool {
        match self {
            CostFunction::Distance | CostFunction::Time | CostFunction::RoadType => true,
            CostFunction::WeightedSum(weights) => weights.road_cost == 0.0,
            _ => false,
        }
    }

    /// Whether the function works on normalized components.
    pub fn is_normalized(&self) -> bool {
        matches!(
            self,
            CostFunction::ArithmeticMean
                | CostFunction::GeometricMean
                | CostFunction::Minimum
                | CostFunction::Maximum
                | CostFunction::WeightedSum(_)
        )
    }

    pub fn apply(&self, cost: &EdgeCost, scale: &CostScale) -> f64 {
        let normalized = || scale.normalize(cost);

        match self {
            CostFunction::Distance => cost.distance(),
            CostFunction::Time => cost.time(),
            CostFunction::RoadType => cost.road_cost() * cost.distance(),
            CostFunction::ArithmeticMean => {
                let components = normalized();
                components.iter().sum::<f64>() / components.len() as f64
            }
            CostFunction::GeometricMean => {
                let components = normalized();
                components
                    .iter()
                    .product::<f64>()
                    .powf(1.0 / components.len() as f64)
            }
            CostFunction::Minimum => normalized().into_iter().fold(f64::INFINITY, f64::min),
            CostFunction::Maximum => normalized().into_iter().fold(0.0, f64::max),
            CostFunction::SqrtPlus => (cost.time() + cost.distance()).sqrt(),
            CostFunction::SqrtMultiply => (cost.time() * cost.distance()).sqrt(),
            CostFunction::WeightedSum(weights) => {
                let [distance, time, road_cost] = normalized();
                weights.distance * distance + weights.time * time + weights.road_cost * road_cost
            }
        }
    }
}

impl FromStr for CostFunction {
    type Err = UnknownCostFunction;

    /// Accepts the snake case names, their camel case spelling, and
    /// `weighted_sum:<distance>,<time>,<road_cost>`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let unknown = || UnknownCostFunction(value.to_string());

        if let Some(weights) = value.strip_prefix("weighted_sum:") {
            let parsed: Vec<f64> = weights
                .split(',')
                .map(|weight| weight.trim().parse::<f64>())
                .collect::<Result<_, _>>()
                .map_err(|_| unknown())?;

            return match parsed.as_slice() {
                [distance, time, road_cost]
                    if parsed.iter().all(|weight| weight.is_finite() && *weight >= 0.0) =>
                {
                    Ok(CostFunction::WeightedSum(CostWeights::new(
                        *distance, *time, *road_cost,
                    )))
                }
                _ => Err(unknown()),
            };
        }

        let snake_case = match value {
            "roadType" => "road_type",
            "arithmeticMean" => "arithmetic_mean",
            "geometricMean" => "geometric_mean",
            "sqrtPlus" => "sqrt_plus",
            "sqrtMultiply" => "sqrt_multiply",
            other => other,
        };

        CostFunction::NAMED
            .into_iter()
            .find(|function| function.name() == snake_case)
            .ok_or_else(unknown)
    }
}

impl fmt::Display for CostFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostFunction::WeightedSum(weights) => write!(
                f,
                "weighted_sum:{},{},{}",
                weights.distance, weights.time, weights.road_cost
            ),
            other => f.write_str(other.name()),
        }
    }
}
