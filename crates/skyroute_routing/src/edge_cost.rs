use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    constants::SECONDS_IN_MINUTE,
    error::{Result, RoutingError},
    road_class::RoadClass,
};

/// Cost of travelling along an edge or a whole path.
///
/// `distance` is in meters and `time` in minutes, both additive along a path.
/// `road_cost` is a penalty per unit of distance: combining costs averages it,
/// weighted by the distance each part covers.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EdgeCostFields")]
pub struct EdgeCost {
    distance: f64,
    time: f64,
    road_cost: f64,
}

#[derive(Deserialize)]
struct EdgeCostFields {
    distance: f64,
    time: f64,
    road_cost: f64,
}

impl TryFrom<EdgeCostFields> for EdgeCost {
    type Error = RoutingError;

    fn try_from(fields: EdgeCostFields) -> Result<Self> {
        EdgeCost::try_new(fields.distance, fields.time, fields.road_cost)
    }
}

/// Outcome of comparing two costs with [`EdgeCost::dominator`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Dominance {
    First,
    Second,
}

impl EdgeCost {
    pub const ZERO: EdgeCost = EdgeCost {
        distance: 0.0,
        time: 0.0,
        road_cost: 0.0,
    };

    pub const COMPONENT_NAMES: [&'static str; 3] = ["distance", "time", "road_cost"];

    /// Builds a cost from trusted components. Negative components are a bug in
    /// the caller; use [`EdgeCost::try_new`] for external input.
    pub fn new(distance: f64, time: f64, road_cost: f64) -> Self {
        debug_assert!(
            distance >= 0.0 && time >= 0.0 && road_cost >= 0.0,
            "edge cost components must be non-negative"
        );
        EdgeCost {
            distance,
            time,
            road_cost,
        }
    }

    pub fn try_new(distance: f64, time: f64, road_cost: f64) -> Result<Self> {
        for (component, value) in Self::COMPONENT_NAMES
            .into_iter()
            .zip([distance, time, road_cost])
        {
            if !value.is_finite() || value < 0.0 {
                return Err(RoutingError::InvalidCost { component, value });
            }
        }

        Ok(EdgeCost {
            distance,
            time,
            road_cost,
        })
    }

    /// Cost of driving `distance` meters on a road of the given class.
    pub fn for_road(distance: f64, road_class: RoadClass) -> Self {
        let speed_meters_per_second = road_class.average_speed() / 3.6;
        let minutes = distance / speed_meters_per_second / SECONDS_IN_MINUTE;

        EdgeCost::new(distance, minutes, road_class.penalty())
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn road_cost(&self) -> f64 {
        self.road_cost
    }

    pub fn components(&self) -> [f64; 3] {
        [self.distance, self.time, self.road_cost]
    }

    pub fn sum(&self) -> f64 {
        self.distance + self.time + self.road_cost
    }

    /// Combines the costs of consecutive edges into the cost of the whole
    /// stretch. Without any input the result is [`EdgeCost::ZERO`].
    ///
    /// When every input covers zero distance there is nothing to weight the
    /// road cost by, and the plain mean of the road costs is used instead.
    pub fn combine<'a, I>(costs: I) -> EdgeCost
    where
        I: IntoIterator<Item = &'a EdgeCost>,
    {
        let mut distance = 0.0;
        let mut time = 0.0;
        let mut weighted_road_cost = 0.0;
        let mut road_cost_sum = 0.0;
        let mut count = 0usize;

        for cost in costs {
            distance += cost.distance;
            time += cost.time;
            weighted_road_cost += cost.road_cost * cost.distance;
            road_cost_sum += cost.road_cost;
            count += 1;
        }

        let road_cost = if distance > 0.0 {
            weighted_road_cost / distance
        } else if count > 0 {
            road_cost_sum / count as f64
        } else {
            0.0
        };

        EdgeCost {
            distance,
            time,
            road_cost,
        }
    }

    pub fn combined_with(&self, other: &EdgeCost) -> EdgeCost {
        EdgeCost::combine([self, other])
    }

    /// Pareto dominance: no component of `self` is worse than the matching
    /// component of `other`, and the component sum is strictly smaller.
    pub fn dominates(&self, other: &EdgeCost) -> bool {
        self.sum() < other.sum()
            && self
                .components()
                .iter()
                .zip(other.components().iter())
                .all(|(mine, theirs)| mine <= theirs)
    }

    pub fn dominator(first: &EdgeCost, second: &EdgeCost) -> Option<Dominance> {
        if first.dominates(second) {
            Some(Dominance::First)
        } else if second.dominates(first) {
            Some(Dominance::Second)
        } else {
            None
        }
    }

    pub fn reduce<F>(&self, scalarize: F) -> f64
    where
        F: FnOnce(&EdgeCost) -> f64,
    {
        scalarize(self)
    }
}

impl Default for EdgeCost {
    fn default() -> Self {
        EdgeCost::ZERO
    }
}

impl fmt::Display for EdgeCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1} m, {:.2} min, road cost {:.2}",
            self.distance, self.time, self.road_cost
        )
    }
}
