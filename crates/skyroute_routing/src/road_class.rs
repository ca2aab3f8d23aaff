use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Road classes taken from the OSM `highway` tag.
///
/// Each class maps to an average speed and a dimensionless penalty, lower being
/// better. Unknown or missing values fall back to [`RoadClass::Unclassified`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadClass {
    Motorway,
    MotorwayLink,
    Trunk,
    TrunkLink,
    Primary,
    PrimaryLink,
    Secondary,
    SecondaryLink,
    Tertiary,
    TertiaryLink,
    Unclassified,
    Residential,
    Service,
    LivingStreet,
}

impl RoadClass {
    pub const ALL: [RoadClass; 14] = [
        RoadClass::Motorway,
        RoadClass::MotorwayLink,
        RoadClass::Trunk,
        RoadClass::TrunkLink,
        RoadClass::Primary,
        RoadClass::PrimaryLink,
        RoadClass::Secondary,
        RoadClass::SecondaryLink,
        RoadClass::Tertiary,
        RoadClass::TertiaryLink,
        RoadClass::Unclassified,
        RoadClass::Residential,
        RoadClass::Service,
        RoadClass::LivingStreet,
    ];

    pub fn from_highway(highway: Option<&str>) -> Self {
        highway
            .and_then(|value| value.parse().ok())
            .unwrap_or(RoadClass::Unclassified)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoadClass::Motorway => "motorway",
            RoadClass::MotorwayLink => "motorway_link",
            RoadClass::Trunk => "trunk",
            RoadClass::TrunkLink => "trunk_link",
            RoadClass::Primary => "primary",
            RoadClass::PrimaryLink => "primary_link",
            RoadClass::Secondary => "secondary",
            RoadClass::SecondaryLink => "secondary_link",
            RoadClass::Tertiary => "tertiary",
            RoadClass::TertiaryLink => "tertiary_link",
            RoadClass::Unclassified => "unclassified",
            RoadClass::Residential => "residential",
            RoadClass::Service => "service",
            RoadClass::LivingStreet => "living_street",
        }
    }

    /// Average speed in km/h
    pub fn average_speed(&self) -> f64 {
        match self {
            RoadClass::Motorway => 120.0,
            RoadClass::MotorwayLink => 70.0,

            RoadClass::Trunk => 90.0,
            RoadClass::TrunkLink => 70.0,

            RoadClass::Primary => 60.0,
            RoadClass::PrimaryLink => 60.0,

            RoadClass::Secondary => 50.0,
            RoadClass::SecondaryLink => 40.0,

            RoadClass::Tertiary => 40.0,
            RoadClass::TertiaryLink => 30.0,

            RoadClass::Unclassified => 30.0,
            RoadClass::Residential => 30.0,
            RoadClass::Service => 20.0,
            RoadClass::LivingStreet => 5.0,
        }
    }

    pub fn penalty(&self) -> f64 {
        match self {
            RoadClass::Motorway => 1.0,
            RoadClass::MotorwayLink => 1.5,

            RoadClass::Trunk => 1.2,
            RoadClass::TrunkLink => 1.7,

            RoadClass::Primary => 1.5,
            RoadClass::PrimaryLink => 2.0,

            RoadClass::Secondary => 2.0,
            RoadClass::SecondaryLink => 2.5,

            RoadClass::Tertiary => 2.5,
            RoadClass::TertiaryLink => 3.0,

            RoadClass::Unclassified => 3.0,
            RoadClass::Residential => 4.0,
            RoadClass::Service => 5.0,
            RoadClass::LivingStreet => 6.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoadClass(pub String);

impl fmt::Display for UnknownRoadClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown road class {}", self.0)
    }
}

impl std::error::Error for UnknownRoadClass {}

impl FromStr for RoadClass {
    type Err = UnknownRoadClass;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        RoadClass::ALL
            .into_iter()
            .find(|class| class.as_str() == value)
            .ok_or_else(|| UnknownRoadClass(value.to_string()))
    }
}

impl fmt::Display for RoadClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
