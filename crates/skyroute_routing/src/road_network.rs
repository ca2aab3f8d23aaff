use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{geopoint::GeoPoint, road_class::RoadClass, types::VertexId};

static ONEWAYS: [&str; 4] = ["yes", "true", "1", "-1"];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadNode {
    pub id: VertexId,
    pub lat: f64,
    pub lng: f64,
}

impl RoadNode {
    pub fn new(id: VertexId, lat: f64, lng: f64) -> Self {
        RoadNode { id, lat, lng }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadWay {
    #[serde(alias = "nodeIds")]
    pub node_ids: Vec<VertexId>,
    #[serde(default)]
    pub tags: FxHashMap<String, String>,
}

impl RoadWay {
    pub fn new(node_ids: Vec<VertexId>) -> Self {
        RoadWay {
            node_ids,
            tags: FxHashMap::default(),
        }
    }

    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(key.to_string(), value.to_string());
        self
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(|value| value.as_str())
    }

    pub fn has_tag(&self, key: &str, value: &str) -> bool {
        self.tag(key).is_some_and(|tag_value| tag_value == value)
    }

    // https://wiki.openstreetmap.org/wiki/Key:oneway
    // https://wiki.openstreetmap.org/wiki/Key:junction
    pub fn is_oneway(&self) -> bool {
        self.tag("oneway")
            .is_some_and(|value| ONEWAYS.contains(&value))
            || self.has_tag("junction", "roundabout")
            || self.has_tag("junction", "circular")
    }

    /// One-way against the order of the node ids.
    pub fn is_reverse_oneway(&self) -> bool {
        self.has_tag("oneway", "-1")
    }

    pub fn road_class(&self) -> RoadClass {
        RoadClass::from_highway(self.tag("highway"))
    }
}

/// The raw input of a routing request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadNetwork {
    pub nodes: Vec<RoadNode>,
    pub ways: Vec<RoadWay>,
}

impl RoadNetwork {
    pub fn new(nodes: Vec<RoadNode>, ways: Vec<RoadWay>) -> Self {
        RoadNetwork { nodes, ways }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oneway_values() {
        for value in ["yes", "true", "1", "-1"] {
            assert!(RoadWay::new(vec![1, 2]).with_tag("oneway", value).is_oneway());
        }

        assert!(!RoadWay::new(vec![1, 2]).with_tag("oneway", "no").is_oneway());
        assert!(!RoadWay::new(vec![1, 2]).is_oneway());
    }

    #[test]
    fn roundabout_is_oneway() {
        let way = RoadWay::new(vec![1, 2, 3, 1]).with_tag("junction", "roundabout");

        assert!(way.is_oneway());
        assert!(!way.is_reverse_oneway());
    }

    #[test]
    fn reverse_oneway() {
        let way = RoadWay::new(vec![1, 2]).with_tag("oneway", "-1");

        assert!(way.is_oneway());
        assert!(way.is_reverse_oneway());
    }

    #[test]
    fn missing_highway_is_unclassified() {
        assert_eq!(RoadWay::new(vec![1, 2]).road_class(), RoadClass::Unclassified);
        assert_eq!(
            RoadWay::new(vec![1, 2])
                .with_tag("highway", "motorway")
                .road_class(),
            RoadClass::Motorway
        );
    }

    #[test]
    fn deserialize_network() {
        let json = r#"{
            "nodes": [{"id": 1, "lat": 50.0, "lng": 4.0}, {"id": 2, "lat": 50.1, "lng": 4.1}],
            "ways": [{"nodeIds": [1, 2], "tags": {"highway": "primary", "oneway": "yes"}}]
        }"#;

        let network: RoadNetwork = serde_json::from_str(json).unwrap();

        assert_eq!(network.nodes.len(), 2);
        assert_eq!(network.ways[0].node_ids, vec![1, 2]);
        assert!(network.ways[0].is_oneway());
        assert_eq!(network.ways[0].road_class(), RoadClass::Primary);
    }
}
