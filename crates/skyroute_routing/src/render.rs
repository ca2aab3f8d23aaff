use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use serde_json::json;

use crate::routing::path::Path;

pub fn path_feature(path: &Path, name: &str) -> Feature {
    let cost = path.evaluate();

    let mut properties = JsonObject::new();
    properties.insert("name".to_string(), json!(name));
    properties.insert(
        "costs".to_string(),
        json!({
            "distance": cost.distance(),
            "time": cost.time(),
            "road_cost": cost.road_cost(),
        }),
    );
    properties.insert("vertices".to_string(), json!(path.vertex_ids()));

    Feature {
        bbox: None,
        id: None,
        properties: Some(properties),
        foreign_members: None,
        geometry: Some(Geometry::new(Value::from(&path.line_string()))),
    }
}

/// One `LineString` feature per path, named `Computed path #<index>`.
pub fn paths_to_geojson(paths: &[Path]) -> GeoJson {
    let features = paths
        .iter()
        .enumerate()
        .map(|(index, path)| path_feature(path, &format!("Computed path #{}", index)))
        .collect();

    GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        foreign_members: None,
        features,
    })
}
