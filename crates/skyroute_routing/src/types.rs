/// Identifier of a road node, taken verbatim from the map data.
pub type VertexId = i64;
