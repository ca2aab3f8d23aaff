pub mod constants;
pub mod cost_function;
pub mod diversity;
pub mod edge_cost;
pub mod error;
pub mod geopoint;
pub mod graph;
pub mod graph_builder;
pub mod graph_edit;
pub mod graph_simplifier;
pub mod pipeline;
pub mod render;
pub mod road_class;
pub mod road_network;
pub mod routing;
pub mod routing_query;
pub mod skyline;
pub mod stopwatch;
pub mod types;
pub mod vertex;
pub mod weighting;

mod test_graph_utils;
