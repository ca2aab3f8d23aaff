pub mod dijkstra;
pub mod path;
pub mod priority_queue;
pub mod shortest_path_algorithm;
pub mod yen;
