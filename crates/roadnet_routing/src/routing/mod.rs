pub mod dijkstra;
pub mod linear_scan_dijkstra;
pub(crate) mod path_builder;
pub mod path_result;
pub mod routing_algorithm;
pub mod shortest_path_algorithm;
pub mod solver;
