pub mod constants;
pub mod distance;
pub mod distance_matrix;
pub mod graph;
pub mod graph_builder;
pub mod newtype_index;
pub mod node_id;
pub mod points;
pub mod road_graph;
pub mod route_query;
pub mod routing;
pub mod segment_record;
pub mod stopwatch;
