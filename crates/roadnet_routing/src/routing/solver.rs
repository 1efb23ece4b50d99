use tracing::debug;

use crate::graph::Graph;

use super::{
    dijkstra::Dijkstra, linear_scan_dijkstra::LinearScanDijkstra, path_result::PathResult,
    routing_algorithm::RoutingAlgorithm, shortest_path_algorithm::ShortestPathAlgorithm,
};

/// Shortest path between two named points using the default algorithm.
///
/// Unknown names yield [`PathResult::unreachable`]; callers that want to tell
/// "not in the network" apart from "no route" check the graph first.
pub fn solve(graph: &impl Graph, source: &str, target: &str) -> PathResult {
    solve_with(RoutingAlgorithm::default(), graph, source, target)
}

pub fn solve_with(
    algorithm: RoutingAlgorithm,
    graph: &impl Graph,
    source: &str,
    target: &str,
) -> PathResult {
    let (Some(start), Some(end)) = (graph.node_index(source), graph.node_index(target)) else {
        debug!(source, target, "Source or target is not part of the graph");
        return PathResult::unreachable();
    };

    match algorithm {
        RoutingAlgorithm::Dijkstra => Dijkstra::new(graph).calc_path(graph, start, end),
        RoutingAlgorithm::LinearScan => LinearScanDijkstra::new(graph).calc_path(graph, start, end),
    }
}
