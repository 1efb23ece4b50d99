use std::fmt;

use crate::{
    constants::DISTANCE_UNIT,
    graph_builder::build_graph,
    node_id::NodeId,
    routing::{path_result::PathResult, routing_algorithm::RoutingAlgorithm, solver::solve_with},
    segment_record::SegmentRecord,
};

/// What a user sees after asking for a route between two points.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    NoRecords,
    MissingSelection,
    SamePoint,
    NotConnected,
    NoPath { start: NodeId, end: NodeId },
    Found(PathResult),
}

impl RouteOutcome {
    pub fn path_result(&self) -> Option<&PathResult> {
        match self {
            RouteOutcome::Found(result) => Some(result),
            _ => None,
        }
    }
}

impl fmt::Display for RouteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteOutcome::NoRecords => write!(f, "No road segments loaded."),
            RouteOutcome::MissingSelection => write!(f, "Please select both points."),
            RouteOutcome::SamePoint => write!(f, "Start and end points are the same!"),
            RouteOutcome::NotConnected => write!(
                f,
                "One or both selected points are not connected in the road network."
            ),
            RouteOutcome::NoPath { start, end } => {
                write!(f, "No available path found between {start} and {end}!")
            }
            RouteOutcome::Found(result) => write!(
                f,
                "Shortest Path: {} (Distance: {} {})",
                result,
                result.distance(),
                DISTANCE_UNIT
            ),
        }
    }
}

/// Runs the checks a route request goes through, in order, then the search.
///
/// The graph is rebuilt from `records` on every call.
pub fn evaluate_route(
    records: &[SegmentRecord],
    start: &str,
    end: &str,
    algorithm: RoutingAlgorithm,
) -> RouteOutcome {
    if records.is_empty() {
        return RouteOutcome::NoRecords;
    }

    if start.is_empty() || end.is_empty() {
        return RouteOutcome::MissingSelection;
    }

    if start == end {
        return RouteOutcome::SamePoint;
    }

    let graph = build_graph(records);

    if !graph.contains_node(start) || !graph.contains_node(end) {
        return RouteOutcome::NotConnected;
    }

    let result = solve_with(algorithm, &graph, start, end);

    if result.distance().is_infinite() {
        RouteOutcome::NoPath {
            start: NodeId::from(start),
            end: NodeId::from(end),
        }
    } else {
        RouteOutcome::Found(result)
    }
}
