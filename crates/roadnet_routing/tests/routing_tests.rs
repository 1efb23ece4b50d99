mod test_utils;

use roadnet_routing::{
    distance::Distance,
    distance_matrix::DistanceMatrix,
    graph::Graph,
    graph_builder::build_graph,
    node_id::NodeId,
    road_graph::RoadGraph,
    routing::{
        path_result::PathResult,
        routing_algorithm::RoutingAlgorithm,
        solver::{solve, solve_with},
    },
};

use crate::test_utils::{ROMANIA_CITIES, romania_records, romania_records_with_closed};

const ALGORITHMS: [RoutingAlgorithm; 2] =
    [RoutingAlgorithm::Dijkstra, RoutingAlgorithm::LinearScan];

fn names(result: &PathResult) -> Vec<&str> {
    result.path().iter().map(NodeId::as_str).collect()
}

/// Sum of the cheapest edge between each consecutive pair of the path.
fn walked_distance(graph: &RoadGraph, result: &PathResult) -> Distance {
    result
        .path()
        .windows(2)
        .map(|pair| {
            graph
                .edges_from(pair[0].as_str())
                .unwrap()
                .filter(|(to, _)| **to == pair[1])
                .map(|(_, weight)| weight)
                .min()
                .unwrap()
        })
        .sum()
}

#[test]
fn test_oradea_to_bucharest() {
    let graph = build_graph(&romania_records());

    for algorithm in ALGORITHMS {
        let result = solve_with(algorithm, &graph, "Oradea", "Bucharest");

        assert_eq!(result.distance(), Distance::new(429.0));
        assert_eq!(
            names(&result),
            vec!["Oradea", "Sibiu", "Rimnicu Vilcea", "Pitesti", "Bucharest"]
        );
    }
}

#[test]
fn test_iasi_to_timisoara() {
    let graph = build_graph(&romania_records());

    for algorithm in ALGORITHMS {
        let result = solve_with(algorithm, &graph, "Iasi", "Timisoara");
        assert_eq!(result.distance(), Distance::new(855.0));
    }
}

#[test]
fn test_closed_segment_forces_detour() {
    let graph = build_graph(&romania_records_with_closed(&[("Rimnicu Vilcea", "Pitesti")]));

    let result = solve(&graph, "Arad", "Bucharest");

    assert_eq!(result.distance(), Distance::new(450.0));
    assert_eq!(names(&result), vec!["Arad", "Sibiu", "Fagaras", "Bucharest"]);
}

#[test]
fn test_closing_only_bridge_disconnects() {
    let graph = build_graph(&romania_records_with_closed(&[("Iasi", "Neamt")]));

    assert!(!graph.contains_node("Neamt"));
    assert_eq!(solve(&graph, "Iasi", "Neamt"), PathResult::unreachable());
}

#[test]
fn test_algorithms_agree_on_every_pair() {
    let graph = build_graph(&romania_records());

    for source in ROMANIA_CITIES {
        for target in ROMANIA_CITIES {
            let heap = solve_with(RoutingAlgorithm::Dijkstra, &graph, source, target);
            let scan = solve_with(RoutingAlgorithm::LinearScan, &graph, source, target);

            assert_eq!(heap.distance(), scan.distance(), "{source} -> {target}");
            assert!(heap.is_found());
            assert_eq!(heap.source(), Some(&NodeId::from(source)));
            assert_eq!(heap.target(), Some(&NodeId::from(target)));
            assert_eq!(walked_distance(&graph, &heap), heap.distance());
            assert_eq!(walked_distance(&graph, &scan), scan.distance());
        }
    }
}

#[test]
fn test_identity_queries() {
    let graph = build_graph(&romania_records());

    for city in ROMANIA_CITIES {
        let result = solve(&graph, city, city);

        assert_eq!(result.path(), &[NodeId::from(city)]);
        assert_eq!(result.distance(), Distance::ZERO);
    }
}

#[test]
fn test_symmetry_of_built_graph() {
    let graph = build_graph(&romania_records());

    assert_eq!(graph.node_count(), ROMANIA_CITIES.len());
    assert_eq!(graph.edge_count(), 2 * test_utils::romania_segments().len());

    for (start, end, distance) in test_utils::romania_segments() {
        let forward = graph
            .edges_from(start)
            .unwrap()
            .any(|(to, weight)| *to == end && weight == Distance::new(distance));
        let backward = graph
            .edges_from(end)
            .unwrap()
            .any(|(to, weight)| *to == start && weight == Distance::new(distance));

        assert!(forward && backward, "{start} <-> {end}");
    }
}

#[test]
fn test_matrix_matches_single_queries() {
    let graph = build_graph(&romania_records());
    let points: Vec<NodeId> = ROMANIA_CITIES.iter().map(|&city| NodeId::from(city)).collect();

    let matrix = DistanceMatrix::compute(&graph, &points);

    for source in ROMANIA_CITIES {
        for target in ROMANIA_CITIES {
            assert_eq!(
                matrix.distance(source, target),
                Some(solve(&graph, source, target).distance())
            );
        }
    }
}
