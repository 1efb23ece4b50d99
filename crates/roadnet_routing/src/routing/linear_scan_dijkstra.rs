use tracing::debug;

use crate::{
    distance::Distance,
    graph::{Graph, NodeIndex},
    stopwatch::Stopwatch,
};

use super::{
    path_builder::build_path,
    path_result::PathResult,
    shortest_path_algorithm::{SearchStats, ShortestPathAlgorithm},
};

/// Dijkstra selecting the next node by scanning every unvisited node.
///
/// O(V²), kept for tiny networks where a heap does not pay off. Use
/// [`super::dijkstra::Dijkstra`] for anything larger.
#[derive(Default)]
pub struct LinearScanDijkstra {
    weights: Vec<Distance>,
    parents: Vec<Option<NodeIndex>>,
    visited: Vec<bool>,
}

impl LinearScanDijkstra {
    pub fn new(graph: &impl Graph) -> Self {
        LinearScanDijkstra {
            weights: Vec::with_capacity(graph.node_count()),
            parents: Vec::with_capacity(graph.node_count()),
            visited: Vec::with_capacity(graph.node_count()),
        }
    }

    fn init(&mut self, graph: &impl Graph, start: NodeIndex) {
        let node_count = graph.node_count();

        self.weights.clear();
        self.weights.resize(node_count, Distance::INFINITY);
        self.parents.clear();
        self.parents.resize(node_count, None);
        self.visited.clear();
        self.visited.resize(node_count, false);

        self.weights[start.get()] = Distance::ZERO;
    }

    /// First unvisited node with the smallest weight, in index order.
    fn closest_unvisited(&self) -> Option<usize> {
        let mut closest: Option<usize> = None;

        for node in 0..self.weights.len() {
            if self.visited[node] {
                continue;
            }

            if closest.is_none_or(|current| self.weights[node] < self.weights[current]) {
                closest = Some(node);
            }
        }

        closest
    }
}

impl ShortestPathAlgorithm for LinearScanDijkstra {
    fn calc_path(&mut self, graph: &impl Graph, start: NodeIndex, end: NodeIndex) -> PathResult {
        let stopwatch = Stopwatch::new("linear_scan_dijkstra/calc_path");

        self.init(graph, start);
        let mut stats = SearchStats::default();

        while let Some(node) = self.closest_unvisited() {
            let weight = self.weights[node];

            // Everything left is unreachable
            if weight.is_infinite() {
                break;
            }

            self.visited[node] = true;
            stats.settled_nodes += 1;

            if node == end.get() {
                break;
            }

            for edge in graph.node_edges_iter(NodeIndex::new(node)) {
                let adj_node = edge.to().get();
                let next_weight = weight + edge.weight();

                if next_weight < self.weights[adj_node] {
                    self.weights[adj_node] = next_weight;
                    self.parents[adj_node] = Some(NodeIndex::new(node));
                    stats.relaxed_edges += 1;
                }
            }
        }

        debug!(
            settled = stats.settled_nodes,
            relaxed = stats.relaxed_edges,
            "Linear scan Dijkstra {} -> {}",
            graph.node_id(start),
            graph.node_id(end)
        );
        stopwatch.report();

        build_path(
            graph,
            |node| self.parents[node.get()],
            start,
            end,
            self.weights[end.get()],
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        graph_builder::build_graph, node_id::NodeId, segment_record::SegmentRecord,
    };

    use super::*;

    fn calc(records: &[SegmentRecord], start: &str, end: &str) -> PathResult {
        let graph = build_graph(records);
        let mut search = LinearScanDijkstra::new(&graph);
        search.calc_path(
            &graph,
            graph.node_index(start).unwrap(),
            graph.node_index(end).unwrap(),
        )
    }

    #[test]
    fn test_prefers_shorter_detour() {
        let result = calc(
            &[
                SegmentRecord::new("A", "B", 5.0),
                SegmentRecord::new("B", "C", 3.0),
                SegmentRecord::new("A", "C", 10.0),
            ],
            "A",
            "C",
        );

        assert_eq!(
            result.path(),
            &[NodeId::from("A"), NodeId::from("B"), NodeId::from("C")]
        );
        assert_eq!(result.distance(), Distance::new(8.0));
    }

    #[test]
    fn test_parallel_edges_keep_minimum() {
        for records in [
            vec![
                SegmentRecord::new("A", "B", 4.0),
                SegmentRecord::new("A", "B", 6.0),
            ],
            vec![
                SegmentRecord::new("A", "B", 6.0),
                SegmentRecord::new("A", "B", 4.0),
            ],
        ] {
            assert_eq!(calc(&records, "A", "B").distance(), Distance::new(4.0));
        }
    }

    #[test]
    fn test_same_start_and_end() {
        let result = calc(&[SegmentRecord::new("A", "B", 5.0)], "A", "A");

        assert_eq!(result.path(), &[NodeId::from("A")]);
        assert_eq!(result.distance(), Distance::ZERO);
    }

    #[test]
    fn test_disconnected_clusters() {
        let result = calc(
            &[
                SegmentRecord::new("A", "B", 1.0),
                SegmentRecord::new("C", "D", 1.0),
            ],
            "D",
            "B",
        );

        assert_eq!(result, PathResult::unreachable());
    }

    #[test]
    fn test_equal_paths_pick_first_seen_node() {
        // A-B-D and A-C-D are both 2 long; B was seen before C
        let result = calc(
            &[
                SegmentRecord::new("A", "B", 1.0),
                SegmentRecord::new("A", "C", 1.0),
                SegmentRecord::new("B", "D", 1.0),
                SegmentRecord::new("C", "D", 1.0),
            ],
            "A",
            "D",
        );

        assert_eq!(
            result.path(),
            &[NodeId::from("A"), NodeId::from("B"), NodeId::from("D")]
        );
    }
}
