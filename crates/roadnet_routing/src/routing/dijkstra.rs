use std::cmp::Ordering;
use std::collections::BinaryHeap;

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

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
struct HeapItem {
    node: NodeIndex,
    weight: Distance,
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip both keys to make this a min-heap; equal weights pop the
        // earliest-seen node first.
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.node.cmp(&self.node))
    }
}

#[derive(Clone, Copy)]
struct NodeData {
    weight: Distance,
    settled: bool,
    parent: Option<NodeIndex>,
}

impl NodeData {
    fn new() -> Self {
        NodeData {
            weight: Distance::INFINITY,
            settled: false,
            parent: None,
        }
    }
}

/// Single-source Dijkstra with a binary-heap frontier.
///
/// Stale heap entries are skipped when popped instead of being decreased in
/// place.
pub struct Dijkstra {
    heap: BinaryHeap<HeapItem>,
    // Road networks handled here are small, a dense vector per node is fine.
    data: Vec<NodeData>,
}

impl Dijkstra {
    pub fn new(graph: &impl Graph) -> Self {
        Dijkstra {
            heap: BinaryHeap::with_capacity(graph.node_count()),
            data: Vec::with_capacity(graph.node_count()),
        }
    }

    fn init(&mut self, graph: &impl Graph, start: NodeIndex) {
        self.heap.clear();
        self.data.clear();
        self.data.resize(graph.node_count(), NodeData::new());

        self.data[start.get()].weight = Distance::ZERO;
        self.heap.push(HeapItem {
            node: start,
            weight: Distance::ZERO,
        });
    }

    fn run(&mut self, graph: &impl Graph, target: Option<NodeIndex>) -> SearchStats {
        let mut stats = SearchStats::default();

        while let Some(HeapItem { node, weight }) = self.heap.pop() {
            let data = &mut self.data[node.get()];

            // Node is already settled, skip
            if data.settled {
                continue;
            }

            // The weight is bigger than the current shortest weight, skip
            if weight > data.weight {
                continue;
            }

            data.settled = true;
            stats.settled_nodes += 1;

            if Some(node) == target {
                break;
            }

            for edge in graph.node_edges_iter(node) {
                let adj_node = edge.to();
                let adj_data = &mut self.data[adj_node.get()];

                if adj_data.settled {
                    continue;
                }

                let next_weight = weight + edge.weight();

                if next_weight < adj_data.weight {
                    adj_data.weight = next_weight;
                    adj_data.parent = Some(node);
                    stats.relaxed_edges += 1;
                    self.heap.push(HeapItem {
                        node: adj_node,
                        weight: next_weight,
                    });
                }
            }
        }

        stats
    }

    /// Distances from `start` to every node of the graph, indexed by
    /// [`NodeIndex`]. Unreachable nodes stay at [`Distance::INFINITY`].
    pub fn calc_distances(&mut self, graph: &impl Graph, start: NodeIndex) -> Vec<Distance> {
        self.init(graph, start);
        let stats = self.run(graph, None);
        debug!(
            settled = stats.settled_nodes,
            relaxed = stats.relaxed_edges,
            "Dijkstra one-to-all from {}",
            graph.node_id(start)
        );

        self.data.iter().map(|data| data.weight).collect()
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn calc_path(&mut self, graph: &impl Graph, start: NodeIndex, end: NodeIndex) -> PathResult {
        let stopwatch = Stopwatch::new("dijkstra/calc_path");

        self.init(graph, start);
        let stats = self.run(graph, Some(end));

        debug!(
            settled = stats.settled_nodes,
            relaxed = stats.relaxed_edges,
            "Dijkstra {} -> {}",
            graph.node_id(start),
            graph.node_id(end)
        );
        stopwatch.report();

        let data = &self.data;
        build_path(
            graph,
            |node| data[node.get()].parent,
            start,
            end,
            data[end.get()].weight,
        )
    }
}
