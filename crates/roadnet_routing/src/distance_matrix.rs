use rayon::prelude::*;
use serde::Serialize;

use crate::{
    distance::Distance, graph::Graph, node_id::NodeId, routing::dijkstra::Dijkstra,
    stopwatch::Stopwatch,
};

/// Shortest distances between every ordered pair of a set of points.
///
/// Each row is an independent one-to-all search over the same read-only graph,
/// so rows are computed in parallel.
#[derive(Debug, Clone, Serialize)]
pub struct DistanceMatrix {
    points: Vec<NodeId>,
    distances: Vec<Vec<Distance>>,
}

impl DistanceMatrix {
    pub fn compute<G>(graph: &G, points: &[NodeId]) -> Self
    where
        G: Graph + Sync,
    {
        let stopwatch = Stopwatch::new("distance_matrix/compute");

        let distances = points
            .par_iter()
            .map(|from| {
                let Some(start) = graph.node_index(from.as_str()) else {
                    return vec![Distance::INFINITY; points.len()];
                };

                let mut dijkstra = Dijkstra::new(graph);
                let from_start = dijkstra.calc_distances(graph, start);

                points
                    .iter()
                    .map(|to| {
                        graph
                            .node_index(to.as_str())
                            .map_or(Distance::INFINITY, |end| from_start[end.get()])
                    })
                    .collect()
            })
            .collect();

        stopwatch.report();

        DistanceMatrix {
            points: points.to_vec(),
            distances,
        }
    }

    pub fn points(&self) -> &[NodeId] {
        &self.points
    }

    pub fn row(&self, index: usize) -> &[Distance] {
        &self.distances[index]
    }

    pub fn distance(&self, from: &str, to: &str) -> Option<Distance> {
        let from = self.points.iter().position(|point| point == from)?;
        let to = self.points.iter().position(|point| point == to)?;
        Some(self.distances[from][to])
    }
}
