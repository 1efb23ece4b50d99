use crate::graph::{Graph, NodeIndex};

use super::path_result::PathResult;

pub trait ShortestPathAlgorithm {
    /// Searches the minimum-distance path from `start` to `end`.
    ///
    /// Edge weights must be finite and non-negative. Path lengths are summed in
    /// `f64`: a path whose total exceeds `f64::MAX` overflows to infinity and
    /// is reported as unreachable.
    fn calc_path(&mut self, graph: &impl Graph, start: NodeIndex, end: NodeIndex) -> PathResult;
}

/// Counters collected during a search, logged at debug level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub settled_nodes: usize,
    pub relaxed_edges: usize,
}
