use crate::{define_index_newtype, distance::Distance, node_id::NodeId};

define_index_newtype!(NodeIndex, NodeId);

/// Directed half of a road segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphEdge {
    to: NodeIndex,
    weight: Distance,
}

impl GraphEdge {
    pub fn new(to: NodeIndex, weight: Distance) -> Self {
        GraphEdge { to, weight }
    }

    #[inline(always)]
    pub fn to(&self) -> NodeIndex {
        self.to
    }

    #[inline(always)]
    pub fn weight(&self) -> Distance {
        self.weight
    }
}

pub trait Graph {
    type EdgeIterator<'a>: Iterator<Item = &'a GraphEdge>
    where
        Self: 'a;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn node_index(&self, node: &str) -> Option<NodeIndex>;

    fn node_id(&self, node: NodeIndex) -> &NodeId;

    fn node_edges_iter(&self, node: NodeIndex) -> Self::EdgeIterator<'_>;
}
