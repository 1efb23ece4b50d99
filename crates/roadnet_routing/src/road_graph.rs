use fxhash::FxHashMap;

use crate::{
    distance::Distance,
    graph::{Graph, GraphEdge, NodeIndex},
    node_id::NodeId,
};

/// Adjacency-list road network keyed by [`NodeId`].
///
/// Names are interned to dense [`NodeIndex`] values in the order they are first
/// seen, which also fixes the iteration order used to break ties during search.
#[derive(Debug, Default, Clone)]
pub struct RoadGraph {
    nodes: Vec<NodeId>,
    index: FxHashMap<NodeId, NodeIndex>,
    adjacency_list: Vec<Vec<GraphEdge>>,
    edges: usize,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `node`, creating an empty edge list on first sight.
    pub fn add_node(&mut self, node: &NodeId) -> NodeIndex {
        if let Some(&index) = self.index.get(node) {
            return index;
        }

        let index = NodeIndex::new(self.nodes.len());
        self.nodes.push(node.clone());
        self.index.insert(node.clone(), index);
        self.adjacency_list.push(vec![]);
        index
    }

    /// Appends one edge in each direction. Parallel edges are kept.
    pub fn add_segment(&mut self, start: &NodeId, end: &NodeId, distance: Distance) {
        let start_index = self.add_node(start);
        let end_index = self.add_node(end);

        self.adjacency_list[start_index.get()].push(GraphEdge::new(end_index, distance));
        self.adjacency_list[end_index.get()].push(GraphEdge::new(start_index, distance));
        self.edges += 2;
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.index.contains_key(node)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter()
    }

    /// Outgoing edges of `node` as `(to, weight)` pairs, in insertion order.
    pub fn edges_from(&self, node: &str) -> Option<impl Iterator<Item = (&NodeId, Distance)>> {
        let index = self.node_index(node)?;
        Some(
            self.node_edges_iter(index)
                .map(|edge| (&self.nodes[edge.to()], edge.weight())),
        )
    }
}

impl Graph for RoadGraph {
    type EdgeIterator<'a> = std::slice::Iter<'a, GraphEdge>;

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn node_index(&self, node: &str) -> Option<NodeIndex> {
        self.index.get(node).copied()
    }

    fn node_id(&self, node: NodeIndex) -> &NodeId {
        &self.nodes[node]
    }

    fn node_edges_iter(&self, node: NodeIndex) -> Self::EdgeIterator<'_> {
        self.adjacency_list[node.get()].iter()
    }
}
