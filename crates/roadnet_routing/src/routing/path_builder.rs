use crate::{
    distance::Distance,
    graph::{Graph, NodeIndex},
};

use super::path_result::PathResult;

/// Walks predecessor links back from `end`.
///
/// If the walk does not stop at `start`, `end` was never reached and the
/// result is unreachable.
pub(crate) fn build_path(
    graph: &impl Graph,
    parent: impl Fn(NodeIndex) -> Option<NodeIndex>,
    start: NodeIndex,
    end: NodeIndex,
    distance: Distance,
) -> PathResult {
    let mut nodes: Vec<NodeIndex> = Vec::with_capacity(32);

    let mut node = Some(end);
    while let Some(current) = node {
        nodes.push(current);
        node = parent(current);
    }

    nodes.reverse();

    if nodes.first() != Some(&start) {
        return PathResult::unreachable();
    }

    let path = nodes
        .into_iter()
        .map(|node| graph.node_id(node).clone())
        .collect();

    PathResult::new(path, distance)
}
