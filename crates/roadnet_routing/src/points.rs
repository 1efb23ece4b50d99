use std::collections::BTreeSet;

use crate::{node_id::NodeId, segment_record::SegmentRecord};

/// Every point named by a record, sorted, for users to pick start and end from.
///
/// Records are not validated here: a point only reachable through closed
/// segments is still listed.
pub fn distinct_points(records: &[SegmentRecord]) -> Vec<NodeId> {
    records
        .iter()
        .flat_map(|record| [record.start_label(), record.end_label()])
        .flatten()
        .map(NodeId::from)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
