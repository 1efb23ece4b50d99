use tracing::{debug, info};

use crate::{road_graph::RoadGraph, segment_record::SegmentRecord, stopwatch::Stopwatch};

/// Turns raw segment records into a [`RoadGraph`].
///
/// Unusable records are skipped, never reported as errors: input comes from
/// hand-edited sheets and a bad row must not hide the rest of the network.
#[derive(Default)]
pub struct GraphBuilder {
    graph: RoadGraph,
    accepted: usize,
    rejected: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the record to the graph if it is usable. Returns whether it was.
    pub fn add_record(&mut self, record: &SegmentRecord) -> bool {
        match record.validate() {
            Ok(segment) => {
                self.graph
                    .add_segment(&segment.start, &segment.end, segment.distance);
                self.accepted += 1;
                true
            }
            Err(reason) => {
                debug!(
                    start = ?record.start,
                    end = ?record.end,
                    "Skipping segment record: {}",
                    reason
                );
                self.rejected += 1;
                false
            }
        }
    }

    pub fn add_records<'a>(&mut self, records: impl IntoIterator<Item = &'a SegmentRecord>) {
        for record in records {
            self.add_record(record);
        }
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected
    }

    pub fn build(self) -> RoadGraph {
        info!(
            accepted = self.accepted,
            rejected = self.rejected,
            "Built road graph"
        );
        self.graph
    }
}

pub fn build_graph(records: &[SegmentRecord]) -> RoadGraph {
    let stopwatch = Stopwatch::new("graph_builder/build_graph");
    let mut builder = GraphBuilder::new();
    builder.add_records(records);
    let graph = builder.build();
    stopwatch.report();
    graph
}
