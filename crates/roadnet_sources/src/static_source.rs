use roadnet_routing::segment_record::SegmentRecord;

use crate::{error::SourceError, segment_source::SegmentSource};

/// Records held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<SegmentRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<SegmentRecord>) -> Self {
        StaticSource { records }
    }
}

impl SegmentSource for StaticSource {
    fn load(&self) -> Result<Vec<SegmentRecord>, SourceError> {
        Ok(self.records.clone())
    }
}
