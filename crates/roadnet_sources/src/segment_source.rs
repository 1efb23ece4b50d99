use roadnet_routing::segment_record::SegmentRecord;

use crate::error::SourceError;

/// Anything that can hand over the current set of segment records.
pub trait SegmentSource {
    fn load(&self) -> Result<Vec<SegmentRecord>, SourceError>;
}
