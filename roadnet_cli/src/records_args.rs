use std::path::PathBuf;

use clap::Args;
use roadnet_routing::segment_record::SegmentRecord;
use roadnet_sources::{json_file_source::JsonFileSource, segment_source::SegmentSource};

#[derive(Args)]
pub struct RecordsArgs {
    /// JSON file holding the segment records
    #[arg(short, long, env = "ROADNET_RECORDS")]
    pub records: PathBuf,
}

impl RecordsArgs {
    pub fn load(&self) -> anyhow::Result<Vec<SegmentRecord>> {
        let source = JsonFileSource::new(&self.records);
        Ok(source.load()?)
    }
}
