use std::{
    fs,
    path::{Path, PathBuf},
};

use roadnet_routing::segment_record::SegmentRecord;
use tracing::info;

use crate::{error::SourceError, records_document::parse_records, segment_source::SegmentSource};

/// Records stored in a JSON file, either as a bare array or as the web app
/// response envelope.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SegmentSource for JsonFileSource {
    fn load(&self) -> Result<Vec<SegmentRecord>, SourceError> {
        let content = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        let records = parse_records(&content)?;
        info!("Loaded {} records from {:?}", records.len(), self.path);

        Ok(records)
    }
}
