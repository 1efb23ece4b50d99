use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read records from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Records are not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error("Data source reported an error: {message}")]
    Remote { message: String },
    #[error("Data source reported success but sent no data")]
    MissingData,
}
