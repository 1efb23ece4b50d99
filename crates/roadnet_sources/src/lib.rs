pub mod error;
pub mod json_file_source;
pub mod records_document;
pub mod segment_source;
pub mod static_source;
