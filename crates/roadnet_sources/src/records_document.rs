use roadnet_routing::segment_record::SegmentRecord;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::SourceError;

const UNKNOWN_SERVER_ERROR: &str = "Unknown server error.";

/// Response shape of the spreadsheet web app.
#[derive(Deserialize)]
struct RecordsEnvelope {
    #[serde(default)]
    success: bool,
    data: Option<Vec<Value>>,
    error: Option<String>,
}

/// A records document is either a bare array of rows or a wrapped response.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsDocument {
    Rows(Vec<Value>),
    Envelope(RecordsEnvelope),
}

/// Parses a records document.
///
/// Rows that are not JSON objects are skipped; the graph builder decides what
/// to do with incomplete rows.
pub fn parse_records(json: &str) -> Result<Vec<SegmentRecord>, SourceError> {
    let document: RecordsDocument = serde_json::from_str(json)?;

    let rows = match document {
        RecordsDocument::Rows(rows) => rows,
        RecordsDocument::Envelope(envelope) => {
            if !envelope.success {
                let message = envelope
                    .error
                    .unwrap_or_else(|| UNKNOWN_SERVER_ERROR.to_owned());
                warn!("Data source error: {}", message);
                return Err(SourceError::Remote { message });
            }

            envelope.data.ok_or(SourceError::MissingData)?
        }
    };

    let total = rows.len();
    let records: Vec<SegmentRecord> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| {
            if !row.is_object() {
                debug!(index, "Skipping row that is not an object");
                return None;
            }

            match serde_json::from_value(row) {
                Ok(record) => Some(record),
                Err(error) => {
                    debug!(index, "Skipping unreadable row: {}", error);
                    None
                }
            }
        })
        .collect();

    debug!(rows = total, records = records.len(), "Parsed records document");

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let records = parse_records(
            r#"[
                { "start": "A", "end": "B", "distance": 5, "status": "o" },
                { "start": "B", "end": "C", "distance": "3" }
            ]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].end.as_deref(), Some("C"));
    }

    #[test]
    fn test_parse_envelope() {
        let records = parse_records(
            r#"{ "success": true, "data": [{ "start": "A", "end": "B", "distance": 1 }] }"#,
        )
        .unwrap();

        assert_eq!(records, vec![SegmentRecord::new("A", "B", 1.0)]);
    }

    #[test]
    fn test_envelope_error() {
        let error = parse_records(r#"{ "success": false, "error": "Sheet not found" }"#)
            .unwrap_err();

        assert!(matches!(
            error,
            SourceError::Remote { ref message } if message == "Sheet not found"
        ));
    }

    #[test]
    fn test_envelope_error_without_message() {
        let error = parse_records(r#"{ "success": false }"#).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Data source reported an error: Unknown server error."
        );
    }

    #[test]
    fn test_envelope_without_data() {
        let error = parse_records(r#"{ "success": true }"#).unwrap_err();
        assert!(matches!(error, SourceError::MissingData));
    }

    #[test]
    fn test_skips_non_object_rows() {
        let records = parse_records(r#"[null, 3, "A", { "start": "A" }]"#).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].start.as_deref(), Some("A"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            parse_records("{ not json"),
            Err(SourceError::Json(_))
        ));
    }
}
