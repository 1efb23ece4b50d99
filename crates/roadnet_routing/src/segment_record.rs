use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{constants::OPERATIONAL_STATUS, distance::Distance, node_id::NodeId};

/// Distance cell as it appears in a spreadsheet row: a number, or text that may
/// or may not hold one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawDistance {
    Number(f64),
    Text(String),
}

impl RawDistance {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawDistance::Number(value) => Some(*value),
            RawDistance::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    None
                } else {
                    text.parse::<f64>().ok()
                }
            }
        }
    }
}

impl From<f64> for RawDistance {
    fn from(value: f64) -> Self {
        RawDistance::Number(value)
    }
}

impl From<&str> for RawDistance {
    fn from(value: &str) -> Self {
        RawDistance::Text(value.to_owned())
    }
}

/// One raw row describing a road segment.
///
/// Every field is optional on input; [`SegmentRecord::validate`] decides
/// whether the row is usable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "SegmentRecord")]
pub struct SegmentRecord {
    #[serde(default, deserialize_with = "deserialize_endpoint")]
    #[schemars(with = "Option<String>")]
    pub start: Option<String>,

    #[serde(default, deserialize_with = "deserialize_endpoint")]
    #[schemars(with = "Option<String>")]
    pub end: Option<String>,

    #[serde(default, deserialize_with = "deserialize_distance")]
    #[schemars(with = "Option<f64>")]
    pub distance: Option<RawDistance>,

    /// `"o"` (any case) marks an operational segment. Absent or empty means usable.
    #[serde(default, deserialize_with = "deserialize_label")]
    #[schemars(with = "Option<String>")]
    pub status: Option<String>,
}

/// A record that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: NodeId,
    pub end: NodeId,
    pub distance: Distance,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RejectReason {
    #[error("missing start point")]
    MissingStart,
    #[error("missing end point")]
    MissingEnd,
    #[error("distance is not a finite non-negative number")]
    InvalidDistance,
    #[error("segment status {0:?} is not operational")]
    NotOperational(String),
}

impl SegmentRecord {
    pub fn new(start: &str, end: &str, distance: impl Into<RawDistance>) -> Self {
        SegmentRecord {
            start: Some(start.to_owned()),
            end: Some(end.to_owned()),
            distance: Some(distance.into()),
            status: None,
        }
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_owned());
        self
    }

    pub fn start_label(&self) -> Option<&str> {
        self.start.as_deref().filter(|label| !label.is_empty())
    }

    pub fn end_label(&self) -> Option<&str> {
        self.end.as_deref().filter(|label| !label.is_empty())
    }

    pub fn is_operational(&self) -> bool {
        match self.status.as_deref() {
            None | Some("") => true,
            Some(status) => status.to_lowercase() == OPERATIONAL_STATUS,
        }
    }

    pub fn validate(&self) -> Result<Segment, RejectReason> {
        let start = self.start_label().ok_or(RejectReason::MissingStart)?;
        let end = self.end_label().ok_or(RejectReason::MissingEnd)?;

        let distance = self
            .distance
            .as_ref()
            .and_then(RawDistance::as_number)
            .and_then(Distance::try_from_weight)
            .ok_or(RejectReason::InvalidDistance)?;

        if !self.is_operational() {
            return Err(RejectReason::NotOperational(
                self.status.clone().unwrap_or_default(),
            ));
        }

        Ok(Segment {
            start: NodeId::from(start),
            end: NodeId::from(end),
            distance,
        })
    }
}

// Spreadsheet exports put numbers where text is expected and the other way
// around; neither should fail the whole document.
fn deserialize_endpoint<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

// Any status that is not text still has to read as non-operational.
fn deserialize_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    })
}

fn deserialize_distance<'de, D>(deserializer: D) -> Result<Option<RawDistance>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Number(number) => number.as_f64().map(RawDistance::Number),
        Value::String(text) => Some(RawDistance::Text(text)),
        other => Some(RawDistance::Text(other.to_string())),
    })
}
