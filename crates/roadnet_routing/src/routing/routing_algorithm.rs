use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoutingAlgorithm {
    /// Binary-heap frontier.
    #[default]
    Dijkstra,
    /// Full scan of the unvisited set, for tiny networks.
    LinearScan,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown routing algorithm {0:?}, expected \"dijkstra\" or \"linear-scan\"")]
pub struct ParseRoutingAlgorithmError(String);

impl FromStr for RoutingAlgorithm {
    type Err = ParseRoutingAlgorithmError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(RoutingAlgorithm::Dijkstra),
            "linear-scan" | "linear_scan" => Ok(RoutingAlgorithm::LinearScan),
            _ => Err(ParseRoutingAlgorithmError(value.to_owned())),
        }
    }
}

impl fmt::Display for RoutingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingAlgorithm::Dijkstra => f.write_str("dijkstra"),
            RoutingAlgorithm::LinearScan => f.write_str("linear-scan"),
        }
    }
}
