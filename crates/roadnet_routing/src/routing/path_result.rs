use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{distance::Distance, node_id::NodeId};

/// Ordered route from source to target with its total distance.
///
/// An empty path with an infinite distance means no route exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    path: Vec<NodeId>,
    distance: Distance,
}

impl PathResult {
    pub fn new(path: Vec<NodeId>, distance: Distance) -> Self {
        PathResult { path, distance }
    }

    pub fn unreachable() -> Self {
        PathResult {
            path: Vec::new(),
            distance: Distance::INFINITY,
        }
    }

    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty() && self.distance.is_finite()
    }

    pub fn source(&self) -> Option<&NodeId> {
        self.path.first()
    }

    pub fn target(&self) -> Option<&NodeId> {
        self.path.last()
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, node) in self.path.iter().enumerate() {
            if index > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable() {
        let result = PathResult::unreachable();

        assert!(!result.is_found());
        assert!(result.path().is_empty());
        assert!(result.distance().is_infinite());
        assert_eq!(result.source(), None);
    }

    #[test]
    fn test_display_joins_nodes() {
        let result = PathResult::new(
            vec!["A".into(), "B".into(), "C".into()],
            Distance::new(8.0),
        );

        assert_eq!(result.to_string(), "A → B → C");
    }

    #[test]
    fn test_serialize_unreachable() {
        let json = serde_json::to_value(PathResult::unreachable()).unwrap();

        assert_eq!(json, serde_json::json!({ "path": [], "distance": null }));
    }
}
