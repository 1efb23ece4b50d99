use std::{cmp::Ordering, fmt, iter::Sum, ops::Add};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Length of a road segment or of a whole path.
///
/// Wraps an `f64` so it can be totally ordered (heap keys, sorting). Unreachable
/// results carry [`Distance::INFINITY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);
    pub const INFINITY: Distance = Distance(f64::INFINITY);

    pub const fn new(value: f64) -> Self {
        Distance(value)
    }

    /// Returns the distance if `value` is usable as an edge weight.
    pub fn try_from_weight(value: f64) -> Option<Self> {
        if value.is_finite() && value >= 0.0 {
            // Normalizes -0.0
            Some(Distance(value + 0.0))
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn value(&self) -> f64 {
        self.0
    }

    #[inline(always)]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    #[inline(always)]
    pub fn is_infinite(&self) -> bool {
        self.0.is_infinite()
    }
}

impl From<Distance> for f64 {
    fn from(value: Distance) -> Self {
        value.0
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Self) -> Self::Output {
        Distance(self.0 + rhs.0)
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Distance::ZERO, |acc, distance| acc + distance)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinite() {
            write!(f, "∞")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de> Deserialize<'de> for Distance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<f64>::deserialize(deserializer)?;
        Ok(value.map_or(Distance::INFINITY, Distance))
    }
}
