/// Only segments whose status matches this value, ignoring case, are usable.
pub const OPERATIONAL_STATUS: &str = "o";

/// Unit shown next to distances in user-facing messages.
pub const DISTANCE_UNIT: &str = "km";
