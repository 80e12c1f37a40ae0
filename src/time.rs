//! Unix timestamps as the API sends them, at three resolutions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unix timestamp or duration in seconds.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Seconds(pub i64);

/// Unix timestamp or duration in milliseconds.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Milliseconds(pub i64);

/// Unix timestamp or duration in microseconds.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Microseconds(pub i64);

impl Seconds {
    /// Returns `None` when the value is outside chrono's representable range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }
}

impl Milliseconds {
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl Microseconds {
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_micros(self.0)
    }
}

impl From<i64> for Seconds {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i64> for Milliseconds {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i64> for Microseconds {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
