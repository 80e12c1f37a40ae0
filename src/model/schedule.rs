use serde::{Deserialize, Serialize, Serializer};

use super::null_as_default;
use crate::constants::{DEFAULT_TIMEZONE, EVERY};

/// When a job runs. `[-1]` in a field means every unit of it.
///
/// Empty fields are sent as their "every" value and an empty timezone as
/// [`DEFAULT_TIMEZONE`], so `Schedule::default()` runs every minute. The
/// substitution happens while serializing and never touches `self`.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Schedule {
    #[serde(deserialize_with = "null_as_default")]
    pub timezone: String,
    // 0-23
    #[serde(deserialize_with = "null_as_default")]
    pub hours: Vec<i32>,
    // 1-31
    #[serde(deserialize_with = "null_as_default")]
    pub mdays: Vec<i32>,
    // 0-59
    #[serde(deserialize_with = "null_as_default")]
    pub minutes: Vec<i32>,
    // 1-12
    #[serde(deserialize_with = "null_as_default")]
    pub months: Vec<i32>,
    // 0-6
    #[serde(deserialize_with = "null_as_default")]
    pub wdays: Vec<i32>,
}

#[derive(Serialize)]
struct WireSchedule<'a> {
    timezone: &'a str,
    hours: &'a [i32],
    mdays: &'a [i32],
    minutes: &'a [i32],
    months: &'a [i32],
    wdays: &'a [i32],
}

fn or_every(field: &[i32]) -> &[i32] {
    if field.is_empty() {
        EVERY
    } else {
        field
    }
}

impl Serialize for Schedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let timezone = if self.timezone.is_empty() {
            DEFAULT_TIMEZONE
        } else {
            &self.timezone
        };

        WireSchedule {
            timezone,
            hours: or_every(&self.hours),
            mdays: or_every(&self.mdays),
            minutes: or_every(&self.minutes),
            months: or_every(&self.months),
            wdays: or_every(&self.wdays),
        }
        .serialize(serializer)
    }
}
