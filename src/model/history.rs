use serde::{Deserialize, Serialize};

use super::{null_as_default, JobStatus};
use crate::time::{Microseconds, Milliseconds, Seconds};

/// One execution of a job.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoryItem {
    pub job_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub identifier: String,
    /// Actual execution time.
    pub date: Seconds,
    /// Planned execution time.
    pub date_planned: Seconds,
    pub jitter: Milliseconds,
    /// Job URL at the time of execution.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    pub duration: Milliseconds,
    pub status: JobStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub status_text: String,
    pub http_status: i32,
    /// Raw response headers, when the job saves responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<String>,
    /// Raw response body, when the job saves responses.
    pub body: Option<String>,
    pub stats: HistoryItemStats,
}

/// Timing breakdown of one execution, each measured from transfer start.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoryItemStats {
    pub name_lookup: Microseconds,
    pub connect: Microseconds,
    // TLS handshake, 0 without TLS
    pub app_connect: Microseconds,
    pub pre_transfer: Microseconds,
    // first response byte
    pub start_transfer: Microseconds,
    pub total: Microseconds,
}

/// Execution history of a job and its upcoming execution times.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct JobHistory {
    #[serde(deserialize_with = "null_as_default")]
    pub history: HistoryItem,
    #[serde(deserialize_with = "null_as_default")]
    pub predictions: Vec<Seconds>,
}
