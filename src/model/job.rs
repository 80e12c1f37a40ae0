use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{null_as_default, JobStatus, JobType, RequestMethod, Schedule};
use crate::time::{Milliseconds, Seconds};

/// A job as returned by the job listing.
///
/// Keys missing from a response decode to their zero value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Job {
    pub job_id: i64,
    pub enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    // keep response headers/body in the execution history
    pub save_responses: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    pub last_status: JobStatus,
    pub last_duration: Milliseconds,
    pub last_execution: Seconds,
    // null when the service has no prediction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_execution: Option<Seconds>,
    #[serde(rename = "type")]
    pub job_type: JobType,
    /// Timeout for calls to `url`, in seconds.
    pub request_timeout: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub schedule: Schedule,
    pub request_method: RequestMethod,
}

/// A job with its auth, notification and extended request settings.
///
/// Serialized as a single flat object: the [`Job`] keys sit next to `auth`,
/// `notification` and `extendedData`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DetailedJob {
    #[serde(flatten)]
    pub job: Job,
    #[serde(default, deserialize_with = "null_as_default")]
    pub auth: JobAuth,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notification: JobNotificationSettings,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extended_data: JobExtendedData,
}

impl From<Job> for DetailedJob {
    fn from(job: Job) -> Self {
        Self {
            job,
            ..Default::default()
        }
    }
}

/// HTTP basic auth the service uses when calling the job URL.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct JobAuth {
    pub enable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub user: String,
    #[serde(deserialize_with = "null_as_default")]
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct JobNotificationSettings {
    pub on_failure: bool,
    // succeeds after a prior failure
    pub on_success: bool,
    // disabled automatically by the service
    pub on_disable: bool,
}

/// Extra headers and body sent with each call to the job URL.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct JobExtendedData {
    #[serde(deserialize_with = "null_as_default")]
    pub headers: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
}
