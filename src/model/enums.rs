use serde::{Deserialize, Serialize};
use std::fmt;

// Every enum here decodes any integer. Codes this crate doesn't know land in
// `Other` and are sent back unchanged.

/// Outcome of a job execution.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(from = "i32", into = "i32")]
pub enum JobStatus {
    // Unknown / not executed yet
    #[default]
    Unknown,
    Ok,
    FailedDns,
    FailedCouldNotConnect,
    FailedHttpError,
    FailedTimeout,
    FailedTooMuchResponseData,
    FailedInvalidUrl,
    FailedInternalError,
    FailedUnknownReason,
    Other(i32),
}

impl JobStatus {
    pub fn is_failure(self) -> bool {
        !matches!(self, JobStatus::Unknown | JobStatus::Ok)
    }
}

impl From<i32> for JobStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => JobStatus::Unknown,
            1 => JobStatus::Ok,
            2 => JobStatus::FailedDns,
            3 => JobStatus::FailedCouldNotConnect,
            4 => JobStatus::FailedHttpError,
            5 => JobStatus::FailedTimeout,
            6 => JobStatus::FailedTooMuchResponseData,
            7 => JobStatus::FailedInvalidUrl,
            8 => JobStatus::FailedInternalError,
            9 => JobStatus::FailedUnknownReason,
            code => JobStatus::Other(code),
        }
    }
}

impl From<JobStatus> for i32 {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Unknown => 0,
            JobStatus::Ok => 1,
            JobStatus::FailedDns => 2,
            JobStatus::FailedCouldNotConnect => 3,
            JobStatus::FailedHttpError => 4,
            JobStatus::FailedTimeout => 5,
            JobStatus::FailedTooMuchResponseData => 6,
            JobStatus::FailedInvalidUrl => 7,
            JobStatus::FailedInternalError => 8,
            JobStatus::FailedUnknownReason => 9,
            JobStatus::Other(code) => code,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(from = "i32", into = "i32")]
pub enum JobType {
    #[default]
    Default,
    // Used in a status monitor
    Monitoring,
    Other(i32),
}

impl From<i32> for JobType {
    fn from(code: i32) -> Self {
        match code {
            0 => JobType::Default,
            1 => JobType::Monitoring,
            code => JobType::Other(code),
        }
    }
}

impl From<JobType> for i32 {
    fn from(job_type: JobType) -> Self {
        match job_type {
            JobType::Default => 0,
            JobType::Monitoring => 1,
            JobType::Other(code) => code,
        }
    }
}

/// HTTP method the service uses when it calls the job URL.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(from = "i32", into = "i32")]
pub enum RequestMethod {
    #[default]
    Get,
    Post,
    Options,
    Head,
    Put,
    Delete,
    Trace,
    Connect,
    Patch,
    Other(i32),
}

impl RequestMethod {
    /// Verb name, or `None` for a code this crate doesn't know.
    pub fn as_str(self) -> Option<&'static str> {
        Some(match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Options => "OPTIONS",
            RequestMethod::Head => "HEAD",
            RequestMethod::Put => "PUT",
            RequestMethod::Delete => "DELETE",
            RequestMethod::Trace => "TRACE",
            RequestMethod::Connect => "CONNECT",
            RequestMethod::Patch => "PATCH",
            RequestMethod::Other(_) => return None,
        })
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(verb) => f.write_str(verb),
            None => write!(f, "method({})", i32::from(*self)),
        }
    }
}

impl From<i32> for RequestMethod {
    fn from(code: i32) -> Self {
        match code {
            0 => RequestMethod::Get,
            1 => RequestMethod::Post,
            2 => RequestMethod::Options,
            3 => RequestMethod::Head,
            4 => RequestMethod::Put,
            5 => RequestMethod::Delete,
            6 => RequestMethod::Trace,
            7 => RequestMethod::Connect,
            8 => RequestMethod::Patch,
            code => RequestMethod::Other(code),
        }
    }
}

impl From<RequestMethod> for i32 {
    fn from(method: RequestMethod) -> Self {
        match method {
            RequestMethod::Get => 0,
            RequestMethod::Post => 1,
            RequestMethod::Options => 2,
            RequestMethod::Head => 3,
            RequestMethod::Put => 4,
            RequestMethod::Delete => 5,
            RequestMethod::Trace => 6,
            RequestMethod::Connect => 7,
            RequestMethod::Patch => 8,
            RequestMethod::Other(code) => code,
        }
    }
}
