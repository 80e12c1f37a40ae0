use std::time::Duration;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{API_URL, APP_NAME, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use crate::model::{DetailedJob, Job, RequestMethod, Schedule};

/// Options recognised by [`Client::with_config`](crate::Client::with_config).
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Replaces the default transport. `timeout` is ignored when set; the
    /// supplied client's own settings apply.
    pub transport: Option<reqwest::Client>,
    pub timeout: Duration,
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            transport: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            base_url: API_URL.to_string(),
        }
    }
}

/// Settings for the `cronjob` binary, read from a config file and
/// `CRONJOB_*` environment variables.
#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    pub job: Option<JobSettings>,
}

/// A job to create on startup.
#[derive(Deserialize, Clone, Debug)]
pub struct JobSettings {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub save_responses: bool,
    #[serde(default = "default_request_timeout")]
    pub request_timeout: i64,
    #[serde(default)]
    pub request_method: RequestMethod,
    #[serde(default)]
    pub schedule: Schedule,
}

fn default_base_url() -> String {
    API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_request_timeout() -> i64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Settings {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            transport: None,
            timeout: Duration::from_secs(self.timeout_secs),
            base_url: self.base_url.clone(),
        }
    }
}

impl JobSettings {
    pub fn to_detailed_job(&self) -> DetailedJob {
        DetailedJob::from(Job {
            title: self.title.clone(),
            url: self.url.clone(),
            enabled: self.enabled,
            save_responses: self.save_responses,
            request_timeout: self.request_timeout,
            request_method: self.request_method,
            schedule: self.schedule.clone(),
            ..Default::default()
        })
    }
}

pub fn load(file: &str) -> Result<Settings> {
    let settings = Config::builder()
        .add_source(config::File::with_name(file).required(false))
        .add_source(config::Environment::with_prefix(APP_NAME))
        .build()?
        .try_deserialize::<Settings>()?;

    Ok(settings)
}
