use std::fmt::{self, Display};

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Request, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::model::{null_as_default, DetailedJob, HistoryItem, Job, JobHistory};

/// The cron-job.org REST API, one method per endpoint.
///
/// Every method is `async` and must be polled on a tokio runtime (reqwest
/// drives its I/O there); each call resolves after exactly one HTTP round
/// trip. Blocking callers can wrap a call in `Runtime::block_on`.
#[async_trait]
pub trait JobApi {
    async fn list_jobs(&self) -> Result<Vec<Job>>;
    async fn get_job(&self, id: i64) -> Result<DetailedJob>;
    /// Creates a new job on every call and returns its id.
    async fn create_job(&self, job: &DetailedJob) -> Result<i64>;
    /// The service applies the update as a partial update of the stored job.
    async fn update_job(&self, id: i64, job: &DetailedJob) -> Result<()>;
    async fn delete_job(&self, id: i64) -> Result<()>;
    async fn get_job_history(&self, id: i64) -> Result<JobHistory>;
    async fn get_history_details(&self, job_id: i64, history_id: i64) -> Result<HistoryItem>;
}

/// cron-job.org client. Cheap to share; holds no per-call state.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: Url,
}

#[derive(Serialize, Deserialize)]
pub(crate) struct JobEnvelope<J> {
    pub job: J,
}

#[derive(Deserialize)]
struct JobsEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    jobs: Vec<Job>,
    #[serde(default)]
    some_failed: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobDetailsEnvelope {
    job_details: DetailedJob,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobIdEnvelope {
    job_id: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryDetailsEnvelope {
    job_history_details: HistoryItem,
}

impl Client {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    pub fn with_config(api_key: impl Into<String>, conf: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&conf.base_url).map_err(|source| ClientError::InvalidBaseUrl {
            url: conf.base_url.clone(),
            source,
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::CannotBeABase(conf.base_url));
        }

        let http = match conf.transport {
            Some(transport) => transport,
            None => reqwest::Client::builder().timeout(conf.timeout).build()?,
        };

        Ok(Client {
            http,
            api_key: api_key.into(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds an authenticated request for the base URL with `segments`
    /// appended to its path, e.g. `["jobs", 42, "history", 7]`.
    pub fn new_request(
        &self,
        method: Method,
        body: Option<Vec<u8>>,
        segments: &[&dyn Display],
    ) -> Result<Request> {
        let url = self.endpoint(segments)?;
        debug!(%method, %url, "building request");

        let mut builder = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            builder = builder.body(body);
        }

        Ok(builder.build()?)
    }

    fn endpoint(&self, segments: &[&dyn Display]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::CannotBeABase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments.iter().map(|s| s.to_string()));

        Ok(url)
    }

    fn encode<T: Serialize>(payload: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(payload).map_err(ClientError::EncodeError)
    }

    async fn send(&self, request: Request) -> Result<Response> {
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.http.execute(request).await?;
        if !response.status().is_success() {
            warn!(%method, %url, status = %response.status(), "non-success response");
        }

        Ok(response)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let response = self.send(request).await?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(ClientError::DecodeError)
    }
}

#[async_trait]
impl JobApi for Client {
    #[tracing::instrument(level = "info", skip(self))]
    async fn list_jobs(&self) -> Result<Vec<Job>> {
        let request = self.new_request(Method::GET, None, &[&"jobs"])?;
        let envelope: JobsEnvelope = self.fetch(request).await?;

        if envelope.some_failed {
            warn!("job list may be incomplete, service reported some_failed");
        }

        Ok(envelope.jobs)
    }

    #[tracing::instrument(level = "info", skip(self))]
    async fn get_job(&self, id: i64) -> Result<DetailedJob> {
        let request = self.new_request(Method::GET, None, &[&"jobs", &id])?;
        let envelope: JobDetailsEnvelope = self.fetch(request).await?;

        Ok(envelope.job_details)
    }

    #[tracing::instrument(level = "info", skip(self, job), fields(title = %job.job.title))]
    async fn create_job(&self, job: &DetailedJob) -> Result<i64> {
        let body = Self::encode(&JobEnvelope { job })?;
        let request = self.new_request(Method::PUT, Some(body), &[&"jobs"])?;
        let envelope: JobIdEnvelope = self.fetch(request).await?;

        Ok(envelope.job_id)
    }

    #[tracing::instrument(level = "info", skip(self, job))]
    async fn update_job(&self, id: i64, job: &DetailedJob) -> Result<()> {
        let body = Self::encode(&JobEnvelope { job })?;
        let request = self.new_request(Method::PATCH, Some(body), &[&"jobs", &id])?;
        self.send(request).await?;

        Ok(())
    }

    #[tracing::instrument(level = "info", skip(self))]
    async fn delete_job(&self, id: i64) -> Result<()> {
        let request = self.new_request(Method::DELETE, None, &[&"jobs", &id])?;
        self.send(request).await?;

        Ok(())
    }

    #[tracing::instrument(level = "info", skip(self))]
    async fn get_job_history(&self, id: i64) -> Result<JobHistory> {
        let request = self.new_request(Method::GET, None, &[&"jobs", &id, &"history"])?;

        self.fetch(request).await
    }

    #[tracing::instrument(level = "info", skip(self))]
    async fn get_history_details(&self, job_id: i64, history_id: i64) -> Result<HistoryItem> {
        let request = self.new_request(
            Method::GET,
            None,
            &[&"jobs", &job_id, &"history", &history_id],
        )?;
        let envelope: HistoryDetailsEnvelope = self.fetch(request).await?;

        Ok(envelope.job_history_details)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RequestMethod, Schedule};
    use crate::time::Seconds;

    fn client_at(base_url: &str) -> Client {
        Client::with_config(
            "test-key",
            ClientConfig {
                base_url: base_url.to_string(),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_request_path_joins_segments() {
        let client = Client::new("test-key").unwrap();
        let request = client
            .new_request(Method::GET, None, &[&"jobs", &42, &"history", &7])
            .unwrap();

        assert_eq!(*request.method(), Method::GET);
        assert_eq!(request.url().as_str(), "https://api.cron-job.org/jobs/42/history/7");
    }

    #[test]
    fn test_request_path_keeps_base_path() {
        let client = client_at("http://localhost:8080/api/v1/");
        let request = client
            .new_request(Method::DELETE, None, &[&"jobs", &42])
            .unwrap();

        assert_eq!(request.url().path(), "/api/v1/jobs/42");
    }

    #[test]
    fn test_request_headers() {
        let client = Client::new("secret").unwrap();
        let request = client
            .new_request(Method::PUT, Some(b"{}".to_vec()), &[&"jobs"])
            .unwrap();

        let headers = request.headers();
        assert_eq!(headers[AUTHORIZATION], "Bearer secret");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(request.body().and_then(|b| b.as_bytes()), Some(&b"{}"[..]));
    }

    #[test]
    fn test_request_without_body() {
        let client = Client::new("secret").unwrap();
        let request = client.new_request(Method::GET, None, &[&"jobs"]).unwrap();
        assert!(request.body().is_none());
    }

    #[test]
    fn test_invalid_base_url() {
        let result = Client::with_config(
            "key",
            ClientConfig {
                base_url: "not a url".to_string(),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(ClientError::InvalidBaseUrl { .. })));

        let result = Client::with_config(
            "key",
            ClientConfig {
                base_url: "mailto:jobs@example.com".to_string(),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(ClientError::CannotBeABase(_))));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = Client::new("very-secret-key").unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("very-secret-key"));
        assert!(debug.contains("api.cron-job.org"));
    }

    #[test]
    fn test_job_envelope_round_trip() {
        let mut job = DetailedJob::from(Job {
            job_id: 11,
            enabled: true,
            title: "Backup".to_string(),
            save_responses: true,
            url: "https://example.com/backup".to_string(),
            next_execution: Some(Seconds(1700000000)),
            request_timeout: 30,
            request_method: RequestMethod::Post,
            schedule: Schedule {
                timezone: "UTC".to_string(),
                hours: vec![2],
                mdays: vec![-1],
                minutes: vec![15],
                months: vec![-1],
                wdays: vec![1, 3, 5],
            },
            ..Default::default()
        });
        job.auth.enable = true;
        job.auth.user = "admin".to_string();
        job.auth.password = "hunter2".to_string();
        job.notification.on_disable = true;
        job.extended_data.body = "{\"full\":true}".to_string();
        job.extended_data
            .headers
            .insert("Accept".to_string(), "application/json".to_string());

        let encoded = serde_json::to_vec(&JobEnvelope { job: &job }).unwrap();
        let decoded: JobEnvelope<DetailedJob> = serde_json::from_slice(&encoded).unwrap();

        assert_eq!(decoded.job, job);
    }

    #[test]
    fn test_job_envelope_fills_schedule_defaults() {
        let job = DetailedJob::default();

        let encoded = serde_json::to_vec(&JobEnvelope { job: &job }).unwrap();
        let decoded: JobEnvelope<DetailedJob> = serde_json::from_slice(&encoded).unwrap();

        assert_eq!(decoded.job.job.schedule.minutes, vec![-1]);
        assert_eq!(decoded.job.job.schedule.timezone, "Europe/Paris");
        assert!(job.job.schedule.minutes.is_empty());
    }
}
