//! Client for the [cron-job.org](https://cron-job.org) REST API.
//!
//! ```no_run
//! use cronjob::{Client, DetailedJob, Job, JobApi};
//!
//! # async fn run() -> cronjob::Result<()> {
//! let client = Client::new(std::env::var("CRONJOB_API_KEY").unwrap_or_default())?;
//! let id = client
//!     .create_job(&DetailedJob::from(Job {
//!         title: "ping".to_string(),
//!         url: "https://example.com".to_string(),
//!         ..Default::default()
//!     }))
//!     .await?;
//! println!("created job {}", id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod time;

pub use client::{Client, JobApi};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use model::{
    DetailedJob, HistoryItem, HistoryItemStats, Job, JobAuth, JobExtendedData, JobHistory,
    JobNotificationSettings, JobStatus, JobType, RequestMethod, Schedule,
};
pub use time::{Microseconds, Milliseconds, Seconds};
