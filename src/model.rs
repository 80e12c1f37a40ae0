//! Types mirroring the cron-job.org JSON schema.

pub mod enums;
pub mod history;
pub mod job;
pub mod schedule;

pub use enums::{JobStatus, JobType, RequestMethod};
pub use history::{HistoryItem, HistoryItemStats, JobHistory};
pub use job::{DetailedJob, Job, JobAuth, JobExtendedData, JobNotificationSettings};
pub use schedule::Schedule;

use serde::{Deserialize, Deserializer};

/// Decodes a JSON `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
