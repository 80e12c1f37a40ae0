pub const APP_NAME: &str = "cronjob";
pub const DEFAULT_CONF: &str = "cronjob.toml";

pub const API_URL: &str = "https://api.cron-job.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Timeout the service applies to a configured job's own calls.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: i64 = 10;

/// Timezone sent when a schedule leaves it empty.
pub const DEFAULT_TIMEZONE: &str = "Europe/Paris";

/// Sentinel list matching every unit of a schedule field.
pub const EVERY: &[i32] = &[-1];
