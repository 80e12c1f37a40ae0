use anyhow::Result;
use cronjob::{config, constants, Client, JobApi};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let settings = config::load(constants::DEFAULT_CONF)?;
    let client = Client::with_config(settings.api_key.clone(), settings.client_config())?;

    if let Some(job) = &settings.job {
        let job_id = client.create_job(&job.to_detailed_job()).await?;
        info!(job_id, title = %job.title, "job created");
    }

    for job in client.list_jobs().await? {
        info!(
            job_id = job.job_id,
            enabled = job.enabled,
            status = ?job.last_status,
            url = %job.url,
            "{}",
            job.title
        );
    }

    Ok(())
}
