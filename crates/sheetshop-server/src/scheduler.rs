//! Optional background refresh of the shop cache.
//!
//! Only started when `SHEETSHOP_REFRESH_CRON` is set. Request handling never
//! refreshes implicitly; this job is the sole automatic writer.

use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::api::AppState;

/// Builds and starts a scheduler running one cache-refresh job on `cron`.
///
/// The returned [`JobScheduler`] must be kept alive for the lifetime of the
/// process; dropping it stops the job.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if `cron` is not a valid schedule or the
/// scheduler fails to start.
pub async fn build_scheduler(
    state: AppState,
    cron: &str,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;
    register_refresh_job(&scheduler, state, cron).await?;
    scheduler.start().await?;
    tracing::info!(cron, "scheduler: cache refresh job registered");
    Ok(scheduler)
}

async fn register_refresh_job(
    scheduler: &JobScheduler,
    state: AppState,
    cron: &str,
) -> Result<(), JobSchedulerError> {
    let job = Job::new_async(cron, move |_uuid, _lock| {
        let state = state.clone();

        Box::pin(async move {
            run_refresh(&state).await;
        })
    })?;

    scheduler.add(job).await?;
    Ok(())
}

/// Refreshes the cache once, logging instead of propagating failures.
pub async fn run_refresh(state: &AppState) {
    match state
        .cache
        .refresh(&state.sheets, &state.customers_sheet_url)
        .await
    {
        Ok(outcome) => tracing::info!(
            count = outcome.count,
            skipped = outcome.skipped,
            "scheduler: shop cache refreshed"
        ),
        Err(e) => tracing::error!(error = %e, "scheduler: shop cache refresh failed"),
    }
}
