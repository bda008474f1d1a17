use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::score::SharedScoreStore,
    error::AppError,
    scheduler::schedule::Schedule,
    service::{
        gateway::{ChannelResolver, PlatformGateway},
        report::ReportService,
    },
};

/// Starts the leaderboard report scheduler
///
/// This scheduler ticks every minute and checks whether any trigger of the
/// schedule fired since the previous tick. When one did, the leaderboard is posted
/// to the first eligible channel and the scores are reset.
///
/// Triggers that fired before the scheduler started are never replayed.
///
/// # Arguments
/// - `schedule`: Report triggers
/// - `scores`: Shared score store
/// - `gateway`: Discord gateway used to find the channel and post the report
pub async fn start_scheduler<G>(
    schedule: Schedule,
    scores: SharedScoreStore,
    gateway: Arc<G>,
) -> Result<(), AppError>
where
    G: PlatformGateway + ChannelResolver + 'static,
{
    let started_at = Utc::now();
    for trigger in &schedule.triggers {
        if trigger.is_expired(started_at) {
            tracing::warn!("Skipping {}: already in the past", trigger);
        } else {
            tracing::info!("Scheduled {}", trigger);
        }
    }

    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_schedule = Arc::new(schedule);
    let job_scores = scores.clone();
    let job_gateway = gateway.clone();
    let last_tick = Arc::new(Mutex::new(started_at));

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let schedule = job_schedule.clone();
        let scores = job_scores.clone();
        let gateway = job_gateway.clone();
        let last_tick = last_tick.clone();

        Box::pin(async move {
            let now = Utc::now();
            let since = std::mem::replace(&mut *last_tick.lock().await, now);

            process_due_reports(
                &schedule,
                &scores,
                gateway.as_ref(),
                gateway.as_ref(),
                since,
                now,
            )
            .await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Leaderboard report scheduler started");

    Ok(())
}

/// Runs the report for the window `(since, now]` if any trigger fired in it
///
/// Several triggers firing in the same window produce a single report, since the
/// first one already resets the scores.
///
/// # Returns
/// - `Some(Ok(usize))` - Report posted, number of players reset
/// - `Some(Err(AppError))` - Report due but not delivered; scores kept
/// - `None` - Nothing due
pub async fn process_due_reports(
    schedule: &Schedule,
    scores: &SharedScoreStore,
    gateway: &dyn PlatformGateway,
    resolver: &dyn ChannelResolver,
    since: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<Result<usize, AppError>> {
    let due = schedule.due(since, now);
    if due.is_empty() {
        tracing::debug!("No report due between {} and {}", since, now);
        return None;
    }

    for trigger in &due {
        tracing::info!("Running {}", trigger);
    }

    let result = ReportService::new(scores, gateway)
        .post_scheduled_report(resolver)
        .await;

    match &result {
        Ok(reported) => {
            tracing::info!("Posted scheduled leaderboard, reset {} players", reported)
        }
        Err(e) => tracing::error!("Scheduled leaderboard not posted, scores kept: {}", e),
    }

    Some(result)
}
