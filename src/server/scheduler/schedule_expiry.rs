use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::schedule::ScheduleService};

/// Starts the invitation expiry scheduler.
///
/// Runs every minute and moves TEAM schedules whose invitation is still PENDING at kickoff
/// to REJECTED.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = process_expired_invitations(&db).await {
                tracing::error!("Error rejecting expired invitations: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Invitation expiry scheduler started");

    Ok(())
}

async fn process_expired_invitations(db: &DatabaseConnection) -> Result<(), AppError> {
    let rejected = ScheduleService::new(db)
        .reject_expired_invitations(Utc::now())
        .await?;

    if rejected > 0 {
        tracing::info!("Rejected {} expired invitation(s)", rejected);
    }

    Ok(())
}
