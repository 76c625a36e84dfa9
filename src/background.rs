use std::sync::Arc;
use std::time::Duration;
use chrono::Utc;
use tokio::time::sleep;
use tracing::{error, info, info_span, Instrument};

use crate::domain::models::job::{Job, JOB_CACHE_REFRESH};
use crate::error::AppError;
use crate::state::AppState;

pub async fn start_background_worker(state: Arc<AppState>) {
    info!("Starting cache refresh worker...");

    loop {
        match state.job_repo.find_pending(10).await {
            Ok(jobs) => {
                for job in jobs {
                    let span = info_span!(
                        "background_job",
                        job_id = %job.id,
                        job_type = %job.job_type,
                        chalet_id = %job.payload.chalet_id
                    );

                    let state = state.clone();

                    async move {
                        info!("Processing job: {}", job.job_type);
                        match process_job(&state, &job).await {
                            Ok(_) => {
                                info!("Job completed successfully");
                                if let Err(e) = state.job_repo.update_status(&job.id, "COMPLETED", None).await {
                                    error!("Failed to mark job as completed: {:?}", e);
                                }
                            }
                            Err(e) => {
                                let err_msg = format!("{}", e);
                                error!("Job failed with error: {}", err_msg);
                                if let Err(up_err) = state.job_repo.update_status(&job.id, "FAILED", Some(err_msg)).await {
                                    error!("Failed to mark job as failed: {:?}", up_err);
                                }
                            }
                        }
                    }
                        .instrument(span)
                        .await;
                }
            }
            Err(e) => error!("Failed to fetch pending jobs: {:?}", e),
        }
        sleep(Duration::from_secs(5)).await;
    }
}

async fn process_job(state: &Arc<AppState>, job: &Job) -> Result<(), AppError> {
    match job.job_type.as_str() {
        JOB_CACHE_REFRESH => {
            let chalet_id = &job.payload.chalet_id;
            let warmed = state.availability.warm_chalet(chalet_id, Utc::now().date_naive()).await?;
            info!("Rewarmed {} cache entries for chalet {}", warmed, chalet_id);
            Ok(())
        }
        other => Err(AppError::InternalWithMsg(format!("Unknown job type {}", other))),
    }
}
