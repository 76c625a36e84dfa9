use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::models::blocked_date::BlockedDateChanged;
use crate::domain::models::job::Job;
use crate::domain::ports::{CacheStore, JobRepository};
use crate::domain::services::cache_keys::CacheKeyRegistry;
use crate::error::AppError;

/// Clears a chalet's cached availability and schedules its recompute.
/// The clear completes before the triggering mutation's response is
/// sent; the refresh runs fire-and-forget through the jobs table.
pub struct CacheInvalidator {
    cache: Arc<dyn CacheStore>,
    registry: Arc<CacheKeyRegistry>,
    job_repo: Arc<dyn JobRepository>,
}

impl CacheInvalidator {
    pub fn new(
        cache: Arc<dyn CacheStore>,
        registry: Arc<CacheKeyRegistry>,
        job_repo: Arc<dyn JobRepository>,
    ) -> Self {
        Self { cache, registry, job_repo }
    }

    pub async fn on_blocked_date_changed(&self, event: &BlockedDateChanged) {
        self.invalidate(&event.chalet_id, "blocked_date_changed").await;
    }

    /// Idempotent: a repeat invalidation finds an empty registry and
    /// clears nothing. Cache and queue failures are logged, never
    /// propagated to the mutating caller.
    pub async fn invalidate(&self, chalet_id: &str, trigger: &str) {
        let keys = self.registry.drain(chalet_id);
        let mut cleared = 0usize;
        for key in &keys {
            match self.cache.forget(key).await {
                Ok(true) => cleared += 1,
                Ok(false) => {}
                Err(e) => warn!(key = %key, "failed to clear cache key: {e}"),
            }
        }
        info!(chalet_id = %chalet_id, trigger = %trigger, cleared, "availability cache invalidated");

        let job = Job::cache_refresh(chalet_id.to_string());
        if let Err(e) = self.job_repo.create(&job).await {
            let err = AppError::QueueUnavailable(e.to_string());
            warn!(chalet_id = %chalet_id, "failed to enqueue cache refresh job: {err}");
        }
    }
}
