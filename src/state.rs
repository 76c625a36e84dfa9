use std::sync::Arc;
use crate::domain::ports::{
    BlockedDateRepository, CacheStore, ChaletRepository, JobRepository, SlotRepository,
};
use crate::domain::services::availability_service::AvailabilityService;
use crate::domain::services::invalidation::CacheInvalidator;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub chalet_repo: Arc<dyn ChaletRepository>,
    pub slot_repo: Arc<dyn SlotRepository>,
    pub blocked_date_repo: Arc<dyn BlockedDateRepository>,
    pub job_repo: Arc<dyn JobRepository>,
    pub cache: Arc<dyn CacheStore>,
    pub availability: Arc<AvailabilityService>,
    pub invalidator: Arc<CacheInvalidator>,
}
