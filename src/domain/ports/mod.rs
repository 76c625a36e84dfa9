use crate::domain::models::{
    blocked_date::BlockedDate, chalet::Chalet, job::Job, slot::Slot,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

#[async_trait]
pub trait ChaletRepository: Send + Sync {
    async fn create(&self, chalet: &Chalet) -> Result<Chalet, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Chalet>, AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Chalet>, AppError>;
    async fn list(&self) -> Result<Vec<Chalet>, AppError>;
    async fn update(&self, chalet: &Chalet) -> Result<Chalet, AppError>;
}

#[async_trait]
pub trait SlotRepository: Send + Sync {
    async fn create(&self, slot: &Slot) -> Result<Slot, AppError>;
    async fn find_by_id(&self, chalet_id: &str, id: &str) -> Result<Option<Slot>, AppError>;
    async fn list_by_chalet(&self, chalet_id: &str) -> Result<Vec<Slot>, AppError>;
    async fn update(&self, slot: &Slot) -> Result<Slot, AppError>;
    async fn delete(&self, chalet_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait BlockedDateRepository: Send + Sync {
    async fn create(&self, blocked: &BlockedDate) -> Result<BlockedDate, AppError>;
    async fn find_by_id(&self, chalet_id: &str, id: &str) -> Result<Option<BlockedDate>, AppError>;
    async fn list_by_date(&self, chalet_id: &str, date: NaiveDate) -> Result<Vec<BlockedDate>, AppError>;
    async fn list_by_range(&self, chalet_id: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<BlockedDate>, AppError>;
    async fn delete(&self, chalet_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: &Job) -> Result<Job, AppError>;
    async fn find_pending(&self, limit: i32) -> Result<Vec<Job>, AppError>;
    async fn list_by_chalet(&self, chalet_id: &str) -> Result<Vec<Job>, AppError>;
    async fn update_status(&self, id: &str, status: &str, error_message: Option<String>) -> Result<(), AppError>;
}

/// Plain key-value cache. No scan or prefix deletion is assumed; exact
/// keys are tracked by the invalidation registry instead.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), AppError>;
    async fn forget(&self, key: &str) -> Result<bool, AppError>;
}
