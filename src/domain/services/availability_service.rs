use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{Duration, NaiveDate, Utc};
use tracing::warn;

use crate::config::CacheConfig;
use crate::domain::models::chalet::Chalet;
use crate::domain::models::slot::BookingType;
use crate::domain::ports::{BlockedDateRepository, CacheStore, ChaletRepository, SlotRepository};
use crate::domain::services::availability::{evaluate_slot, unavailable_dates_in_range, Unavailability};
use crate::domain::services::cache_keys::{range_key, standard_ranges, CacheKeyRegistry, CachedUnavailableDates};
use crate::error::AppError;

/// Outcome of a single-slot availability check.
#[derive(Debug, Clone)]
pub struct SlotCheck {
    pub available: bool,
    pub reason: Option<Unavailability>,
}

pub struct AvailabilityService {
    chalet_repo: Arc<dyn ChaletRepository>,
    slot_repo: Arc<dyn SlotRepository>,
    blocked_repo: Arc<dyn BlockedDateRepository>,
    cache: Arc<dyn CacheStore>,
    registry: Arc<CacheKeyRegistry>,
    cache_cfg: CacheConfig,
}

impl AvailabilityService {
    pub fn new(
        chalet_repo: Arc<dyn ChaletRepository>,
        slot_repo: Arc<dyn SlotRepository>,
        blocked_repo: Arc<dyn BlockedDateRepository>,
        cache: Arc<dyn CacheStore>,
        registry: Arc<CacheKeyRegistry>,
        cache_cfg: CacheConfig,
    ) -> Self {
        Self { chalet_repo, slot_repo, blocked_repo, cache, registry, cache_cfg }
    }

    async fn resolve_chalet(&self, chalet_id: &str) -> Result<Chalet, AppError> {
        self.chalet_repo
            .find_by_id(chalet_id)
            .await?
            .filter(|c| c.is_active)
            .ok_or(AppError::NotFound("Chalet not found".into()))
    }

    /// Pure read. A slot that does not exist, is inactive, or is never
    /// offered on the requested weekday resolves to NotFound; blocked
    /// answers come back with a reason.
    pub async fn check_slot(
        &self,
        chalet_id: &str,
        slot_id: &str,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<SlotCheck, AppError> {
        if date < today {
            return Err(AppError::Validation("Date is in the past".into()));
        }

        self.resolve_chalet(chalet_id).await?;

        let slots = self.slot_repo.list_by_chalet(chalet_id).await?;
        let slot = slots
            .iter()
            .find(|s| s.id == slot_id && s.is_active)
            .ok_or(AppError::NotFound("Slot not found".into()))?;

        let blocked = self.blocked_repo.list_by_date(chalet_id, date).await?;

        match evaluate_slot(slot, &slots, &blocked, date) {
            Some(Unavailability::DayNotOffered) => {
                Err(AppError::NotFound("Slot is not offered on this weekday".into()))
            }
            Some(reason) => Ok(SlotCheck { available: false, reason: Some(reason) }),
            None => Ok(SlotCheck { available: true, reason: None }),
        }
    }

    pub async fn unavailable_dates(
        &self,
        chalet_id: &str,
        booking_type: BookingType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, AppError> {
        if end < start {
            return Err(AppError::Validation("end must not be before start".into()));
        }
        if (end - start).num_days() >= self.cache_cfg.max_range_days {
            return Err(AppError::Validation(format!(
                "Date range too large (max {} days)",
                self.cache_cfg.max_range_days
            )));
        }

        let key = range_key(chalet_id, booking_type, start, end);

        match self.cache.get(&key).await {
            Ok(Some(raw)) => {
                if let Ok(cached) = serde_json::from_str::<CachedUnavailableDates>(&raw) {
                    return Ok(cached.dates);
                }
                // Corrupt entry: fall through and recompute.
            }
            Ok(None) => {}
            Err(e) => warn!(key = %key, "cache read failed, recomputing: {e}"),
        }

        let dates = self.compute_unavailable(chalet_id, booking_type, start, end).await?;
        self.store(chalet_id, &key, &dates).await;
        Ok(dates)
    }

    pub async fn available_dates(
        &self,
        chalet_id: &str,
        booking_type: BookingType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, AppError> {
        let unavailable = self.unavailable_dates(chalet_id, booking_type, start, end).await?;

        let mut dates = Vec::new();
        let mut current = start;
        while current <= end {
            if !unavailable.contains(&current) {
                dates.push(current);
            }
            current += Duration::days(1);
        }
        Ok(dates)
    }

    async fn compute_unavailable(
        &self,
        chalet_id: &str,
        booking_type: BookingType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, AppError> {
        self.resolve_chalet(chalet_id).await?;
        let slots = self.slot_repo.list_by_chalet(chalet_id).await?;
        let blocked = self.blocked_repo.list_by_range(chalet_id, start, end).await?;
        Ok(unavailable_dates_in_range(booking_type, &slots, &blocked, start, end))
    }

    /// Cache write failures degrade to uncached operation; the key is
    /// registered only once the entry actually exists.
    async fn store(&self, chalet_id: &str, key: &str, dates: &[NaiveDate]) {
        let entry = CachedUnavailableDates { dates: dates.to_vec(), computed_at: Utc::now() };
        let raw = match serde_json::to_string(&entry) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %key, "failed to serialize cache entry: {e}");
                return;
            }
        };
        let ttl = StdDuration::from_secs(self.cache_cfg.ttl_secs);
        match self.cache.set(key, raw, ttl).await {
            Ok(()) => self.registry.record(chalet_id, key.to_string()),
            Err(e) => warn!(key = %key, "cache write failed: {e}"),
        }
    }

    /// Recomputes the standard ranges for one chalet and repopulates
    /// the cache. Runs from the background refresh job. Returns the
    /// number of entries written.
    pub async fn warm_chalet(&self, chalet_id: &str, today: NaiveDate) -> Result<usize, AppError> {
        let mut warmed = 0;
        for (start, end) in standard_ranges(today, self.cache_cfg.horizon_months) {
            for booking_type in [BookingType::DayUse, BookingType::Overnight] {
                let dates = self.compute_unavailable(chalet_id, booking_type, start, end).await?;
                let key = range_key(chalet_id, booking_type, start, end);
                self.store(chalet_id, &key, &dates).await;
                warmed += 1;
            }
        }
        Ok(warmed)
    }
}
