use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::models::slot::BookingType;

pub fn range_key(chalet_id: &str, booking_type: BookingType, start: NaiveDate, end: NaiveDate) -> String {
    format!("availability:{}:{}:{}:{}", chalet_id, booking_type.as_str(), start, end)
}

/// Cached view of a date range: the dates that cannot be booked.
/// Derived and disposable; a dropped entry is recomputed on demand.
#[derive(Debug, Serialize, Deserialize)]
pub struct CachedUnavailableDates {
    pub dates: Vec<NaiveDate>,
    pub computed_at: DateTime<Utc>,
}

/// Tracks which cache keys exist per chalet so invalidation can forget
/// exactly those keys instead of guessing from a fixed enumeration.
#[derive(Default)]
pub struct CacheKeyRegistry {
    keys: DashMap<String, HashSet<String>>,
}

impl CacheKeyRegistry {
    pub fn new() -> Self {
        Self { keys: DashMap::new() }
    }

    pub fn record(&self, chalet_id: &str, key: String) {
        self.keys.entry(chalet_id.to_string()).or_default().insert(key);
    }

    /// Removes and returns every key registered for the chalet.
    pub fn drain(&self, chalet_id: &str) -> Vec<String> {
        self.keys
            .remove(chalet_id)
            .map(|(_, set)| set.into_iter().collect())
            .unwrap_or_default()
    }
}

/// Month-aligned ranges the refresh job precomputes, starting with the
/// month containing `today`.
pub fn standard_ranges(today: NaiveDate, horizon_months: u32) -> Vec<(NaiveDate, NaiveDate)> {
    let mut ranges = Vec::new();
    let first_of_month = today.with_day(1).unwrap_or(today);
    for offset in 0..horizon_months {
        let start = first_of_month + Months::new(offset);
        let end = start + Months::new(1) - Duration::days(1);
        ranges.push((start, end));
    }
    ranges
}
