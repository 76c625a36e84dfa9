use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::ports::CacheStore;
use crate::error::AppError;

struct CacheEntry {
    value: String,
    expires_at: Instant,
}

/// In-process TTL cache. Expired entries are dropped lazily on read.
#[derive(Default)]
pub struct MemoryCacheStore {
    entries: DashMap<String, CacheEntry>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self { entries: DashMap::new() }
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let expired = match self.entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => {
                return Ok(Some(entry.value.clone()));
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            self.entries.remove(key);
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), AppError> {
        self.entries.insert(
            key.to_string(),
            CacheEntry { value, expires_at: Instant::now() + ttl },
        );
        Ok(())
    }

    async fn forget(&self, key: &str) -> Result<bool, AppError> {
        Ok(self.entries.remove(key).is_some())
    }
}
