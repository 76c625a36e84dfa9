use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cache: CacheConfig,
}

/// Tuning for the availability cache and its background refresh.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Seconds a cached date-range entry stays valid. Default: 3600.
    pub ttl_secs: u64,
    /// Months ahead (including the current one) the refresh job
    /// precomputes per chalet. Default: 3.
    pub horizon_months: u32,
    /// Largest date span a single range query may cover. Default: 366.
    pub max_range_days: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 3600,
            horizon_months: 3,
            max_range_days: 366,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = CacheConfig::default();
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            cache: CacheConfig {
                ttl_secs: env::var("CACHE_TTL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.ttl_secs),
                horizon_months: env::var("CACHE_HORIZON_MONTHS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.horizon_months),
                max_range_days: defaults.max_range_days,
            },
        }
    }
}
