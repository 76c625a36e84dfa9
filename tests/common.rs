use chalet_backend::{
    api::router::create_router,
    background::start_background_worker,
    config::{CacheConfig, Config},
    domain::ports::CacheStore,
    domain::services::availability_service::AvailabilityService,
    domain::services::cache_keys::CacheKeyRegistry,
    domain::services::invalidation::CacheInvalidator,
    error::AppError,
    infra::cache::memory_cache::MemoryCacheStore,
    infra::repositories::{
        sqlite_blocked_date_repo::SqliteBlockedDateRepo,
        sqlite_chalet_repo::SqliteChaletRepo,
        sqlite_job_repo::SqliteJobRepo,
        sqlite_slot_repo::SqliteSlotRepo,
    },
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use axum::Router;
use uuid::Uuid;

/// Cache store that always fails, for degradation coverage.
#[allow(dead_code)]
pub struct FailingCacheStore;

#[async_trait]
impl CacheStore for FailingCacheStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, AppError> {
        Err(AppError::CacheUnavailable("cache store down".into()))
    }

    async fn set(&self, _key: &str, _value: String, _ttl: Duration) -> Result<(), AppError> {
        Err(AppError::CacheUnavailable("cache store down".into()))
    }

    async fn forget(&self, _key: &str) -> Result<bool, AppError> {
        Err(AppError::CacheUnavailable("cache store down".into()))
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_cache(Arc::new(MemoryCacheStore::new())).await
    }

    pub async fn with_cache(cache: Arc<dyn CacheStore>) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            cache: CacheConfig::default(),
        };

        let chalet_repo = Arc::new(SqliteChaletRepo::new(pool.clone()));
        let slot_repo = Arc::new(SqliteSlotRepo::new(pool.clone()));
        let blocked_date_repo = Arc::new(SqliteBlockedDateRepo::new(pool.clone()));
        let job_repo = Arc::new(SqliteJobRepo::new(pool.clone()));
        let registry = Arc::new(CacheKeyRegistry::new());

        let availability = Arc::new(AvailabilityService::new(
            chalet_repo.clone(),
            slot_repo.clone(),
            blocked_date_repo.clone(),
            cache.clone(),
            registry.clone(),
            config.cache.clone(),
        ));

        let invalidator = Arc::new(CacheInvalidator::new(
            cache.clone(),
            registry.clone(),
            job_repo.clone(),
        ));

        let state = Arc::new(AppState {
            config,
            chalet_repo,
            slot_repo,
            blocked_date_repo,
            job_repo,
            cache,
            availability,
            invalidator,
        });

        // Start Background Worker
        let worker_state = state.clone();
        tokio::spawn(async move {
            start_background_worker(worker_state).await;
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
