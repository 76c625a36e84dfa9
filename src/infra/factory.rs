use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::ports::{BlockedDateRepository, ChaletRepository, JobRepository, SlotRepository};
use crate::domain::services::availability_service::AvailabilityService;
use crate::domain::services::cache_keys::CacheKeyRegistry;
use crate::domain::services::invalidation::CacheInvalidator;
use crate::infra::cache::memory_cache::MemoryCacheStore;
use crate::infra::repositories::{
    postgres_blocked_date_repo::PostgresBlockedDateRepo, postgres_chalet_repo::PostgresChaletRepo,
    postgres_job_repo::PostgresJobRepo, postgres_slot_repo::PostgresSlotRepo,
    sqlite_blocked_date_repo::SqliteBlockedDateRepo, sqlite_chalet_repo::SqliteChaletRepo,
    sqlite_job_repo::SqliteJobRepo, sqlite_slot_repo::SqliteSlotRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        assemble(
            config,
            Arc::new(PostgresChaletRepo::new(pool.clone())),
            Arc::new(PostgresSlotRepo::new(pool.clone())),
            Arc::new(PostgresBlockedDateRepo::new(pool.clone())),
            Arc::new(PostgresJobRepo::new(pool.clone())),
        )
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        assemble(
            config,
            Arc::new(SqliteChaletRepo::new(pool.clone())),
            Arc::new(SqliteSlotRepo::new(pool.clone())),
            Arc::new(SqliteBlockedDateRepo::new(pool.clone())),
            Arc::new(SqliteJobRepo::new(pool.clone())),
        )
    }
}

fn assemble(
    config: &Config,
    chalet_repo: Arc<dyn ChaletRepository>,
    slot_repo: Arc<dyn SlotRepository>,
    blocked_date_repo: Arc<dyn BlockedDateRepository>,
    job_repo: Arc<dyn JobRepository>,
) -> AppState {
    let cache = Arc::new(MemoryCacheStore::new());
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

    AppState {
        config: config.clone(),
        chalet_repo,
        slot_repo,
        blocked_date_repo,
        job_repo,
        cache,
        availability,
        invalidator,
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
