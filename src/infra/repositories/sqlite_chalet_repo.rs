use crate::domain::{models::chalet::Chalet, ports::ChaletRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteChaletRepo {
    pool: SqlitePool,
}

impl SqliteChaletRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl ChaletRepository for SqliteChaletRepo {
    async fn create(&self, chalet: &Chalet) -> Result<Chalet, AppError> {
        sqlx::query_as::<_, Chalet>(
            "INSERT INTO chalets (id, name, slug, city, currency, weekend_days, is_active, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(&chalet.id)
            .bind(&chalet.name)
            .bind(&chalet.slug)
            .bind(&chalet.city)
            .bind(&chalet.currency)
            .bind(&chalet.weekend_days)
            .bind(chalet.is_active)
            .bind(chalet.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Chalet>, AppError> {
        sqlx::query_as::<_, Chalet>("SELECT * FROM chalets WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Chalet>, AppError> {
        sqlx::query_as::<_, Chalet>("SELECT * FROM chalets WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Chalet>, AppError> {
        sqlx::query_as::<_, Chalet>("SELECT * FROM chalets ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, chalet: &Chalet) -> Result<Chalet, AppError> {
        sqlx::query_as::<_, Chalet>(
            "UPDATE chalets SET name = ?, slug = ?, city = ?, currency = ?, weekend_days = ?, is_active = ? WHERE id = ? RETURNING *"
        )
            .bind(&chalet.name)
            .bind(&chalet.slug)
            .bind(&chalet.city)
            .bind(&chalet.currency)
            .bind(&chalet.weekend_days)
            .bind(chalet.is_active)
            .bind(&chalet.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
