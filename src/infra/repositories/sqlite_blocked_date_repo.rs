use crate::domain::{models::blocked_date::BlockedDate, ports::BlockedDateRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use chrono::NaiveDate;

pub struct SqliteBlockedDateRepo {
    pool: SqlitePool,
}

impl SqliteBlockedDateRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl BlockedDateRepository for SqliteBlockedDateRepo {
    async fn create(&self, blocked: &BlockedDate) -> Result<BlockedDate, AppError> {
        sqlx::query_as::<_, BlockedDate>(
            "INSERT INTO blocked_dates (id, chalet_id, date, slot_id, reason, created_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(&blocked.id)
            .bind(&blocked.chalet_id)
            .bind(blocked.date)
            .bind(&blocked.slot_id)
            .bind(&blocked.reason)
            .bind(blocked.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, chalet_id: &str, id: &str) -> Result<Option<BlockedDate>, AppError> {
        sqlx::query_as::<_, BlockedDate>(
            "SELECT * FROM blocked_dates WHERE chalet_id = ? AND id = ?"
        )
            .bind(chalet_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_date(&self, chalet_id: &str, date: NaiveDate) -> Result<Vec<BlockedDate>, AppError> {
        sqlx::query_as::<_, BlockedDate>(
            "SELECT * FROM blocked_dates WHERE chalet_id = ? AND date = ?"
        )
            .bind(chalet_id)
            .bind(date)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_range(&self, chalet_id: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<BlockedDate>, AppError> {
        sqlx::query_as::<_, BlockedDate>(
            "SELECT * FROM blocked_dates WHERE chalet_id = ? AND date >= ? AND date <= ?"
        )
            .bind(chalet_id)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, chalet_id: &str, id: &str) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM blocked_dates WHERE chalet_id = ? AND id = ?")
            .bind(chalet_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if res.rows_affected() == 0 {
            return Err(AppError::NotFound("Blocked date not found".into()));
        }
        Ok(())
    }
}
