use crate::domain::{models::slot::Slot, ports::SlotRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteSlotRepo {
    pool: SqlitePool,
}

impl SqliteSlotRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl SlotRepository for SqliteSlotRepo {
    async fn create(&self, slot: &Slot) -> Result<Slot, AppError> {
        sqlx::query_as::<_, Slot>(
            r#"INSERT INTO slots (id, chalet_id, name, start_time, end_time, is_overnight, duration_hours,
               weekday_price, weekend_price, allows_extra_hours, extra_hour_price, max_extra_hours,
               available_days, is_active, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&slot.id)
            .bind(&slot.chalet_id)
            .bind(&slot.name)
            .bind(slot.start_time)
            .bind(slot.end_time)
            .bind(slot.is_overnight)
            .bind(slot.duration_hours)
            .bind(slot.weekday_price)
            .bind(slot.weekend_price)
            .bind(slot.allows_extra_hours)
            .bind(slot.extra_hour_price)
            .bind(slot.max_extra_hours)
            .bind(&slot.available_days)
            .bind(slot.is_active)
            .bind(slot.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, chalet_id: &str, id: &str) -> Result<Option<Slot>, AppError> {
        sqlx::query_as::<_, Slot>("SELECT * FROM slots WHERE chalet_id = ? AND id = ?")
            .bind(chalet_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_chalet(&self, chalet_id: &str) -> Result<Vec<Slot>, AppError> {
        sqlx::query_as::<_, Slot>("SELECT * FROM slots WHERE chalet_id = ? ORDER BY start_time ASC")
            .bind(chalet_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, slot: &Slot) -> Result<Slot, AppError> {
        sqlx::query_as::<_, Slot>(
            r#"UPDATE slots SET name = ?, start_time = ?, end_time = ?, is_overnight = ?, duration_hours = ?,
               weekday_price = ?, weekend_price = ?, allows_extra_hours = ?, extra_hour_price = ?,
               max_extra_hours = ?, available_days = ?, is_active = ?
               WHERE chalet_id = ? AND id = ?
               RETURNING *"#
        )
            .bind(&slot.name)
            .bind(slot.start_time)
            .bind(slot.end_time)
            .bind(slot.is_overnight)
            .bind(slot.duration_hours)
            .bind(slot.weekday_price)
            .bind(slot.weekend_price)
            .bind(slot.allows_extra_hours)
            .bind(slot.extra_hour_price)
            .bind(slot.max_extra_hours)
            .bind(&slot.available_days)
            .bind(slot.is_active)
            .bind(&slot.chalet_id)
            .bind(&slot.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, chalet_id: &str, id: &str) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM slots WHERE chalet_id = ? AND id = ?")
            .bind(chalet_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if res.rows_affected() == 0 {
            return Err(AppError::NotFound("Slot not found".into()));
        }
        Ok(())
    }
}
