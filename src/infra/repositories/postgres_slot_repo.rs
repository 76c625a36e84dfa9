use crate::domain::{models::slot::Slot, ports::SlotRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresSlotRepo {
    pool: PgPool,
}

impl PostgresSlotRepo {
    pub fn new(pool: PgPool) -> Self { Self { pool } }
}

#[async_trait]
impl SlotRepository for PostgresSlotRepo {
    async fn create(&self, slot: &Slot) -> Result<Slot, AppError> {
        sqlx::query_as::<_, Slot>(
            r#"INSERT INTO slots (id, chalet_id, name, start_time, end_time, is_overnight, duration_hours,
               weekday_price, weekend_price, allows_extra_hours, extra_hour_price, max_extra_hours,
               available_days, is_active, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
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
        sqlx::query_as::<_, Slot>("SELECT * FROM slots WHERE chalet_id = $1 AND id = $2")
            .bind(chalet_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_chalet(&self, chalet_id: &str) -> Result<Vec<Slot>, AppError> {
        sqlx::query_as::<_, Slot>("SELECT * FROM slots WHERE chalet_id = $1 ORDER BY start_time ASC")
            .bind(chalet_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, slot: &Slot) -> Result<Slot, AppError> {
        sqlx::query_as::<_, Slot>(
            r#"UPDATE slots SET name = $1, start_time = $2, end_time = $3, is_overnight = $4, duration_hours = $5,
               weekday_price = $6, weekend_price = $7, allows_extra_hours = $8, extra_hour_price = $9,
               max_extra_hours = $10, available_days = $11, is_active = $12
               WHERE chalet_id = $13 AND id = $14
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
        let res = sqlx::query("DELETE FROM slots WHERE chalet_id = $1 AND id = $2")
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
