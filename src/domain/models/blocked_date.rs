use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct BlockedDate {
    pub id: String,
    pub chalet_id: String,
    pub date: NaiveDate,
    pub slot_id: Option<String>,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl BlockedDate {
    pub fn new(chalet_id: String, date: NaiveDate, slot_id: Option<String>, reason: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            chalet_id,
            date,
            slot_id,
            reason,
            created_at: Utc::now(),
        }
    }

    /// A row without a slot scope blocks every slot that day.
    pub fn blocks_whole_day(&self) -> bool {
        self.slot_id.is_none()
    }

    pub fn blocks_slot(&self, slot_id: &str) -> bool {
        self.blocks_whole_day() || self.slot_id.as_deref() == Some(slot_id)
    }
}

/// Emitted synchronously after a blocked-date mutation commits.
#[derive(Debug, Clone)]
pub struct BlockedDateChanged {
    pub chalet_id: String,
    pub date: NaiveDate,
}
