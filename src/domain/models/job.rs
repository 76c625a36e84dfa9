use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

pub const JOB_CACHE_REFRESH: &str = "CACHE_REFRESH";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JobPayload {
    pub chalet_id: String,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Job {
    pub id: String,
    pub job_type: String,
    pub payload: Json<JobPayload>,
    pub execute_at: DateTime<Utc>,
    pub status: String,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Job {
    pub fn cache_refresh(chalet_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            job_type: JOB_CACHE_REFRESH.to_string(),
            payload: Json(JobPayload { chalet_id }),
            execute_at: Utc::now(),
            status: "PENDING".to_string(),
            error_message: None,
            created_at: Utc::now(),
        }
    }
}
