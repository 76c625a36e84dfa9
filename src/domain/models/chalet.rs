use serde::{Deserialize, Serialize};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::models::slot::parse_day_names;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Chalet {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub city: Option<String>,
    pub currency: String,
    pub weekend_days: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Chalet {
    pub fn new(name: String, slug: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            slug,
            city: None,
            currency: "SAR".to_string(),
            weekend_days: r#"["friday","saturday"]"#.to_string(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        parse_day_names(&self.weekend_days).contains(&date.weekday())
    }
}
