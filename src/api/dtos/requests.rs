use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateChaletRequest {
    pub name: String,
    pub slug: String,
    pub city: Option<String>,
    pub currency: Option<String>,
    pub weekend_days: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct CreateSlotRequest {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub is_overnight: Option<bool>,
    pub duration_hours: i32,
    pub weekday_price: i64,
    pub weekend_price: i64,
    pub allows_extra_hours: Option<bool>,
    pub extra_hour_price: Option<i64>,
    pub max_extra_hours: Option<i32>,
    pub available_days: Vec<String>,
}

#[derive(Deserialize)]
pub struct UpdateSlotRequest {
    pub name: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_overnight: Option<bool>,
    pub duration_hours: Option<i32>,
    pub weekday_price: Option<i64>,
    pub weekend_price: Option<i64>,
    pub allows_extra_hours: Option<bool>,
    pub extra_hour_price: Option<i64>,
    pub max_extra_hours: Option<i32>,
    pub available_days: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateBlockedDateRequest {
    pub date: String,
    pub slot_id: Option<String>,
    pub reason: Option<String>,
}

#[derive(Deserialize)]
pub struct PriceRequest {
    pub date: String,
    pub extra_hours: Option<i32>,
}
