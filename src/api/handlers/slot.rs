use axum::{extract::{State, Path}, response::IntoResponse, Json};
use std::sync::Arc;
use chrono::{NaiveTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::api::dtos::requests::{CreateSlotRequest, UpdateSlotRequest};
use crate::domain::models::slot::{weekday_from_name, Slot};
use crate::error::AppError;
use crate::state::AppState;

pub(crate) fn encode_day_names(days: &[String]) -> Result<String, AppError> {
    if days.is_empty() {
        return Err(AppError::Validation("At least one weekday is required".into()));
    }
    for day in days {
        if weekday_from_name(day).is_none() {
            return Err(AppError::Validation(format!("Unknown weekday '{}'", day)));
        }
    }
    serde_json::to_string(days).map_err(|_| AppError::Validation("Invalid weekday list".into()))
}

fn parse_clock(value: &str, field: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| AppError::Validation(format!("Invalid {} format (HH:MM)", field)))
}

pub async fn create_slot(
    State(state): State<Arc<AppState>>,
    Path(chalet_id): Path<String>,
    Json(payload): Json<CreateSlotRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Creating slot '{}' for chalet {}", payload.name, chalet_id);

    state.chalet_repo.find_by_id(&chalet_id).await?
        .ok_or(AppError::NotFound("Chalet not found".into()))?;

    let start_time = parse_clock(&payload.start_time, "start_time")?;
    let end_time = parse_clock(&payload.end_time, "end_time")?;
    let is_overnight = payload.is_overnight.unwrap_or(false);

    if !is_overnight && end_time <= start_time {
        return Err(AppError::Validation("End time must be after start time".into()));
    }
    if payload.duration_hours <= 0 {
        return Err(AppError::Validation("duration_hours must be positive".into()));
    }
    if payload.weekday_price < 0 || payload.weekend_price < 0 {
        return Err(AppError::Validation("Prices must not be negative".into()));
    }

    let slot = Slot {
        id: Uuid::new_v4().to_string(),
        chalet_id: chalet_id.clone(),
        name: payload.name,
        start_time,
        end_time,
        is_overnight,
        duration_hours: payload.duration_hours,
        weekday_price: payload.weekday_price,
        weekend_price: payload.weekend_price,
        allows_extra_hours: payload.allows_extra_hours.unwrap_or(false),
        extra_hour_price: payload.extra_hour_price.unwrap_or(0),
        max_extra_hours: payload.max_extra_hours.unwrap_or(0),
        available_days: encode_day_names(&payload.available_days)?,
        is_active: true,
        created_at: Utc::now(),
    };

    let created = state.slot_repo.create(&slot).await?;
    state.invalidator.invalidate(&chalet_id, "slot_created").await;
    Ok(Json(created))
}

pub async fn list_slots(
    State(state): State<Arc<AppState>>,
    Path(chalet_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.chalet_repo.find_by_id(&chalet_id).await?
        .ok_or(AppError::NotFound("Chalet not found".into()))?;

    let slots = state.slot_repo.list_by_chalet(&chalet_id).await?;
    Ok(Json(slots))
}

pub async fn update_slot(
    State(state): State<Arc<AppState>>,
    Path((chalet_id, slot_id)): Path<(String, String)>,
    Json(payload): Json<UpdateSlotRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut slot = state.slot_repo.find_by_id(&chalet_id, &slot_id).await?
        .ok_or(AppError::NotFound("Slot not found".into()))?;

    if let Some(val) = payload.name { slot.name = val; }
    if let Some(val) = payload.start_time { slot.start_time = parse_clock(&val, "start_time")?; }
    if let Some(val) = payload.end_time { slot.end_time = parse_clock(&val, "end_time")?; }
    if let Some(val) = payload.is_overnight { slot.is_overnight = val; }
    if let Some(val) = payload.duration_hours { slot.duration_hours = val; }
    if let Some(val) = payload.weekday_price { slot.weekday_price = val; }
    if let Some(val) = payload.weekend_price { slot.weekend_price = val; }
    if let Some(val) = payload.allows_extra_hours { slot.allows_extra_hours = val; }
    if let Some(val) = payload.extra_hour_price { slot.extra_hour_price = val; }
    if let Some(val) = payload.max_extra_hours { slot.max_extra_hours = val; }
    if let Some(val) = payload.available_days { slot.available_days = encode_day_names(&val)?; }
    if let Some(val) = payload.is_active { slot.is_active = val; }

    if !slot.is_overnight && slot.end_time <= slot.start_time {
        return Err(AppError::Validation("End time must be after start time".into()));
    }
    if slot.duration_hours <= 0 {
        return Err(AppError::Validation("duration_hours must be positive".into()));
    }

    let updated = state.slot_repo.update(&slot).await?;
    state.invalidator.invalidate(&chalet_id, "slot_updated").await;
    info!("Slot updated: {}", slot_id);
    Ok(Json(updated))
}

pub async fn delete_slot(
    State(state): State<Arc<AppState>>,
    Path((chalet_id, slot_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.slot_repo.delete(&chalet_id, &slot_id).await?;
    state.invalidator.invalidate(&chalet_id, "slot_deleted").await;
    info!("Slot deleted: {}", slot_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
