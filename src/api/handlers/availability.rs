use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use std::collections::HashMap;
use std::sync::Arc;
use chrono::{NaiveDate, Utc};

use crate::api::dtos::responses::AvailabilityResponse;
use crate::domain::models::slot::BookingType;
use crate::error::AppError;
use crate::state::AppState;

pub async fn check_availability(
    State(state): State<Arc<AppState>>,
    Path(chalet_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let date_str = params.get("date").ok_or(AppError::Validation("date required".into()))?;
    let slot_id = params.get("slot_id").ok_or(AppError::Validation("slot_id required".into()))?;

    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    let today = Utc::now().date_naive();
    let check = state.availability.check_slot(&chalet_id, slot_id, date, today).await?;

    Ok(Json(AvailabilityResponse {
        date: date_str.to_string(),
        slot_id: slot_id.to_string(),
        available: check.available,
        reason: check.reason.map(|r| r.describe()),
    }))
}

pub async fn get_available_dates(
    State(state): State<Arc<AppState>>,
    Path(chalet_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let booking_type_str = params.get("booking_type")
        .ok_or(AppError::Validation("booking_type required".into()))?;
    let booking_type = BookingType::parse(booking_type_str)
        .ok_or(AppError::Validation("booking_type must be day_use or overnight".into()))?;

    let start_str = params.get("start").ok_or(AppError::Validation("start required".into()))?;
    let end_str = params.get("end").ok_or(AppError::Validation("end required".into()))?;

    let start = NaiveDate::parse_from_str(start_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid start".into()))?;
    let end = NaiveDate::parse_from_str(end_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid end".into()))?;

    let dates = state.availability.available_dates(&chalet_id, booking_type, start, end).await?;
    let dates: Vec<String> = dates.iter().map(|d| d.to_string()).collect();

    Ok(Json(dates))
}
