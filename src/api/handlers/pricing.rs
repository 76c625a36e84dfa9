use axum::{extract::{State, Path}, response::IntoResponse, Json};
use std::sync::Arc;
use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::api::dtos::requests::PriceRequest;
use crate::api::dtos::responses::PriceResponse;
use crate::domain::services::pricing::quote;
use crate::error::AppError;
use crate::state::AppState;

pub async fn calculate_price(
    State(state): State<Arc<AppState>>,
    Path((chalet_id, slot_id)): Path<(String, String)>,
    Json(payload): Json<PriceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let chalet = state.chalet_repo.find_by_id(&chalet_id).await?
        .filter(|c| c.is_active)
        .ok_or(AppError::NotFound("Chalet not found".into()))?;

    let slot = state.slot_repo.find_by_id(&chalet_id, &slot_id).await?
        .filter(|s| s.is_active)
        .ok_or(AppError::NotFound("Slot not found".into()))?;

    let date = NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    if date < Utc::now().date_naive() {
        return Err(AppError::Validation("Date is in the past".into()));
    }

    let money = quote(&slot, &chalet, date, payload.extra_hours.unwrap_or(0))?;

    info!("Priced slot {} on {}: {} {}", slot_id, date, money.amount, money.currency);
    Ok(Json(PriceResponse { amount: money.amount, currency: money.currency }))
}
