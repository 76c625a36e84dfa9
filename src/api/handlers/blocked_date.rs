use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use std::collections::HashMap;
use std::sync::Arc;
use chrono::NaiveDate;
use tracing::info;

use crate::api::dtos::requests::CreateBlockedDateRequest;
use crate::domain::models::blocked_date::{BlockedDate, BlockedDateChanged};
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_blocked_date(
    State(state): State<Arc<AppState>>,
    Path(chalet_id): Path<String>,
    Json(payload): Json<CreateBlockedDateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let chalet = state.chalet_repo.find_by_id(&chalet_id).await?
        .ok_or(AppError::NotFound("Chalet not found".into()))?;

    let date = NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    if let Some(ref slot_id) = payload.slot_id {
        state.slot_repo.find_by_id(&chalet_id, slot_id).await?
            .ok_or(AppError::NotFound("Slot not found".into()))?;
    }

    let blocked = BlockedDate::new(chalet.id.clone(), date, payload.slot_id, payload.reason);
    let created = state.blocked_date_repo.create(&blocked).await?;

    state.invalidator
        .on_blocked_date_changed(&BlockedDateChanged { chalet_id: chalet.id, date })
        .await;

    info!("Blocked date created for chalet {} on {}", created.chalet_id, created.date);
    Ok(Json(created))
}

pub async fn list_blocked_dates(
    State(state): State<Arc<AppState>>,
    Path(chalet_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    state.chalet_repo.find_by_id(&chalet_id).await?
        .ok_or(AppError::NotFound("Chalet not found".into()))?;

    let start_str = params.get("start").ok_or(AppError::Validation("start required".into()))?;
    let end_str = params.get("end").ok_or(AppError::Validation("end required".into()))?;

    let start = NaiveDate::parse_from_str(start_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid start".into()))?;
    let end = NaiveDate::parse_from_str(end_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid end".into()))?;

    let rows = state.blocked_date_repo.list_by_range(&chalet_id, start, end).await?;
    Ok(Json(rows))
}

pub async fn delete_blocked_date(
    State(state): State<Arc<AppState>>,
    Path((chalet_id, blocked_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let blocked = state.blocked_date_repo.find_by_id(&chalet_id, &blocked_id).await?
        .ok_or(AppError::NotFound("Blocked date not found".into()))?;

    state.blocked_date_repo.delete(&chalet_id, &blocked_id).await?;

    state.invalidator
        .on_blocked_date_changed(&BlockedDateChanged { chalet_id, date: blocked.date })
        .await;

    info!("Blocked date {} deleted", blocked_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
