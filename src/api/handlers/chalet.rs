use axum::{extract::{State, Path}, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CreateChaletRequest;
use crate::api::handlers::slot::encode_day_names;
use crate::domain::models::chalet::Chalet;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_chalet(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateChaletRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Creating chalet: {}", payload.slug);

    let mut chalet = Chalet::new(payload.name, payload.slug);
    if let Some(city) = payload.city {
        chalet.city = Some(city);
    }
    if let Some(currency) = payload.currency {
        chalet.currency = currency;
    }
    if let Some(days) = payload.weekend_days {
        chalet.weekend_days = encode_day_names(&days)?;
    }

    let created = state.chalet_repo.create(&chalet).await?;
    Ok(Json(created))
}

pub async fn list_chalets(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let chalets = state.chalet_repo.list().await?;
    Ok(Json(chalets))
}

pub async fn get_chalet(
    State(state): State<Arc<AppState>>,
    Path(chalet_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let chalet = state.chalet_repo.find_by_id(&chalet_id).await?
        .ok_or(AppError::NotFound("Chalet not found".into()))?;
    Ok(Json(chalet))
}
