use axum::{extract::{State, Path}, response::IntoResponse, Json};
use std::sync::Arc;

use crate::error::AppError;
use crate::state::AppState;

pub async fn list_jobs(
    State(state): State<Arc<AppState>>,
    Path(chalet_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let jobs = state.job_repo.list_by_chalet(&chalet_id).await?;
    Ok(Json(jobs))
}
