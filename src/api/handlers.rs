//! Handlers for the work-log endpoints.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use super::SharedState;
use super::error::ApiError;
use crate::core::LogStore;
use crate::errors::{AppError, AppResult};
use crate::models::{CategoryStat, NewEntry, WeeklyStat, WorkLogEntry};

/// Run a store operation on the blocking pool.
async fn run_blocking<F, T>(state: &SharedState, op: F) -> AppResult<T>
where
    F: FnOnce(&LogStore) -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || op(&state.store))
        .await
        .map_err(|e| AppError::Other(format!("store task failed: {e}")))?
}

/// POST /api/logs
pub async fn create_log(
    State(state): State<SharedState>,
    payload: Result<Json<NewEntry>, JsonRejection>,
) -> Result<Json<WorkLogEntry>, ApiError> {
    let Json(entry) =
        payload.map_err(|rejection| ApiError::write(AppError::InvalidInput(rejection.body_text())))?;

    let created = run_blocking(&state, move |store| store.create_entry(&entry))
        .await
        .map_err(ApiError::write)?;

    tracing::info!(id = created.id, date = %created.date, "Work log created");
    Ok(Json(created))
}

/// GET /api/logs
pub async fn list_logs(
    State(state): State<SharedState>,
) -> Result<Json<Vec<WorkLogEntry>>, ApiError> {
    let entries = run_blocking(&state, LogStore::list_entries)
        .await
        .map_err(ApiError::read)?;
    Ok(Json(entries))
}

/// GET /api/stats/weekly
pub async fn weekly_stats(
    State(state): State<SharedState>,
) -> Result<Json<Vec<WeeklyStat>>, ApiError> {
    let rows = run_blocking(&state, LogStore::weekly_stats)
        .await
        .map_err(ApiError::read)?;
    Ok(Json(rows))
}

/// GET /api/stats/categories
pub async fn category_stats(
    State(state): State<SharedState>,
) -> Result<Json<Vec<CategoryStat>>, ApiError> {
    let rows = run_blocking(&state, LogStore::category_stats)
        .await
        .map_err(ApiError::read)?;
    Ok(Json(rows))
}
