use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::{AppError, Result},
    handlers::AppState,
    models::{CreatedResponse, MaintenanceUpdate, NewMaintenance},
    store::MaintenanceStore,
};

fn validate_cost(cost: Option<f64>) -> Result<()> {
    match cost {
        Some(cost) if !cost.is_finite() || cost < 0.0 => {
            Err(AppError::BadRequest("cost must be a non-negative number".into()))
        }
        _ => Ok(()),
    }
}

/// List maintenance records handler
pub async fn list_maintenance(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let rows = state.store.list_maintenance().await?;
    Ok((StatusCode::OK, Json(rows)))
}

/// List billboards handler
pub async fn list_billboards(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let billboards = state.store.list_billboards().await?;
    Ok((StatusCode::OK, Json(billboards)))
}

/// Create maintenance record handler
pub async fn create_maintenance(
    State(state): State<AppState>,
    Json(record): Json<NewMaintenance>,
) -> Result<impl IntoResponse> {
    if record.reason.trim().is_empty() {
        return Err(AppError::BadRequest("reason is required".into()));
    }
    validate_cost(record.cost)?;

    let id = state.store.insert_maintenance(record).await?;
    tracing::info!(id, "Created maintenance record");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Update maintenance record handler
pub async fn update_maintenance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(update): Json<MaintenanceUpdate>,
) -> Result<impl IntoResponse> {
    validate_cost(update.cost)?;
    state.store.update_maintenance(id, update).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete maintenance record handler
pub async fn delete_maintenance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.store.delete_maintenance(id).await?;
    tracing::info!(id, "Deleted maintenance record");
    Ok(StatusCode::NO_CONTENT)
}
