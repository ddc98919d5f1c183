use axum::{extract::State, response::Json};

use crate::error::{AppError, Result};
use crate::models::fund::Fund;
use crate::AppState;

/// GET /api/funds
///
/// Returns every record of the backend's fund collection in ascending-id
/// order, renamed to the public camelCase shape. The backend's real error
/// is logged but not exposed, unlike the auth endpoints.
pub async fn list_funds_handler(State(state): State<AppState>) -> Result<Json<Vec<Fund>>> {
    let records = state.backend.list_funds().await.map_err(|err| {
        tracing::error!("Failed to fetch funds from backend: {}", err);
        AppError::Internal
    })?;

    Ok(Json(records.into_iter().map(Fund::from).collect()))
}
