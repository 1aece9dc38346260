use axum::{
    body::Bytes,
    extract::State,
    routing::post,
    Json, Router,
};
use vitrina_shared::models::events::{TrackEventRequest, TrackEventResponse};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/events", post(track_event))
}

/// POST /api/events
///
/// Browsers send this with `fetch` and no content type, so the body is parsed as
/// JSON whatever the header says.
pub async fn track_event(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TrackEventResponse>, AppError> {
    let request: TrackEventRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::ValidationError(format!("invalid event: {}", e)))?;

    state.storefront.track_event(request).await?;

    Ok(Json(TrackEventResponse { success: true }))
}
