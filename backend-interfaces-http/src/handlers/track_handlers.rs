use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;
use tracing::error;

use backend_application::commands::track_commands;
use backend_application::AppState;

use crate::error::HttpError;
use crate::middleware::parse_track_payload;

#[derive(Serialize)]
pub struct TrackAck {
    success: bool,
}

pub async fn track_beer(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Result<Json<TrackAck>, HttpError> {
    let payload = parse_track_payload(&headers, &body).map_err(|err| {
        error!("failed to parse track body: {}", err);
        HttpError::BadRequest(format!("invalid payload: {}", err))
    })?;
    track_commands::record_consumption(&state, payload).await?;
    Ok(Json(TrackAck { success: true }))
}
