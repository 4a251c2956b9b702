use axum::extract::State;
use axum::Json;

use backend_application::queries::rating_queries;
use backend_application::AppState;
use backend_domain::Rating;

use crate::error::HttpError;

pub async fn rating_today(State(state): State<AppState>) -> Result<Json<Rating>, HttpError> {
    let rating = rating_queries::rating_today(&state).await?;
    Ok(Json(rating))
}

pub async fn rating_total(State(state): State<AppState>) -> Result<Json<Rating>, HttpError> {
    let rating = rating_queries::rating_total(&state).await?;
    Ok(Json(rating))
}
