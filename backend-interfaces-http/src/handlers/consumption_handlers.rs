use axum::extract::{Query, State};
use axum::Json;

use backend_application::queries::consumption_queries;
use backend_application::AppState;
use backend_domain::{ConsumptionHistory, ConsumptionQuery, TodayConsumption};

use crate::error::HttpError;

pub async fn get_today_consumption(
    State(state): State<AppState>,
    Query(query): Query<ConsumptionQuery>,
) -> Result<Json<TodayConsumption>, HttpError> {
    let result = consumption_queries::today_consumption(&state, query).await?;
    Ok(Json(result))
}

pub async fn get_all_consumption(
    State(state): State<AppState>,
    Query(query): Query<ConsumptionQuery>,
) -> Result<Json<ConsumptionHistory>, HttpError> {
    let result = consumption_queries::all_consumption(&state, query).await?;
    Ok(Json(result))
}
