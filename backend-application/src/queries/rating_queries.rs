use time::Date;
use tracing::error;

use backend_domain::utils::today_utc;
use backend_domain::Rating;

use crate::{AppError, AppState};

/// Leaderboards never return more than ten groups.
const RATING_LIMIT: usize = 10;

pub async fn rating_today(state: &AppState) -> Result<Rating, AppError> {
    fetch_rating(state, Some(today_utc())).await
}

pub async fn rating_total(state: &AppState) -> Result<Rating, AppError> {
    fetch_rating(state, None).await
}

async fn fetch_rating(state: &AppState, date: Option<Date>) -> Result<Rating, AppError> {
    let rating = state
        .ledger
        .fetch_rating(date, RATING_LIMIT)
        .await
        .map_err(|err| {
            error!("failed to fetch rating: {}", err);
            state.metrics.record_query_error();
            AppError::Internal(err)
        })?;
    state.metrics.record_query();
    Ok(Rating { rating })
}
