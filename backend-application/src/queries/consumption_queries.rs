use tracing::error;

use backend_domain::services::aggregator;
use backend_domain::utils::{format_timestamp, today_utc};
use backend_domain::{ConsumptionHistory, ConsumptionQuery, TodayConsumption, TodayEntry};

use crate::{AppError, AppState};

fn required_user_id(query: ConsumptionQuery) -> Result<String, AppError> {
    match query.user_id {
        Some(user_id) if !user_id.trim().is_empty() => Ok(user_id),
        _ => Err(AppError::MissingParameter("user_id")),
    }
}

/// Today's total plus the raw entries behind it. "Today" is read from the
/// clock at query time, independently of ingestion time.
pub async fn today_consumption(
    state: &AppState,
    query: ConsumptionQuery,
) -> Result<TodayConsumption, AppError> {
    let user_id = required_user_id(query)?;
    let today = today_utc();
    let rows = state
        .ledger
        .fetch_day_entries(&user_id, today)
        .await
        .map_err(|err| {
            error!("failed to fetch today's entries: {}", err);
            state.metrics.record_query_error();
            AppError::Internal(err)
        })?;
    state.metrics.record_query();

    let total_amount = aggregator::sum_amounts(&rows);
    let entries = rows
        .into_iter()
        .map(|row| TodayEntry {
            amount: row.amount,
            time: format_timestamp(row.timestamp),
        })
        .collect();
    Ok(TodayConsumption {
        total_amount,
        entries,
    })
}

/// Per-day totals over the user's full history, date ascending.
pub async fn all_consumption(
    state: &AppState,
    query: ConsumptionQuery,
) -> Result<ConsumptionHistory, AppError> {
    let user_id = required_user_id(query)?;
    let rows = state
        .ledger
        .fetch_user_events(&user_id)
        .await
        .map_err(|err| {
            error!("failed to fetch consumption history: {}", err);
            state.metrics.record_query_error();
            AppError::Internal(err)
        })?;
    state.metrics.record_query();

    Ok(ConsumptionHistory {
        days: aggregator::daily_totals(&rows),
    })
}
