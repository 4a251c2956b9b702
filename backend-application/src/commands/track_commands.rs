use serde_json::Value;

use backend_domain::utils::now_utc;
use backend_domain::{ConsumptionEvent, TrackPayload};

use crate::{AppError, AppState};

pub async fn record_consumption(
    state: &AppState,
    payload: TrackPayload,
) -> Result<(), AppError> {
    let user_id = payload
        .user_id
        .ok_or_else(|| AppError::InvalidPayload("user_id is required".to_string()))?;
    let username = payload
        .username
        .ok_or_else(|| AppError::InvalidPayload("username is required".to_string()))?;
    let amount = payload
        .amount
        .ok_or_else(|| AppError::InvalidPayload("amount is required".to_string()))?;
    let amount = parse_amount(&amount)?;

    let now = now_utc();
    let event = ConsumptionEvent {
        user_id,
        username,
        amount,
        date: now.date(),
        timestamp: now,
    };

    if let Err(err) = state.ledger.append_event(&event).await {
        state.metrics.record_track_error();
        return Err(AppError::Internal(err));
    }
    state.metrics.record_track();
    Ok(())
}

/// Coerces the client-supplied amount into a float. JSON numbers and numeric
/// strings are accepted; anything else is rejected. There is no bounds
/// check, so zero and negative amounts pass through.
fn parse_amount(value: &Value) -> Result<f64, AppError> {
    match value {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| AppError::InvalidAmount(format!("not a real number: {}", number))),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| AppError::InvalidAmount(format!("not a real number: '{}'", text))),
        other => Err(AppError::InvalidAmount(format!(
            "not a real number: {}",
            other
        ))),
    }
}
