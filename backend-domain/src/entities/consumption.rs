// Consumption event entity and the API shapes built from it

use clickhouse::Row;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// Inbound track payload. Deserialized leniently: field presence and amount
/// coercion are the application layer's job, not serde's.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackPayload {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub amount: Option<serde_json::Value>,
}

/// A validated event before the store assigns its id.
/// `date` and `timestamp` derive from the same clock read.
#[derive(Debug, Clone)]
pub struct ConsumptionEvent {
    pub user_id: String,
    pub username: String,
    pub amount: f64,
    pub date: Date,
    pub timestamp: OffsetDateTime,
}

/// One persisted ledger row, immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize, Row)]
pub struct ConsumptionRow {
    pub id: u64,
    pub user_id: String,
    pub username: String,
    pub amount: f64,
    #[serde(with = "clickhouse::serde::time::date")]
    pub date: Date,
    #[serde(with = "clickhouse::serde::time::datetime64::millis")]
    pub timestamp: OffsetDateTime,
}

/// One leaderboard row: grouped sum keyed by (user_id, username).
#[derive(Debug, Clone, Serialize, Deserialize, Row)]
pub struct RatingRow {
    pub user_id: String,
    pub username: String,
    pub total: f64,
}

#[derive(Debug, Deserialize)]
pub struct ConsumptionQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TodayEntry {
    pub amount: f64,
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct TodayConsumption {
    pub total_amount: f64,
    pub entries: Vec<TodayEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: String,
    pub total: f64,
}

#[derive(Debug, Serialize)]
pub struct ConsumptionHistory {
    pub days: Vec<DailyTotal>,
}

#[derive(Debug, Serialize)]
pub struct Rating {
    pub rating: Vec<RatingRow>,
}
