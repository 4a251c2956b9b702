use async_trait::async_trait;
use time::Date;

use crate::entities::{ConsumptionEvent, ConsumptionRow, RatingRow};

#[async_trait]
pub trait LedgerRepository: Send + Sync {
    async fn ensure_schema(&self) -> anyhow::Result<()>;
    /// Appends one immutable event; the store assigns the surrogate id.
    async fn append_event(&self, event: &ConsumptionEvent) -> anyhow::Result<()>;
    /// Events for one user on one calendar date, in insertion order.
    async fn fetch_day_entries(
        &self,
        user_id: &str,
        date: Date,
    ) -> anyhow::Result<Vec<ConsumptionRow>>;
    /// All events for one user, ordered by date ascending.
    async fn fetch_user_events(&self, user_id: &str) -> anyhow::Result<Vec<ConsumptionRow>>;
    /// Grouped sums keyed by (user_id, username), ordered by total descending
    /// with a stable tie-break, truncated to `limit`.
    async fn fetch_rating(
        &self,
        date: Option<Date>,
        limit: usize,
    ) -> anyhow::Result<Vec<RatingRow>>;
    async fn ping(&self) -> anyhow::Result<()>;
}
