// In-memory ledger fake backing the application-layer tests

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use time::Date;
use tokio::sync::Mutex;

use backend_domain::ports::LedgerRepository;
use backend_domain::{ConsumptionEvent, ConsumptionRow, RatingRow, RuntimeConfig};

use crate::{AppState, Metrics};

#[derive(Default)]
pub struct MemoryLedger {
    rows: Mutex<Vec<ConsumptionRow>>,
    next_id: AtomicU64,
}

impl MemoryLedger {
    pub async fn rows(&self) -> Vec<ConsumptionRow> {
        self.rows.lock().await.clone()
    }
}

#[async_trait]
impl LedgerRepository for MemoryLedger {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn append_event(&self, event: &ConsumptionEvent) -> anyhow::Result<()> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.rows.lock().await.push(ConsumptionRow {
            id,
            user_id: event.user_id.clone(),
            username: event.username.clone(),
            amount: event.amount,
            date: event.date,
            timestamp: event.timestamp,
        });
        Ok(())
    }

    async fn fetch_day_entries(
        &self,
        user_id: &str,
        date: Date,
    ) -> anyhow::Result<Vec<ConsumptionRow>> {
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .filter(|row| row.user_id == user_id && row.date == date)
            .cloned()
            .collect())
    }

    async fn fetch_user_events(&self, user_id: &str) -> anyhow::Result<Vec<ConsumptionRow>> {
        let mut rows: Vec<ConsumptionRow> = self
            .rows
            .lock()
            .await
            .iter()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.timestamp.cmp(&b.timestamp))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(rows)
    }

    async fn fetch_rating(
        &self,
        date: Option<Date>,
        limit: usize,
    ) -> anyhow::Result<Vec<RatingRow>> {
        let rows = self.rows.lock().await;
        let mut totals: Vec<RatingRow> = Vec::new();
        for row in rows.iter() {
            if let Some(day) = date {
                if row.date != day {
                    continue;
                }
            }
            match totals
                .iter_mut()
                .find(|entry| entry.user_id == row.user_id && entry.username == row.username)
            {
                Some(entry) => entry.total += row.amount,
                None => totals.push(RatingRow {
                    user_id: row.user_id.clone(),
                    username: row.username.clone(),
                    total: row.amount,
                }),
            }
        }
        totals.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.user_id.cmp(&b.user_id))
                .then_with(|| a.username.cmp(&b.username))
        });
        totals.truncate(limit);
        Ok(totals)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

pub fn test_state(ledger: Arc<MemoryLedger>) -> AppState {
    AppState {
        config: RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 5,
        },
        ledger,
        metrics: Arc::new(Metrics::default()),
    }
}
