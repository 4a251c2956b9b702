use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use clickhouse::Client;
use time::Date;

use backend_domain::ports::LedgerRepository;
use backend_domain::utils::format_date;
use backend_domain::{ConsumptionEvent, ConsumptionRow, RatingRow};

pub struct ClickhouseLedger {
    client: Client,
    database: String,
    // ClickHouse has no auto-increment; ids are assigned by this counter,
    // seeded from max(id) when the schema is set up.
    next_id: AtomicU64,
}

impl ClickhouseLedger {
    pub fn new(client: Client, database: String) -> Self {
        Self {
            client,
            database,
            next_id: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl LedgerRepository for ClickhouseLedger {
    async fn ensure_schema(&self) -> Result<()> {
        let create_db = format!("CREATE DATABASE IF NOT EXISTS {}", self.database);
        self.client.query(&create_db).execute().await?;

        let create_events = r#"
CREATE TABLE IF NOT EXISTS consumption_events (
    id UInt64,
    user_id String,
    username String,
    amount Float64,
    date Date,
    timestamp DateTime64(3)
) ENGINE = MergeTree
PARTITION BY toYYYYMM(date)
ORDER BY (date, user_id, timestamp)
"#;
        self.client.query(create_events).execute().await?;

        let max_id: u64 = self
            .client
            .query("SELECT max(id) FROM consumption_events")
            .fetch_one()
            .await?;
        self.next_id.store(max_id, Ordering::SeqCst);
        Ok(())
    }

    async fn append_event(&self, event: &ConsumptionEvent) -> Result<()> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut insert = self.client.insert("consumption_events")?;
        insert
            .write(&ConsumptionRow {
                id,
                user_id: event.user_id.clone(),
                username: event.username.clone(),
                amount: event.amount,
                date: event.date,
                timestamp: event.timestamp,
            })
            .await?;
        insert.end().await?;
        Ok(())
    }

    async fn fetch_day_entries(
        &self,
        user_id: &str,
        date: Date,
    ) -> Result<Vec<ConsumptionRow>> {
        let rows = self
            .client
            .query(
                "SELECT id, user_id, username, amount, date, timestamp \
                 FROM consumption_events \
                 WHERE user_id = ? AND date = toDate(?) \
                 ORDER BY timestamp, id",
            )
            .bind(user_id)
            .bind(format_date(date))
            .fetch_all::<ConsumptionRow>()
            .await?;
        Ok(rows)
    }

    async fn fetch_user_events(&self, user_id: &str) -> Result<Vec<ConsumptionRow>> {
        let rows = self
            .client
            .query(
                "SELECT id, user_id, username, amount, date, timestamp \
                 FROM consumption_events \
                 WHERE user_id = ? \
                 ORDER BY date, timestamp, id",
            )
            .bind(user_id)
            .fetch_all::<ConsumptionRow>()
            .await?;
        Ok(rows)
    }

    async fn fetch_rating(&self, date: Option<Date>, limit: usize) -> Result<Vec<RatingRow>> {
        let mut sql =
            String::from("SELECT user_id, username, sum(amount) AS total FROM consumption_events");
        if date.is_some() {
            sql.push_str(" WHERE date = toDate(?)");
        }
        sql.push_str(" GROUP BY user_id, username ORDER BY total DESC, user_id, username");
        sql.push_str(&format!(" LIMIT {}", limit));

        let mut query = self.client.query(&sql);
        if let Some(day) = date {
            query = query.bind(format_date(day));
        }
        let rows = query.fetch_all::<RatingRow>().await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<()> {
        let _: u8 = self.client.query("SELECT toUInt8(1)").fetch_one().await?;
        Ok(())
    }
}
