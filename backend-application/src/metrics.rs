use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    track_requests: AtomicU64,
    track_errors: AtomicU64,
    query_requests: AtomicU64,
    query_errors: AtomicU64,
}

impl Metrics {
    pub fn record_track(&self) {
        self.track_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_track_error(&self) {
        self.track_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_query(&self) {
        self.query_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_query_error(&self) {
        self.query_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let track_requests = self.track_requests.load(Ordering::Relaxed);
        let track_errors = self.track_errors.load(Ordering::Relaxed);
        let query_requests = self.query_requests.load(Ordering::Relaxed);
        let query_errors = self.query_errors.load(Ordering::Relaxed);

        format!(
            "# TYPE taplog_track_requests_total counter\n\
taplog_track_requests_total {}\n\
# TYPE taplog_track_errors_total counter\n\
taplog_track_errors_total {}\n\
# TYPE taplog_query_requests_total counter\n\
taplog_query_requests_total {}\n\
# TYPE taplog_query_errors_total counter\n\
taplog_query_errors_total {}\n",
            track_requests, track_errors, query_requests, query_errors
        )
    }
}
