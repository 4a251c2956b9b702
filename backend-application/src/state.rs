use std::sync::Arc;

use backend_domain::ports::LedgerRepository;
use backend_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub ledger: Arc<dyn LedgerRepository>,
    pub metrics: Arc<Metrics>,
}
