// Port implementations
pub mod clickhouse_ledger;

pub use clickhouse_ledger::*;
