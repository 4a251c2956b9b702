// Domain entities
pub mod config;
pub mod consumption;

pub use config::*;
pub use consumption::*;
