pub mod consumption_handlers;
pub mod ops_handlers;
pub mod rating_handlers;
pub mod track_handlers;

pub use consumption_handlers::*;
pub use ops_handlers::*;
pub use rating_handlers::*;
pub use track_handlers::*;
