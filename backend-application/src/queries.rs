// Application queries (read path)
pub mod consumption_queries;
pub mod rating_queries;
