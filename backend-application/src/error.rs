use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
