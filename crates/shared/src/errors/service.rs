use crate::errors::generation::GenerationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}
