use thiserror::Error;

/// Application-level errors (rendering and output)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    CoreError(#[from] infical_core::error::CoreError),

    #[error("Failed to serialize output: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to write output")]
    FormatError(#[from] std::fmt::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
