use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A year/month/day triple or date string that does not name a real calendar date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Selection constraints that contradict each other, such as `min_date > max_date`.
    #[error("Invalid constraints: {0}")]
    InvalidConstraints(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
