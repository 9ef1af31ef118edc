use thiserror::Error;

/// Failures surfaced by the recommendation core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecommendError {
    /// No roles were supplied; the index cannot be built.
    #[error("role catalog is empty")]
    EmptyCatalog,

    /// The index has not been installed yet. Retry once initialization finishes.
    #[error("recommendation engine is not ready yet")]
    NotReady,

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, RecommendError>;
