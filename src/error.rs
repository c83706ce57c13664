use thiserror::Error;

/// Errors returned by clustering models in this crate.
///
/// All errors are synchronous and non-retryable: the caller must re-supply
/// valid data or parameters. A failed `learn` leaves the model unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// Vector lengths disagree (between points, or between a query and the dataset).
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// The dataset is too small for the requested parameters.
    #[error("insufficient data: need at least {required} points, have {available}")]
    InsufficientData {
        /// Minimum number of points required.
        required: usize,
        /// Number of points in the dataset.
        available: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// `predict` (or another query) was called before `learn`.
    #[error("model is not fitted; call learn first")]
    NotFitted,

    /// `add` was called after `learn`; the dataset is frozen once fitted.
    #[error("model is already fitted; build a new model to add more points")]
    AlreadyFitted,
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
