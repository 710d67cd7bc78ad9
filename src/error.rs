//! Configuration errors surfaced at construction time.

use thiserror::Error;

/// Reasons a [`crate::params::PhyllotaxisConfig`] is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Lerping counts iterations against `max_iteration`, so it must be positive
    #[error("max_iteration must be > 0 when lerping is enabled, got {0}")]
    MaxIterationNotPositive(i64),

    #[error("{which} curve is required but was not supplied")]
    MissingCurve { which: &'static str },

    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    /// A negative speed runs the lerp timer backwards, so it never wraps
    #[error("lerp speed range must be non-negative, got ({0}, {1})")]
    NegativeLerpSpeed(f32, f32),
}
