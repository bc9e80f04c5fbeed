//! Error types for triangulation operations.

use thiserror::Error;

/// Errors that can occur while building a triangulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DelaunayError {
    /// The point set has no points.
    #[error("empty input: at least one point is required")]
    EmptyInput,

    /// The triangle is degenerate and has no usable circumcenter.
    #[error("coincident points: triangle has no circumcenter")]
    CoincidentPoints,

    /// A configuration value is out of range.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value, as `f64`.
        value: f64,
    },
}

/// Result type for triangulation operations.
pub type DelaunayResult<T> = std::result::Result<T, DelaunayError>;
