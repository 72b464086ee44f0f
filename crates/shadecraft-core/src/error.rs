//! Error types for shadecraft-core.

use thiserror::Error;

/// Result type alias using the library's error type.
pub type Result<T> = std::result::Result<T, ColorError>;

/// The one failure this engine knows: input that is not a well-formed
/// 3- or 6-digit hex code. Everything downstream of normalization is
/// infallible by construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The offending input, verbatim.
    #[error("invalid hex color: {0:?} (expected 3 or 6 hex digits, optionally #-prefixed)")]
    InvalidHex(String),
}
