//! Error types for drawing operations.

use thiserror::Error;

/// Result alias used by every drawing primitive.
pub type Result<T> = std::result::Result<T, DrawError>;

/// Errors surfaced by the drawing layer.
///
/// Inputs are never validated, so this only carries what Cairo itself reports
/// plus color strings that could not be understood.
#[derive(Debug, Error)]
pub enum DrawError {
    /// Context creation or a draw call failed inside Cairo.
    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    /// A color string did not match any supported notation.
    #[error("invalid color '{0}'")]
    InvalidColor(String),
}
