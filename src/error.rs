//! Crate error type.
//!
//! The formatter and the layout engine are total and never return these;
//! only the fallible edges (viewport validation, digit parsing, terminal
//! output) do.

use thiserror::Error;

/// Errors raised at the edges of the core.
#[derive(Debug, Error)]
pub enum KazuError {
    /// Viewport with a zero, negative or non-finite dimension.
    #[error("viewport {width}x{height} has no drawable area")]
    DegenerateViewport { width: f64, height: f64 },

    /// Non-decimal character in a magnitude string.
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KazuError>;
