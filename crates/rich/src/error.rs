//! Error types for rich text rendering.

use thiserror::Error;

/// Errors that can occur when parsing a color attribute.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Not a hexadecimal number, with or without a leading marker.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// A hexadecimal number that does not fit in 24 bits.
    #[error("color out of range: {0:#x}")]
    OutOfRange(u32),
}
