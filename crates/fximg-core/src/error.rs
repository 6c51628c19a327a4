//! Error types for fximg-core
//!
//! Geometric problems (off-canvas coordinates, out-of-range frame indices,
//! empty shapes) never produce errors; the affected operation simply does
//! nothing. The variants here cover structural and integrity failures of the
//! packed buffer, and no operation mutates the buffer before returning one.

use crate::header::{Field, Region};
use thiserror::Error;

/// fximg-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A dimension field was written after the metadata was frozen
    #[error("the {field} field is immutable")]
    ImmutableField { field: Field },

    /// A stored hash does not match the bytes it guards
    #[error("{region} signature mismatch: stored 0x{stored:02X}, computed 0x{computed:02X}")]
    Corruption {
        region: Region,
        stored: u8,
        computed: u8,
    },

    /// A pixel write was attempted on a read-only image
    #[error("this fixed image is read-only")]
    ReadOnly,

    /// The header byte uses the reserved size class
    #[error("invalid header byte: 0b{header:08b}")]
    InvalidHeader { header: u8 },

    /// The buffer is shorter than its header requires
    #[error("truncated buffer: need {expected} bytes, have {actual}")]
    Truncated { expected: usize, actual: usize },
}

/// Result type alias for fximg-core operations
pub type Result<T> = std::result::Result<T, Error>;
