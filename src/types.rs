//! Core types for Riccati-Bessel evaluation.

use core::fmt;

/// Error type for Riccati-Bessel evaluation.
///
/// Non-finite results (from `x == 0` or from loss of accuracy in the upward
/// recurrence) are not errors; they are returned as IEEE 754 values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Output buffer cannot hold orders 0..=n.
    BufferTooSmall {
        /// Length needed, `n + 1` (saturating at `usize::MAX`).
        required: usize,
        /// Length of the buffer that was supplied.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall { required, len } => {
                write!(
                    f,
                    "buffer too small: {required} values required, buffer holds {len}"
                )
            }
        }
    }
}

impl core::error::Error for Error {}
