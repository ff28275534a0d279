//! Error types for run-length list operations.
//!
//! Every fallible operation in the crate returns [`Result`]. Failed core
//! operations never leave a list partially mutated.

use thiserror::Error;

/// Result type alias for run-length list operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the run-length list, its codec and the ascii-art
/// helpers.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was absent. In this crate that means an attempt
    /// to store the reserved value `0`, either directly or as the output of
    /// a map transform.
    #[error("null argument: the reserved value 0 cannot be stored")]
    NullArgument,

    /// A logical index was not below the current logical size.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Requested logical index.
        index: usize,
        /// Logical size at the time of the call.
        len: usize,
    },

    /// Appending would push a run length or the logical size past
    /// `usize::MAX`. The list is unchanged.
    #[error("length overflow: appending {count} bytes exceeds usize::MAX")]
    LengthOverflow {
        /// Number of bytes that were being appended.
        count: usize,
    },

    /// A buffer could not be allocated. The operation had no effect.
    #[error("out of memory")]
    OutOfMemory,

    /// Encoded input did not follow the `<byte><decimal length>\n` format.
    #[error("malformed encoding at byte {offset}: {reason}")]
    Decode {
        /// Byte offset in the input where decoding failed.
        offset: usize,
        /// What was wrong.
        reason: &'static str,
    },

    /// Underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::collections::TryReserveError> for Error {
    fn from(_: std::collections::TryReserveError) -> Self {
        Error::OutOfMemory
    }
}
