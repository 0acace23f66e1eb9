//! Core error types (deterministic only)

use thiserror::Error;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A scratch or result buffer could not be allocated
    #[error("out of memory allocating {requested} elements")]
    OutOfMemory {
        /// Number of elements the failed allocation asked for
        requested: usize,
    },
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;

/// Allocate an empty vector able to hold `len` elements without reallocating.
///
/// Allocation failure is reported as [`CoreError::OutOfMemory`] instead of aborting.
pub fn try_with_capacity<T>(len: usize) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| CoreError::OutOfMemory { requested: len })?;
    Ok(buffer)
}
