//! Engine error types

use runbreak_core::CoreError;
use thiserror::Error;

/// Boxed error returned by sources and sinks
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while analyzing a window of a text source
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core analysis error
    #[error("analysis failed: {0}")]
    Core(#[from] CoreError),

    /// The text source failed to provide text
    #[error("text source failed")]
    Source(#[source] BoxError),

    /// The sink rejected a result
    #[error("analysis sink failed")]
    Sink(#[source] BoxError),

    /// Requested window exceeds the configured limit
    #[error("window of {requested} code units exceeds the limit of {limit}")]
    WindowTooLarge {
        /// Requested window length in code units
        requested: usize,
        /// Configured maximum window length
        limit: usize,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    /// Whether the error reports a failed scratch allocation
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, EngineError::Core(CoreError::OutOfMemory { .. }))
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
