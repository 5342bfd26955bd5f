//! Error types for the simulation and quoting library.

use thiserror::Error;

/// Errors raised by simulation, impact and quoting components.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MMError {
    /// A configuration value failed validation at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Inputs to the quote formula violate its preconditions.
    #[error("invalid quote parameters: {0}")]
    InvalidQuoteParameters(String),

    /// A market state snapshot is unusable.
    #[error("invalid market state: {0}")]
    InvalidMarketState(String),
}

/// Result alias used throughout the crate.
pub type MMResult<T> = Result<T, MMError>;
