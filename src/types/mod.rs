//! Common types and error definitions.
//!
//! This module contains:
//! - Error types using `thiserror`
//! - Type aliases for prices, quantities and simulation time

/// Error types for the library.
pub mod error;

/// Common type aliases for prices, quantities, and time.
pub mod primitives;
