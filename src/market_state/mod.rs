//! Market state module for representing observable market data.
//!
//! This module provides market state snapshots taken from simulated paths or
//! a running incremental generator, ready to feed the quote calculator.

/// Market state snapshot representation.
pub mod snapshot;
