//! Market Making Simulation Library
//!
//! A Rust library for simulating a single-asset mid price under permanent trade
//! impact and deriving inventory-aware bid/ask quotes from it. It targets
//! quantitative research: synthetic price paths for backtesting and optimal
//! quote levels for a given inventory and risk profile.
//!
//! # Overview
//!
//! Data flows in one direction:
//!
//! 1. A path generator produces a price history, either in one shot
//!    ([`simulation::PathGenerator`]) or step by step
//!    ([`simulation::IncrementalGenerator`]).
//! 2. The price impact model shifts that history in place for each trade,
//!    permanently and from the trade's index onward.
//! 3. The quote calculator reads a mid price and returns a bid/ask pair.
//!
//! ## Price Process
//!
//! Arithmetic Brownian motion, `S_t = S0 + σ W_t`. Prices may become
//! non-positive for long horizons or large volatility.
//!
//! ## Permanent Impact
//!
//! A trade of signed size `Q` shifts every later price by
//! `α · sign(Q) · |Q|^β`. Impacts stack in the order they are applied.
//!
//! ## Optimal Quotes
//!
//! The Avellaneda-Stoikov (2008) closed form: an inventory skew
//! `q γ σ² (T - t)` moves both quotes against the position, and a half spread
//! `(1/γ) ln(1 + γ/k)` is placed on either side.
//!
//! # Modules
//!
//! - [`simulation`]: Batch, incremental and Monte Carlo path generation
//! - [`impact`]: Permanent price impact on stored histories
//! - [`strategy`]: Pure quote calculations and strategy configuration
//! - [`market_state`]: Market snapshots feeding the quote calculator
//! - [`types`]: Common types and error definitions
//!
//! # Examples
//!
//! ```rust
//! use mm_sim_rs::prelude::*;
//!
//! let config = SimulationConfig::new(100.0, 1.0, 1.0, 0.01, Some(42)).unwrap();
//! let mut generator = PathGenerator::new(config).unwrap();
//! generator.generate();
//! generator.apply_price_impact(50, 2.0);
//!
//! let path = generator.price_path().unwrap();
//! let mid = path.price_at(50).unwrap();
//!
//! let quote = optimal_quotes(mid, 1.0, 0.1, 1.0, 1.5, 1.0, 0.5).unwrap();
//! assert!(quote.bid < mid && mid < quote.ask);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

/// Price impact module applying permanent trade impact to price histories.
///
/// This module handles:
/// - Impact size calculation (concave in trade size)
/// - Suffix shifts of stored histories
/// - Ordered batch application with skip reporting
pub mod impact;

/// Market state module for representing observable market data.
pub mod market_state;

/// Prelude module for convenient imports.
pub mod prelude;

/// Simulation module generating mid-price paths.
///
/// This module provides:
/// - Batch path generation over a fixed horizon
/// - Incremental, unbounded path generation
/// - Independent multi-path runs
pub mod simulation;

/// Strategy module containing pure mathematical calculations for quoting.
///
/// This module implements the Avellaneda-Stoikov quote calculations:
/// - Inventory adjustment
/// - Half spread
/// - Bid/ask quote generation
pub mod strategy;

/// Common types and error definitions.
///
/// This module contains:
/// - Error types using thiserror
/// - Type aliases for domain concepts
pub mod types;
