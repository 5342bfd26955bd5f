//! Optimal quoting under inventory risk.
//!
//! This module implements a closed-form Avellaneda-Stoikov style quote
//! calculator on top of a scalar mid price.
//!
//! # Key Formulas
//!
//! ## Inventory Adjustment
//! ```text
//! adjustment = q * γ * σ² * (T - t)
//! ```
//!
//! ## Half Spread
//! ```text
//! half_spread = (1/γ) * ln(1 + γ/k)
//! ```
//!
//! ## Optimal Quotes
//! ```text
//! bid = s - adjustment - half_spread
//! ask = s - adjustment + half_spread
//! ```

/// Core Avellaneda-Stoikov model calculations.
pub mod avellaneda_stoikov;

/// Quote request and output types.
pub mod quote;

/// Strategy configuration.
pub mod config;
