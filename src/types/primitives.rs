//! Primitive type aliases for simulation and quoting concepts.

/// Price value, represented as f64.
pub type Price = f64;

/// Quantity or signed trade size, represented as f64.
///
/// Positive values indicate long positions or buys, negative values indicate
/// short positions or sells.
pub type Quantity = f64;

/// Simulation time in model units (the same units as the horizon `T`).
pub type Time = f64;

/// Volatility of the arithmetic price process (price units per sqrt time).
pub type Volatility = f64;

/// Risk aversion parameter (gamma).
pub type RiskAversion = f64;

/// Liquidity / order intensity parameter (k).
pub type OrderIntensity = f64;
