//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the library. Users can import everything they need with:
//!
//! ```rust
//! use mm_sim_rs::prelude::*;
//! ```

// Re-export types module
pub use crate::types::error::{MMError, MMResult};
pub use crate::types::primitives::{
    OrderIntensity, Price, Quantity, RiskAversion, Time, Volatility,
};

// Re-export simulation types
pub use crate::simulation::monte_carlo::generate_paths;
pub use crate::simulation::{
    IncrementalGenerator, PathGenerator, PricePath, SimulationConfig, generate_path,
};

// Re-export impact types
pub use crate::impact::{ImpactEvent, ImpactOutcome, ImpactReport, PriceImpactModel};

// Re-export strategy types
pub use crate::strategy::avellaneda_stoikov::{optimal_quotes, quotes_for_request};
pub use crate::strategy::config::StrategyConfig;
pub use crate::strategy::quote::{Quote, QuoteRequest};

// Re-export market state types
pub use crate::market_state::snapshot::MarketState;
