//! Permanent price impact applied to simulated histories.
//!
//! An [`ImpactEvent`] shifts the suffix of a price history starting at its time
//! index. Events are applied strictly in the order supplied, each one adding to
//! the values left by the previous ones.

/// Trade records.
pub mod event;

/// Impact model and application.
pub mod model;

pub use event::ImpactEvent;
pub use model::{ImpactOutcome, ImpactReport, PriceImpactModel};
