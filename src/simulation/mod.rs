//! Mid-price path simulation.
//!
//! Both generators realize the same discrete arithmetic Brownian motion:
//!
//! ```text
//! S_{j+1} = S_j + sigma * sqrt(dt) * Z_j,   Z_j ~ N(0, 1)
//! ```
//!
//! - [`PathGenerator`] builds a whole path over a fixed horizon at once.
//! - [`IncrementalGenerator`] produces one point per call with no horizon.
//!
//! Every generator owns its random source. Two generators built from the same
//! seed consume identical normal draws in identical order.

/// Batch generator.
pub mod batch;

/// Simulation configuration.
pub mod config;

/// Real-time generator.
pub mod incremental;

/// Independent multi-path runs.
pub mod monte_carlo;

mod noise;

/// Price path container.
pub mod path;

pub use batch::{PathGenerator, generate_path};
pub use config::SimulationConfig;
pub use incremental::IncrementalGenerator;
pub use path::PricePath;
