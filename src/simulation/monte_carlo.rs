//! Independent multi-path simulation.

use tracing::debug;

use super::batch::PathGenerator;
use super::config::SimulationConfig;
use super::path::PricePath;
use crate::types::error::MMResult;

/// Generates `count` independent paths.
///
/// With a base seed, path `i` is generated from `seed + i` (wrapping), so the
/// batch is reproducible while no two paths share a seed. Without one, every
/// path draws its own entropy-seeded generator.
///
/// # Example
///
/// ```rust
/// use mm_sim_rs::simulation::{SimulationConfig, monte_carlo::generate_paths};
///
/// let config = SimulationConfig::new(100.0, 1.0, 1.0, 0.1, Some(10)).unwrap();
/// let paths = generate_paths(&config, 4).unwrap();
/// assert_eq!(paths.len(), 4);
/// assert!(paths.iter().all(|p| p.len() == 11));
/// ```
///
/// # Errors
///
/// Returns `MMError::InvalidConfiguration` if `config` fails validation.
pub fn generate_paths(config: &SimulationConfig, count: usize) -> MMResult<Vec<PricePath>> {
    config.validate()?;
    debug!(count, base_seed = ?config.seed, "generating path batch");
    (0..count)
        .map(|i| -> MMResult<PricePath> {
            let seed = config.seed.map(|base| base.wrapping_add(i as u64));
            Ok(PathGenerator::new(config.with_seed(seed))?.generate())
        })
        .collect()
}

/// Mean of the final prices across `paths`, or `None` for an empty batch.
#[must_use]
pub fn mean_final_price(paths: &[PricePath]) -> Option<f64> {
    let finals: Vec<f64> = paths.iter().filter_map(PricePath::final_price).collect();
    if finals.is_empty() {
        return None;
    }
    Some(finals.iter().sum::<f64>() / finals.len() as f64)
}
