//! One-shot path generation over a fixed horizon.
//!
//! The price follows arithmetic Brownian motion on a uniform grid:
//!
//! ```text
//! W_0 = 0,  W_j = W_{j-1} + sqrt(dt) * Z_j
//! S_j = S0 + sigma * W_j
//! ```
//!
//! Prices can become non-positive; the model does not prevent it.

use rand::rngs::StdRng;
use tracing::{debug, warn};

use super::config::SimulationConfig;
use super::noise::{seeded_rng, standard_normal};
use super::path::PricePath;
use crate::impact::{ImpactEvent, ImpactOutcome, ImpactReport, PriceImpactModel};
use crate::types::error::MMResult;
use crate::types::primitives::{Quantity, Time};

/// Batch price path generator.
///
/// Owns its random source and the last generated path, so impacts can be
/// applied to that path later without regenerating it.
///
/// # Example
///
/// ```rust
/// use mm_sim_rs::simulation::{PathGenerator, SimulationConfig};
///
/// let config = SimulationConfig::new(100.0, 1.0, 1.0, 0.01, Some(42)).unwrap();
/// let mut generator = PathGenerator::new(config).unwrap();
/// let path = generator.generate();
///
/// assert_eq!(path.len(), 101);
/// assert_eq!(path.prices()[0], 100.0);
///
/// generator.apply_price_impact(30, 1.0);
/// let impacted = generator.price_path().unwrap();
/// assert_eq!(impacted.prices()[29], path.prices()[29]);
/// assert!(impacted.prices()[30] > path.prices()[30]);
/// ```
#[derive(Debug)]
pub struct PathGenerator {
    config: SimulationConfig,
    impact: PriceImpactModel,
    rng: StdRng,
    path: Option<PricePath>,
}

impl PathGenerator {
    /// Creates a generator with the default impact model.
    ///
    /// # Errors
    ///
    /// Returns `MMError::InvalidConfiguration` if `config` fails validation.
    pub fn new(config: SimulationConfig) -> MMResult<Self> {
        Self::with_impact_model(config, PriceImpactModel::default())
    }

    /// Creates a generator with a specific impact model.
    ///
    /// # Errors
    ///
    /// Returns `MMError::InvalidConfiguration` if `config` fails validation.
    pub fn with_impact_model(config: SimulationConfig, impact: PriceImpactModel) -> MMResult<Self> {
        config.validate()?;
        let rng = seeded_rng(config.seed);
        Ok(Self {
            config,
            impact,
            rng,
            path: None,
        })
    }

    /// Returns the simulation configuration.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the impact model used by `apply_price_impact`.
    #[must_use]
    pub fn impact_model(&self) -> &PriceImpactModel {
        &self.impact
    }

    /// Generates a full path of `N + 1` points.
    ///
    /// The returned path is a copy; the generator keeps its own for impact
    /// application. A second call continues the same random stream and
    /// replaces the stored path.
    pub fn generate(&mut self) -> PricePath {
        let steps = self.config.steps();
        let sqrt_dt = self.config.time_step.sqrt();

        let times = time_grid(self.config.horizon, steps);

        let mut prices = Vec::with_capacity(steps.saturating_add(1));
        prices.push(self.config.initial_price);
        let mut wiener = 0.0;
        for _ in 0..steps {
            wiener += standard_normal(&mut self.rng) * sqrt_dt;
            prices.push(self.config.initial_price + self.config.volatility * wiener);
        }

        debug!(
            steps,
            initial_price = self.config.initial_price,
            volatility = self.config.volatility,
            "generated price path"
        );

        let path = PricePath::from_parts(times, prices);
        self.path = Some(path.clone());
        path
    }

    /// The stored path, including any impacts applied since generation.
    #[must_use]
    pub fn price_path(&self) -> Option<&PricePath> {
        self.path.as_ref()
    }

    /// Applies a single trade to the stored path.
    ///
    /// Skipped if nothing has been generated yet or the index is out of range.
    pub fn apply_price_impact(&mut self, time_index: usize, signed_size: Quantity) -> ImpactOutcome {
        let event = ImpactEvent::new(time_index, signed_size);
        match self.path.as_mut() {
            Some(path) => self.impact.apply(path.prices_mut(), event),
            None => {
                warn!(time_index, "no generated path, skipping impact");
                ImpactOutcome::Skipped
            }
        }
    }

    /// Applies trades to the stored path in the order given.
    pub fn apply_price_impacts<I>(&mut self, events: I) -> ImpactReport
    where
        I: IntoIterator,
        I::Item: Into<ImpactEvent>,
    {
        match self.path.as_mut() {
            Some(path) => self.impact.apply_all(path.prices_mut(), events),
            None => {
                let skipped = events.into_iter().count();
                warn!(skipped, "no generated path, skipping impacts");
                ImpactReport {
                    skipped,
                    ..ImpactReport::default()
                }
            }
        }
    }
}

/// Uniform grid of `steps + 1` points from 0 to `horizon`, last point exact.
fn time_grid(horizon: Time, steps: usize) -> Vec<Time> {
    if steps == 0 {
        return vec![0.0];
    }

    let step = horizon / steps as f64;
    let mut times: Vec<Time> = (0..=steps).map(|j| j as f64 * step).collect();
    times[steps] = horizon;
    times
}

/// Generates a single path from `config` without keeping a generator around.
///
/// # Errors
///
/// Returns `MMError::InvalidConfiguration` if `config` fails validation.
pub fn generate_path(config: &SimulationConfig) -> MMResult<PricePath> {
    Ok(PathGenerator::new(config.clone())?.generate())
}
