//! Step-by-step path generation without a fixed horizon.

use rand::rngs::StdRng;
use tracing::{debug, trace};

use super::config::SimulationConfig;
use super::noise::{seeded_rng, standard_normal};
use crate::impact::{ImpactEvent, ImpactOutcome, ImpactReport, PriceImpactModel};
use crate::types::error::{MMError, MMResult};
use crate::types::primitives::{Price, Quantity, Time, Volatility};

/// Real-time price generator.
///
/// Each [`step`](Self::step) advances time by `dt` and moves the price by
/// `sigma * sqrt(dt) * Z`. The full history, starting at `(0, S0)`, is kept and
/// grows by one point per step.
///
/// # Example
///
/// ```rust
/// use mm_sim_rs::simulation::IncrementalGenerator;
///
/// let mut generator = IncrementalGenerator::new(100.0, 1.0, 0.01, Some(7)).unwrap();
/// let (t, _price) = generator.step();
/// assert!((t - 0.01).abs() < 1e-12);
///
/// let (times, prices) = generator.history();
/// assert_eq!(times.len(), 2);
/// assert_eq!(prices[0], 100.0);
/// ```
#[derive(Debug)]
pub struct IncrementalGenerator {
    price: Price,
    time: Time,
    volatility: Volatility,
    time_step: Time,
    times: Vec<Time>,
    prices: Vec<Price>,
    impact: PriceImpactModel,
    rng: StdRng,
}

impl IncrementalGenerator {
    /// Creates a new generator with the default impact model.
    ///
    /// # Errors
    ///
    /// Returns `MMError::InvalidConfiguration` if the price is not finite, the
    /// volatility is negative or the time step is not positive.
    pub fn new(
        initial_price: Price,
        volatility: Volatility,
        time_step: Time,
        seed: Option<u64>,
    ) -> MMResult<Self> {
        if !initial_price.is_finite() {
            return Err(MMError::InvalidConfiguration(
                "initial_price must be finite".to_string(),
            ));
        }
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(MMError::InvalidConfiguration(
                "volatility must be non-negative".to_string(),
            ));
        }
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(MMError::InvalidConfiguration(
                "time_step must be positive".to_string(),
            ));
        }

        debug!(initial_price, volatility, time_step, "created incremental generator");
        Ok(Self {
            price: initial_price,
            time: 0.0,
            volatility,
            time_step,
            times: vec![0.0],
            prices: vec![initial_price],
            impact: PriceImpactModel::default(),
            rng: seeded_rng(seed),
        })
    }

    /// Creates a generator from a simulation config; the horizon only takes
    /// part in validation.
    ///
    /// # Errors
    ///
    /// Returns `MMError::InvalidConfiguration` if `config` fails validation.
    pub fn from_config(config: &SimulationConfig) -> MMResult<Self> {
        config.validate()?;
        Self::new(
            config.initial_price,
            config.volatility,
            config.time_step,
            config.seed,
        )
    }

    /// Replaces the impact model.
    #[must_use]
    pub fn with_impact_model(mut self, impact: PriceImpactModel) -> Self {
        self.impact = impact;
        self
    }

    /// Advances one step and returns the new `(time, price)`.
    pub fn step(&mut self) -> (Time, Price) {
        let shock = standard_normal(&mut self.rng);
        self.price += self.volatility * self.time_step.sqrt() * shock;
        self.time += self.time_step;

        self.times.push(self.time);
        self.prices.push(self.price);

        trace!(time = self.time, price = self.price, "step");
        (self.time, self.price)
    }

    /// Full history as `(times, prices)`.
    #[must_use]
    pub fn history(&self) -> (&[Time], &[Price]) {
        (&self.times, &self.prices)
    }

    /// Current price.
    #[must_use]
    pub fn current_price(&self) -> Price {
        self.price
    }

    /// Current time.
    #[must_use]
    pub fn current_time(&self) -> Time {
        self.time
    }

    /// Number of points in the history.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Always false: the history is seeded with the initial point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Applies a single trade to the history.
    ///
    /// The shift carries into the current price, so later steps build on the
    /// impacted level.
    pub fn apply_price_impact(&mut self, time_index: usize, signed_size: Quantity) -> ImpactOutcome {
        let outcome = self
            .impact
            .apply(&mut self.prices, ImpactEvent::new(time_index, signed_size));
        self.sync_current_price();
        outcome
    }

    /// Applies trades to the history in the order given.
    pub fn apply_price_impacts<I>(&mut self, events: I) -> ImpactReport
    where
        I: IntoIterator,
        I::Item: Into<ImpactEvent>,
    {
        let report = self.impact.apply_all(&mut self.prices, events);
        self.sync_current_price();
        report
    }

    fn sync_current_price(&mut self) {
        if let Some(last) = self.prices.last() {
            self.price = *last;
        }
    }
}
