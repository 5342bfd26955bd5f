//! Simulation run parameters.

use crate::types::error::{MMError, MMResult};
use crate::types::primitives::{Price, Time, Volatility};

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// Largest step count a single path may have.
pub const MAX_STEPS: usize = 10_000_000;

/// Immutable parameters for one simulated price path.
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple))]
pub struct SimulationConfig {
    /// Initial mid price (S0).
    ///
    /// Not required to be positive: the process is arithmetic.
    pub initial_price: Price,

    /// Volatility (sigma). Must be non-negative.
    pub volatility: Volatility,

    /// Horizon (T). Must be positive.
    pub horizon: Time,

    /// Step size (dt). Must be positive.
    ///
    /// A step larger than the horizon is accepted and yields a one-point path.
    pub time_step: Time,

    /// Seed for the generator's random source.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new simulation configuration with validation.
    ///
    /// # Arguments
    ///
    /// * `initial_price` - Starting mid price, must be finite
    /// * `volatility` - Volatility, must be finite and non-negative
    /// * `horizon` - Horizon T, must be finite and positive
    /// * `time_step` - Step size dt, must be finite and positive
    /// * `seed` - Optional seed for reproducible paths
    ///
    /// # Errors
    ///
    /// Returns `MMError::InvalidConfiguration` if parameters are invalid.
    pub fn new(
        initial_price: Price,
        volatility: Volatility,
        horizon: Time,
        time_step: Time,
        seed: Option<u64>,
    ) -> MMResult<Self> {
        let config = Self {
            initial_price,
            volatility,
            horizon,
            time_step,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks every field, including configs built as struct literals or
    /// deserialized.
    ///
    /// # Errors
    ///
    /// Returns `MMError::InvalidConfiguration` on a non-finite price, a negative
    /// volatility, a non-positive horizon or step, or a step count above
    /// [`MAX_STEPS`].
    pub fn validate(&self) -> MMResult<()> {
        if !self.initial_price.is_finite() {
            return Err(MMError::InvalidConfiguration(
                "initial_price must be finite".to_string(),
            ));
        }

        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(MMError::InvalidConfiguration(
                "volatility must be non-negative".to_string(),
            ));
        }

        if !self.horizon.is_finite() || self.horizon <= 0.0 {
            return Err(MMError::InvalidConfiguration(
                "horizon must be positive".to_string(),
            ));
        }

        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(MMError::InvalidConfiguration(
                "time_step must be positive".to_string(),
            ));
        }

        if (self.horizon / self.time_step).floor() > MAX_STEPS as f64 {
            return Err(MMError::InvalidConfiguration(format!(
                "horizon / time_step exceeds {MAX_STEPS} steps"
            )));
        }

        Ok(())
    }

    /// Returns a copy of this configuration with a different seed.
    #[must_use]
    pub fn with_seed(&self, seed: Option<u64>) -> Self {
        Self {
            seed,
            ..self.clone()
        }
    }

    /// Number of steps N = floor(T / dt), at most [`MAX_STEPS`] for a
    /// validated config.
    #[must_use]
    pub fn steps(&self) -> usize {
        (self.horizon / self.time_step).floor() as usize
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_price: 100.0,
            volatility: 1.0,
            horizon: 1.0,
            time_step: 0.01,
            seed: None,
        }
    }
}
