//! Market state snapshot representation.

use crate::simulation::{IncrementalGenerator, PricePath};
use crate::types::error::{MMError, MMResult};
use crate::types::primitives::{Price, Time, Volatility};

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// Observable state of the simulated market at a point in time.
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple))]
pub struct MarketState {
    /// Mid-price of the asset.
    pub mid_price: Price,

    /// Volatility of the price process.
    pub volatility: Volatility,

    /// Simulation time of the snapshot.
    pub time: Time,
}

impl MarketState {
    /// Creates a new market state snapshot.
    ///
    /// # Arguments
    ///
    /// * `mid_price` - Current mid-price of the asset
    /// * `volatility` - Volatility of the price process
    /// * `time` - Simulation time of the snapshot
    #[must_use]
    pub fn new(mid_price: Price, volatility: Volatility, time: Time) -> Self {
        Self {
            mid_price,
            volatility,
            time,
        }
    }

    /// Snapshot of point `index` of a path, if in range.
    #[must_use]
    pub fn from_path(path: &PricePath, index: usize, volatility: Volatility) -> Option<Self> {
        let mid_price = path.price_at(index)?;
        let time = *path.times().get(index)?;
        Some(Self::new(mid_price, volatility, time))
    }

    /// Snapshot of the latest point of an incremental generator.
    #[must_use]
    pub fn from_generator(generator: &IncrementalGenerator, volatility: Volatility) -> Self {
        Self::new(generator.current_price(), volatility, generator.current_time())
    }

    /// Checks that all fields are usable for quoting.
    ///
    /// # Errors
    ///
    /// Returns `MMError::InvalidMarketState` for non-finite values or a
    /// negative volatility.
    pub fn validate(&self) -> MMResult<()> {
        if !self.mid_price.is_finite() {
            return Err(MMError::InvalidMarketState(
                "mid_price must be finite".to_string(),
            ));
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(MMError::InvalidMarketState(
                "volatility must be non-negative".to_string(),
            ));
        }
        if !self.time.is_finite() {
            return Err(MMError::InvalidMarketState(
                "time must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
