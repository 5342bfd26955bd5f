//! Strategy configuration parameters.

use super::avellaneda_stoikov::optimal_quotes;
use super::quote::Quote;
use crate::market_state::snapshot::MarketState;
use crate::types::error::{MMError, MMResult};
use crate::types::primitives::{OrderIntensity, Price, Quantity, RiskAversion, Time, Volatility};

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// Configuration parameters for the quoting strategy.
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple))]
pub struct StrategyConfig {
    /// Risk aversion parameter (gamma).
    ///
    /// Higher values widen the spread and strengthen the inventory skew.
    /// Must be positive.
    pub risk_aversion: RiskAversion,

    /// Liquidity parameter (k).
    ///
    /// Higher values model a deeper book and tighten the spread.
    /// Must be positive.
    pub order_intensity: OrderIntensity,

    /// End of the trading horizon (T), in simulation time units.
    pub terminal_time: Time,
}

impl StrategyConfig {
    /// Creates a new strategy configuration with validation.
    ///
    /// # Arguments
    ///
    /// * `risk_aversion` - Risk aversion parameter (gamma), must be positive
    /// * `order_intensity` - Liquidity parameter (k), must be positive
    /// * `terminal_time` - Horizon T, must be finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns `MMError::InvalidConfiguration` if parameters are invalid.
    pub fn new(
        risk_aversion: RiskAversion,
        order_intensity: OrderIntensity,
        terminal_time: Time,
    ) -> MMResult<Self> {
        if !risk_aversion.is_finite() || risk_aversion <= 0.0 {
            return Err(MMError::InvalidConfiguration(
                "risk_aversion must be positive".to_string(),
            ));
        }

        if !order_intensity.is_finite() || order_intensity <= 0.0 {
            return Err(MMError::InvalidConfiguration(
                "order_intensity must be positive".to_string(),
            ));
        }

        if !terminal_time.is_finite() || terminal_time < 0.0 {
            return Err(MMError::InvalidConfiguration(
                "terminal_time must be non-negative".to_string(),
            ));
        }

        Ok(Self {
            risk_aversion,
            order_intensity,
            terminal_time,
        })
    }

    /// Quotes around `mid_price` at `current_time` for the given inventory.
    ///
    /// # Errors
    ///
    /// Returns `MMError::InvalidQuoteParameters` if `current_time` is past the
    /// horizon or `volatility` is negative.
    pub fn quote(
        &self,
        mid_price: Price,
        inventory: Quantity,
        volatility: Volatility,
        current_time: Time,
    ) -> MMResult<Quote> {
        optimal_quotes(
            mid_price,
            inventory,
            self.risk_aversion,
            volatility,
            self.order_intensity,
            self.terminal_time,
            current_time,
        )
    }

    /// Quotes from a market snapshot.
    ///
    /// # Errors
    ///
    /// Returns `MMError::InvalidMarketState` for an unusable snapshot, otherwise
    /// the same errors as [`quote`](Self::quote).
    pub fn quote_from_state(&self, state: &MarketState, inventory: Quantity) -> MMResult<Quote> {
        state.validate()?;
        self.quote(state.mid_price, inventory, state.volatility, state.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = StrategyConfig::new(0.1, 1.5, 1.0);
        assert!(config.is_ok());

        let config = config.unwrap();
        assert_eq!(config.risk_aversion, 0.1);
        assert_eq!(config.order_intensity, 1.5);
        assert_eq!(config.terminal_time, 1.0);
    }

    #[test]
    fn test_invalid_risk_aversion_zero() {
        let config = StrategyConfig::new(0.0, 1.5, 1.0);
        assert!(config.is_err());
        assert!(matches!(
            config.unwrap_err(),
            MMError::InvalidConfiguration(_)
        ));
    }

    #[test]
    fn test_invalid_risk_aversion_negative() {
        let config = StrategyConfig::new(-0.5, 1.5, 1.0);
        if let Err(MMError::InvalidConfiguration(msg)) = config {
            assert!(msg.contains("risk_aversion must be positive"));
        } else {
            panic!("Expected InvalidConfiguration");
        }
    }

    #[test]
    fn test_invalid_order_intensity() {
        let config = StrategyConfig::new(0.5, 0.0, 1.0);
        if let Err(MMError::InvalidConfiguration(msg)) = config {
            assert!(msg.contains("order_intensity must be positive"));
        } else {
            panic!("Expected InvalidConfiguration");
        }
    }

    #[test]
    fn test_invalid_terminal_time() {
        let config = StrategyConfig::new(0.5, 1.5, -1.0);
        if let Err(MMError::InvalidConfiguration(msg)) = config {
            assert!(msg.contains("terminal_time must be non-negative"));
        } else {
            panic!("Expected InvalidConfiguration");
        }
    }

    #[test]
    fn test_quote_matches_free_function() {
        let config = StrategyConfig::new(0.1, 1.5, 1.0).unwrap();
        let quote = config.quote(100.0, 3.0, 1.0, 0.4).unwrap();
        let direct = optimal_quotes(100.0, 3.0, 0.1, 1.0, 1.5, 1.0, 0.4).unwrap();
        assert_eq!(quote, direct);
    }

    #[test]
    fn test_quote_past_horizon_fails() {
        let config = StrategyConfig::new(0.1, 1.5, 1.0).unwrap();
        assert!(matches!(
            config.quote(100.0, 0.0, 1.0, 2.0).unwrap_err(),
            MMError::InvalidQuoteParameters(_)
        ));
    }

    #[test]
    fn test_quote_from_state() {
        let config = StrategyConfig::new(0.1, 1.5, 1.0).unwrap();
        let state = MarketState::new(100.0, 1.0, 0.5);
        let quote = config.quote_from_state(&state, -2.0).unwrap();

        assert!(quote.mid() > 100.0);
        assert!(quote.bid < quote.ask);
    }

    #[test]
    fn test_quote_from_invalid_state() {
        let config = StrategyConfig::new(0.1, 1.5, 1.0).unwrap();
        let state = MarketState::new(f64::NAN, 1.0, 0.5);
        assert!(matches!(
            config.quote_from_state(&state, 0.0).unwrap_err(),
            MMError::InvalidMarketState(_)
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_display() {
        let config = StrategyConfig::new(0.5, 1.5, 1.0).unwrap();
        let display_str = format!("{}", config);
        assert!(display_str.contains("risk_aversion"));
        assert!(display_str.contains("0.5"));
        assert!(display_str.contains("order_intensity"));
        assert!(display_str.contains("1.5"));
    }
}
