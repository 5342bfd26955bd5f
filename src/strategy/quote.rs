//! Quote request and output types.

use crate::types::primitives::{OrderIntensity, Price, Quantity, RiskAversion, Time, Volatility};

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// Bid/ask pair produced by the quote calculator.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple))]
pub struct Quote {
    /// Bid price.
    pub bid: Price,
    /// Ask price.
    pub ask: Price,
}

impl Quote {
    /// Creates a new quote.
    #[must_use]
    pub fn new(bid: Price, ask: Price) -> Self {
        Self { bid, ask }
    }

    /// Distance between ask and bid.
    #[must_use]
    pub fn spread(&self) -> Price {
        self.ask - self.bid
    }

    /// Midpoint of the quote (the reservation price for this model).
    #[must_use]
    pub fn mid(&self) -> Price {
        (self.bid + self.ask) / 2.0
    }

    /// Returns the pair as a `(bid, ask)` tuple.
    #[must_use]
    pub fn as_tuple(&self) -> (Price, Price) {
        (self.bid, self.ask)
    }
}

/// Inputs to a single quote computation.
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple))]
pub struct QuoteRequest {
    /// Current mid price (S).
    pub mid_price: Price,
    /// Signed inventory (q). Positive = long.
    pub inventory: Quantity,
    /// Risk aversion (gamma). Must be positive.
    pub risk_aversion: RiskAversion,
    /// Volatility (sigma). Must be non-negative.
    pub volatility: Volatility,
    /// Liquidity parameter (k). Must be positive.
    pub order_intensity: OrderIntensity,
    /// Time remaining to the horizon (tau = T - t). Must be non-negative.
    pub time_remaining: Time,
}
