//! Discretized price path representation.

use crate::types::primitives::{Price, Time};

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// Ordered sequence of `(time, price)` points.
///
/// Times and prices are stored as parallel vectors so either can be handed to a
/// plotting or analysis layer as a plain slice.
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple))]
pub struct PricePath {
    times: Vec<Time>,
    prices: Vec<Price>,
}

impl PricePath {
    /// Builds a path from parallel time and price vectors.
    ///
    /// Both vectors must have the same length.
    pub(crate) fn from_parts(times: Vec<Time>, prices: Vec<Price>) -> Self {
        debug_assert_eq!(times.len(), prices.len());
        Self { times, prices }
    }

    /// Number of points in the path (N + 1 for a batch path).
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns true if the path holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Time grid of the path.
    #[must_use]
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// Price sequence of the path.
    #[must_use]
    pub fn prices(&self) -> &[Price] {
        &self.prices
    }

    /// Price at `index`, if in range.
    #[must_use]
    pub fn price_at(&self, index: usize) -> Option<Price> {
        self.prices.get(index).copied()
    }

    /// Last price of the path.
    #[must_use]
    pub fn final_price(&self) -> Option<Price> {
        self.prices.last().copied()
    }

    /// Iterates over `(time, price)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Time, Price)> + '_ {
        self.times.iter().copied().zip(self.prices.iter().copied())
    }

    /// Consumes the path, returning `(times, prices)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Time>, Vec<Price>) {
        (self.times, self.prices)
    }

    pub(crate) fn prices_mut(&mut self) -> &mut [Price] {
        &mut self.prices
    }
}
