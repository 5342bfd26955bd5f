//! Permanent, concave price impact.
//!
//! A trade of signed size `Q` shifts every price from its time index onward by
//!
//! ```text
//! delta = alpha * sign(Q) * |Q|^beta
//! ```
//!
//! Shifts are computed from the event alone and added to the current values, so
//! repeated impacts stack on top of earlier ones.

use tracing::{debug, warn};

use super::event::ImpactEvent;
use crate::types::error::{MMError, MMResult};
use crate::types::primitives::{Price, Quantity};

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// Result of applying a single impact event.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple))]
pub enum ImpactOutcome {
    /// The suffix starting at the event index was shifted by `delta`.
    Applied {
        /// Price shift added to every affected point.
        delta: Price,
    },
    /// The event was ignored (index out of range or non-finite size).
    Skipped,
}

impl ImpactOutcome {
    /// Returns true if the event changed the history.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Summary of a batch of impact events.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple))]
pub struct ImpactReport {
    /// Number of events applied.
    pub applied: usize,
    /// Number of events skipped.
    pub skipped: usize,
    /// Sum of all applied deltas, i.e. the shift seen by the last price.
    pub net_shift: Price,
}

impl ImpactReport {
    fn record(&mut self, outcome: ImpactOutcome) {
        match outcome {
            ImpactOutcome::Applied { delta } => {
                self.applied += 1;
                self.net_shift += delta;
            }
            ImpactOutcome::Skipped => self.skipped += 1,
        }
    }
}

/// Permanent price impact model parameterised by `impact_factor` (alpha) and `beta`.
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple))]
pub struct PriceImpactModel {
    /// Scale of the impact (alpha). Must be positive.
    pub impact_factor: f64,

    /// Concavity exponent applied to the trade size. Must be positive,
    /// typically in `(0, 1]`.
    pub beta: f64,
}

impl PriceImpactModel {
    /// Creates a new impact model with validation.
    ///
    /// # Errors
    ///
    /// Returns `MMError::InvalidConfiguration` if `impact_factor` or `beta` is
    /// not a positive finite number.
    pub fn new(impact_factor: f64, beta: f64) -> MMResult<Self> {
        if !impact_factor.is_finite() || impact_factor <= 0.0 {
            return Err(MMError::InvalidConfiguration(
                "impact_factor must be positive".to_string(),
            ));
        }

        if !beta.is_finite() || beta <= 0.0 {
            return Err(MMError::InvalidConfiguration(
                "beta must be positive".to_string(),
            ));
        }

        debug!(impact_factor, beta, "created price impact model");
        Ok(Self {
            impact_factor,
            beta,
        })
    }

    /// Price shift caused by a trade of `signed_size`.
    ///
    /// A zero size yields exactly zero regardless of `beta`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mm_sim_rs::impact::PriceImpactModel;
    ///
    /// let model = PriceImpactModel::new(0.1, 0.5).unwrap();
    /// assert!((model.delta(4.0) - 0.2).abs() < 1e-12);
    /// assert!((model.delta(-4.0) + 0.2).abs() < 1e-12);
    /// assert_eq!(model.delta(0.0), 0.0);
    /// ```
    #[must_use]
    pub fn delta(&self, signed_size: Quantity) -> Price {
        let sign = if signed_size > 0.0 {
            1.0
        } else if signed_size < 0.0 {
            -1.0
        } else {
            0.0
        };
        self.impact_factor * sign * signed_size.abs().powf(self.beta)
    }

    /// Applies one event to `prices`, shifting `prices[time_index..]`.
    ///
    /// Out-of-range indices and non-finite sizes are skipped with a warning.
    pub fn apply(&self, prices: &mut [Price], event: ImpactEvent) -> ImpactOutcome {
        if event.time_index >= prices.len() {
            warn!(
                time_index = event.time_index,
                len = prices.len(),
                "impact index out of range, skipping"
            );
            return ImpactOutcome::Skipped;
        }

        if !event.signed_size.is_finite() {
            warn!(
                time_index = event.time_index,
                signed_size = event.signed_size,
                "non-finite impact size, skipping"
            );
            return ImpactOutcome::Skipped;
        }

        let delta = self.delta(event.signed_size);
        for price in &mut prices[event.time_index..] {
            *price += delta;
        }

        ImpactOutcome::Applied { delta }
    }

    /// Applies events in the order given.
    ///
    /// A skipped event never stops the remaining events from being applied.
    pub fn apply_all<I>(&self, prices: &mut [Price], events: I) -> ImpactReport
    where
        I: IntoIterator,
        I::Item: Into<ImpactEvent>,
    {
        let mut report = ImpactReport::default();
        for event in events {
            report.record(self.apply(prices, event.into()));
        }

        if report.skipped > 0 {
            debug!(
                applied = report.applied,
                skipped = report.skipped,
                "impact batch finished with skipped events"
            );
        }
        report
    }
}

impl Default for PriceImpactModel {
    fn default() -> Self {
        Self {
            impact_factor: 0.1,
            beta: 0.5,
        }
    }
}
