//! Trade records consumed by the impact model.

use crate::types::primitives::{Quantity, Time};

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// A single trade to be applied to a price history.
///
/// The sign of `signed_size` encodes direction (positive = buy, negative = sell),
/// its magnitude the traded quantity.
///
/// # Example
///
/// ```rust
/// use mm_sim_rs::impact::ImpactEvent;
///
/// let event = ImpactEvent::new(30, -2.0);
/// assert!(event.is_sell());
/// ```
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple))]
pub struct ImpactEvent {
    /// Index into the price history where the impact starts.
    pub time_index: usize,
    /// Signed trade size.
    pub signed_size: Quantity,
}

impl ImpactEvent {
    /// Creates a new impact event.
    #[must_use]
    pub fn new(time_index: usize, signed_size: Quantity) -> Self {
        Self {
            time_index,
            signed_size,
        }
    }

    /// Creates an event from a trade time on a grid with step `time_step`.
    ///
    /// The index is `floor(time / time_step)`. Returns `None` for negative or
    /// non-finite times and for a non-positive step.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mm_sim_rs::impact::ImpactEvent;
    ///
    /// let event = ImpactEvent::from_time(0.25, 1.0, 0.05).unwrap();
    /// assert_eq!(event.time_index, 5);
    /// ```
    #[must_use]
    pub fn from_time(time: Time, signed_size: Quantity, time_step: Time) -> Option<Self> {
        if !time.is_finite() || time < 0.0 || !time_step.is_finite() || time_step <= 0.0 {
            return None;
        }
        let index = (time / time_step).floor() as usize;
        Some(Self::new(index, signed_size))
    }

    /// Returns true for a buy (positive size).
    #[must_use]
    pub fn is_buy(&self) -> bool {
        self.signed_size > 0.0
    }

    /// Returns true for a sell (negative size).
    #[must_use]
    pub fn is_sell(&self) -> bool {
        self.signed_size < 0.0
    }
}

impl From<(usize, Quantity)> for ImpactEvent {
    fn from((time_index, signed_size): (usize, Quantity)) -> Self {
        Self::new(time_index, signed_size)
    }
}
