//! Avellaneda-Stoikov quote calculations.
//!
//! All functions are pure. Precondition violations (`gamma <= 0`, `k <= 0`,
//! `tau < 0`, `sigma < 0`, non-finite inputs) are returned as
//! `MMError::InvalidQuoteParameters` rather than producing meaningless prices.

use super::quote::{Quote, QuoteRequest};
use crate::types::error::{MMError, MMResult};
use crate::types::primitives::{OrderIntensity, Price, Quantity, RiskAversion, Time, Volatility};

fn ensure_finite(name: &str, value: f64) -> MMResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MMError::InvalidQuoteParameters(format!(
            "{name} must be finite"
        )))
    }
}

fn validate_risk_aversion(gamma: RiskAversion) -> MMResult<()> {
    ensure_finite("risk_aversion", gamma)?;
    if gamma <= 0.0 {
        return Err(MMError::InvalidQuoteParameters(
            "risk_aversion must be positive".to_string(),
        ));
    }
    Ok(())
}

fn validate_volatility(sigma: Volatility) -> MMResult<()> {
    ensure_finite("volatility", sigma)?;
    if sigma < 0.0 {
        return Err(MMError::InvalidQuoteParameters(
            "volatility must be non-negative".to_string(),
        ));
    }
    Ok(())
}

fn validate_time_remaining(tau: Time) -> MMResult<()> {
    ensure_finite("time_remaining", tau)?;
    if tau < 0.0 {
        return Err(MMError::InvalidQuoteParameters(
            "time_remaining must be non-negative".to_string(),
        ));
    }
    Ok(())
}

/// Inventory skew `q * gamma * sigma^2 * tau`.
///
/// Positive for a long position, which pushes both quotes down.
///
/// # Errors
///
/// Returns `MMError::InvalidQuoteParameters` on a non-positive `gamma`, negative
/// `sigma` or `tau`, or non-finite input.
pub fn calculate_inventory_adjustment(
    inventory: Quantity,
    gamma: RiskAversion,
    sigma: Volatility,
    tau: Time,
) -> MMResult<Price> {
    ensure_finite("inventory", inventory)?;
    validate_risk_aversion(gamma)?;
    validate_volatility(sigma)?;
    validate_time_remaining(tau)?;

    Ok(inventory * gamma * sigma.powi(2) * tau)
}

/// Inventory-independent half spread `(1/gamma) * ln(1 + gamma/k)`.
///
/// # Errors
///
/// Returns `MMError::InvalidQuoteParameters` if `gamma` or `k` is not positive.
pub fn calculate_half_spread(gamma: RiskAversion, k: OrderIntensity) -> MMResult<Price> {
    validate_risk_aversion(gamma)?;
    ensure_finite("order_intensity", k)?;
    if k <= 0.0 {
        return Err(MMError::InvalidQuoteParameters(
            "order_intensity must be positive".to_string(),
        ));
    }

    Ok((1.0 / gamma) * (gamma / k).ln_1p())
}

/// Optimal bid/ask around `mid_price` for the given inventory.
///
/// ```text
/// adjustment  = q * gamma * sigma^2 * (T - t)
/// half_spread = (1/gamma) * ln(1 + gamma/k)
/// bid = S - adjustment - half_spread
/// ask = S - adjustment + half_spread
/// ```
///
/// # Errors
///
/// Returns `MMError::InvalidQuoteParameters` if a precondition is violated,
/// including `current_time > terminal_time`.
///
/// # Example
///
/// ```rust
/// use mm_sim_rs::strategy::avellaneda_stoikov::optimal_quotes;
///
/// let quote = optimal_quotes(100.0, 0.0, 0.1, 1.0, 1.5, 1.0, 0.0).unwrap();
/// assert!((quote.bid - 99.35461).abs() < 1e-4);
/// assert!((quote.ask - 100.64539).abs() < 1e-4);
/// ```
pub fn optimal_quotes(
    mid_price: Price,
    inventory: Quantity,
    gamma: RiskAversion,
    sigma: Volatility,
    k: OrderIntensity,
    terminal_time: Time,
    current_time: Time,
) -> MMResult<Quote> {
    ensure_finite("mid_price", mid_price)?;
    ensure_finite("terminal_time", terminal_time)?;
    ensure_finite("current_time", current_time)?;

    let adjustment =
        calculate_inventory_adjustment(inventory, gamma, sigma, terminal_time - current_time)?;
    let half_spread = calculate_half_spread(gamma, k)?;
    let reservation = mid_price - adjustment;

    Ok(Quote::new(reservation - half_spread, reservation + half_spread))
}

/// Computes quotes from a [`QuoteRequest`].
///
/// # Errors
///
/// Same as [`optimal_quotes`].
pub fn quotes_for_request(request: &QuoteRequest) -> MMResult<Quote> {
    optimal_quotes(
        request.mid_price,
        request.inventory,
        request.risk_aversion,
        request.volatility,
        request.order_intensity,
        request.time_remaining,
        0.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn test_reference_quotes() {
        let quote = optimal_quotes(100.0, 0.0, 0.1, 1.0, 1.5, 1.0, 0.0).unwrap();
        let half_spread = 10.0 * (1.0_f64 + 0.1 / 1.5).ln();

        assert!((half_spread - 0.645385).abs() < 1e-6);
        assert!((quote.bid - (100.0 - half_spread)).abs() < EPS);
        assert!((quote.ask - (100.0 + half_spread)).abs() < EPS);
        assert!((quote.bid - 99.354615).abs() < 1e-6);
        assert!((quote.ask - 100.645385).abs() < 1e-6);
    }

    #[test]
    fn test_symmetric_at_zero_inventory() {
        let quote = optimal_quotes(250.0, 0.0, 0.5, 2.0, 1.5, 1.0, 0.25).unwrap();
        let half_spread = calculate_half_spread(0.5, 1.5).unwrap();

        assert!((quote.mid() - 250.0).abs() < EPS);
        assert!((250.0 - quote.bid - half_spread).abs() < EPS);
        assert!((quote.ask - 250.0 - half_spread).abs() < EPS);
    }

    #[test]
    fn test_long_inventory_skews_down() {
        let flat = optimal_quotes(100.0, 0.0, 0.1, 1.0, 1.5, 1.0, 0.0).unwrap();
        let long = optimal_quotes(100.0, 5.0, 0.1, 1.0, 1.5, 1.0, 0.0).unwrap();
        let longer = optimal_quotes(100.0, 10.0, 0.1, 1.0, 1.5, 1.0, 0.0).unwrap();

        assert!(long.bid < flat.bid);
        assert!(long.ask < flat.ask);
        assert!(longer.bid < long.bid);
        assert!(longer.ask < long.ask);

        let bid_move = flat.bid - long.bid;
        let ask_move = flat.ask - long.ask;
        assert!((bid_move - ask_move).abs() < EPS);
        assert!((bid_move - 0.5).abs() < EPS);
    }

    #[test]
    fn test_short_inventory_skews_up() {
        let flat = optimal_quotes(100.0, 0.0, 0.1, 1.0, 1.5, 1.0, 0.0).unwrap();
        let short = optimal_quotes(100.0, -5.0, 0.1, 1.0, 1.5, 1.0, 0.0).unwrap();
        assert!(short.bid > flat.bid);
        assert!(short.ask > flat.ask);
    }

    #[test]
    fn test_bid_never_above_ask() {
        for q in [-100.0, -1.0, 0.0, 1.0, 100.0] {
            let quote = optimal_quotes(100.0, q, 0.3, 2.0, 1.5, 1.0, 0.0).unwrap();
            assert!(quote.bid <= quote.ask);
            assert!((quote.spread() - 2.0 * calculate_half_spread(0.3, 1.5).unwrap()).abs() < EPS);
        }
    }

    #[test]
    fn test_adjustment_grows_with_gamma_and_sigma() {
        let base = calculate_inventory_adjustment(3.0, 0.1, 1.0, 1.0).unwrap();
        let higher_gamma = calculate_inventory_adjustment(3.0, 0.2, 1.0, 1.0).unwrap();
        let higher_sigma = calculate_inventory_adjustment(3.0, 0.1, 1.5, 1.0).unwrap();

        assert!(higher_gamma.abs() > base.abs());
        assert!(higher_sigma.abs() > base.abs());

        let short = calculate_inventory_adjustment(-3.0, 0.2, 1.0, 1.0).unwrap();
        assert!(short.abs() > base.abs());
    }

    #[test]
    fn test_adjustment_vanishes_at_horizon() {
        let adjustment = calculate_inventory_adjustment(10.0, 0.1, 1.0, 0.0).unwrap();
        assert_eq!(adjustment, 0.0);

        let quote = optimal_quotes(100.0, 10.0, 0.1, 1.0, 1.5, 1.0, 1.0).unwrap();
        assert!((quote.mid() - 100.0).abs() < EPS);
    }

    #[test]
    fn test_half_spread_behaviour() {
        let tight = calculate_half_spread(0.1, 10.0).unwrap();
        let wide = calculate_half_spread(0.1, 1.0).unwrap();
        assert!(tight < wide);

        let cautious = calculate_half_spread(1.0, 1.5).unwrap();
        let relaxed = calculate_half_spread(0.1, 1.5).unwrap();
        assert!(cautious > 0.0 && relaxed > 0.0);
    }

    #[test]
    fn test_invalid_gamma() {
        let result = optimal_quotes(100.0, 0.0, 0.0, 1.0, 1.5, 1.0, 0.0);
        if let Err(MMError::InvalidQuoteParameters(msg)) = result {
            assert!(msg.contains("risk_aversion must be positive"));
        } else {
            panic!("Expected InvalidQuoteParameters");
        }
        assert!(optimal_quotes(100.0, 0.0, -0.1, 1.0, 1.5, 1.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_k() {
        let result = optimal_quotes(100.0, 0.0, 0.1, 1.0, 0.0, 1.0, 0.0);
        if let Err(MMError::InvalidQuoteParameters(msg)) = result {
            assert!(msg.contains("order_intensity must be positive"));
        } else {
            panic!("Expected InvalidQuoteParameters");
        }
    }

    #[test]
    fn test_negative_time_remaining() {
        let result = optimal_quotes(100.0, 1.0, 0.1, 1.0, 1.5, 1.0, 1.5);
        if let Err(MMError::InvalidQuoteParameters(msg)) = result {
            assert!(msg.contains("time_remaining must be non-negative"));
        } else {
            panic!("Expected InvalidQuoteParameters");
        }
    }

    #[test]
    fn test_negative_volatility() {
        assert!(matches!(
            optimal_quotes(100.0, 1.0, 0.1, -1.0, 1.5, 1.0, 0.0).unwrap_err(),
            MMError::InvalidQuoteParameters(_)
        ));
    }

    #[test]
    fn test_non_finite_mid_price() {
        let result = optimal_quotes(f64::NAN, 0.0, 0.1, 1.0, 1.5, 1.0, 0.0);
        if let Err(MMError::InvalidQuoteParameters(msg)) = result {
            assert!(msg.contains("mid_price must be finite"));
        } else {
            panic!("Expected InvalidQuoteParameters");
        }
    }

    #[test]
    fn test_quotes_for_request() {
        let request = QuoteRequest {
            mid_price: 100.0,
            inventory: 2.0,
            risk_aversion: 0.1,
            volatility: 1.0,
            order_intensity: 1.5,
            time_remaining: 0.5,
        };
        let from_request = quotes_for_request(&request).unwrap();
        let direct = optimal_quotes(100.0, 2.0, 0.1, 1.0, 1.5, 1.0, 0.5).unwrap();

        assert!((from_request.bid - direct.bid).abs() < EPS);
        assert!((from_request.ask - direct.ask).abs() < EPS);
    }
}
