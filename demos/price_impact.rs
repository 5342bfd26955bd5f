//! Price Impact Example
//!
//! This example demonstrates:
//! - Generating a reproducible mid-price path
//! - Applying a buy and two sells as permanent impact
//! - Quoting around the impacted mid price at different inventory levels
//!
//! Run with: `RUST_LOG=debug cargo run --example price_impact`

use mm_sim_rs::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> MMResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Price Impact Example ===\n");

    let config = SimulationConfig::new(100.0, 1.0, 1.0, 0.01, Some(42))?;
    let impact = PriceImpactModel::new(0.1, 0.75)?;
    let mut generator = PathGenerator::with_impact_model(config.clone(), impact)?;
    let original = generator.generate();

    println!("Simulation:");
    println!("  S0: {}", config.initial_price);
    println!("  Sigma: {}", config.volatility);
    println!("  Steps: {}\n", config.steps());

    // Buy at t=0.3, sell at t=0.5 and t=0.8
    let trades = [(0.3, 1.0), (0.5, -1.0), (0.8, -1.0)];
    let events: Vec<ImpactEvent> = trades
        .iter()
        .filter_map(|&(time, size)| ImpactEvent::from_time(time, size, config.time_step))
        .collect();

    let report = generator.apply_price_impacts(events.iter().copied());
    println!(
        "Applied {} trades ({} skipped), net shift {:+.4}\n",
        report.applied, report.skipped, report.net_shift
    );

    let Some(impacted) = generator.price_path() else {
        return Err(MMError::InvalidMarketState("no generated path".to_string()));
    };

    println!("--- Trades ---\n");
    for event in &events {
        let index = event.time_index;
        let label = if event.is_buy() { "Buy" } else { "Sell" };
        println!(
            "  {} at t={:.2}: original {:.4}, impacted {:.4}",
            label,
            impacted.times()[index],
            original.prices()[index],
            impacted.prices()[index],
        );
    }

    let strategy = StrategyConfig::new(0.1, 1.5, config.horizon)?;
    let Some(state) = MarketState::from_path(impacted, 60, config.volatility) else {
        return Err(MMError::InvalidMarketState("index out of range".to_string()));
    };

    println!("\n--- Quotes at t={:.2}, mid {:.4} ---\n", state.time, state.mid_price);
    for inventory in [-10.0, -5.0, 0.0, 5.0, 10.0] {
        let quote = strategy.quote_from_state(&state, inventory)?;
        println!(
            "  Inventory {:+5}: bid {:.4}, ask {:.4}, skew {:+.4}",
            inventory,
            quote.bid,
            quote.ask,
            quote.mid() - state.mid_price
        );
    }

    println!("\n--- Real-time Stepping ---\n");
    let mut live = IncrementalGenerator::from_config(&config)?;
    for _ in 0..5 {
        let (t, price) = live.step();
        let quote = strategy.quote(price, 0.0, config.volatility, t)?;
        println!("  t={:.2}: mid {:.4}, bid {:.4}, ask {:.4}", t, price, quote.bid, quote.ask);
    }

    Ok(())
}
