//! Best Trade Example
//!
//! This example demonstrates how to:
//! 1. Generate a synthetic per-minute price series
//! 2. Build and validate a profit query request
//! 3. Compute the best buy/sell pair for a time window
//! 4. Handle the query error kinds
//!
//! Run with `RUST_LOG=debug` to see the computed report logged through the
//! log facade as well.

use chrono::{Duration, TimeZone, Utc};
use trade_window::utils::generate_price_series;
use trade_window::{find_maximum_profit, StockRequest};

fn main() {
    env_logger::init();

    // One price per minute from the 10:00 anchor, a 390-minute trading day
    println!("Generating test data...");
    let prices = generate_price_series(390, 100, 3, 7);
    let stock_prices = prices
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(",");

    let anchor = Utc.with_ymd_and_hms(2023, 1, 2, 10, 0, 0).unwrap();
    let request = StockRequest::new(
        "ACME",
        anchor + Duration::minutes(15),
        anchor + Duration::minutes(120),
        &stock_prices,
    );

    if !request.is_valid() {
        eprintln!("Request is missing required fields");
        return;
    }

    println!(
        "Searching minutes {}..{} of a {}-minute series",
        15,
        120,
        prices.len()
    );

    match find_maximum_profit(request) {
        Ok(report) => {
            println!("{}", report);
            println!("Computed at {}", report.computed_at);
        }
        Err(err) => eprintln!("Query failed: {}", err),
    }
}
