//! Utility functions for profit queries
//!
//! This module provides the price-list parser used by the query path and a
//! synthetic series generator for demos and tests.

use crate::error::{ProfitError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parse a comma-separated price list into per-minute integer prices
///
/// # Arguments
/// * `raw` - Comma-separated integers, e.g. `"10,7,5,8,11,9"`
///
/// # Returns
/// * `Result<Vec<i64>>` - One price per minute offset from the anchor, or
///   the error describing what was wrong with the list
pub fn parse_prices(raw: &str) -> Result<Vec<i64>> {
    let tokens: Vec<&str> = raw.split(',').collect();
    if tokens.len() < 2 {
        return Err(ProfitError::InsufficientData(
            "at least 2 stock prices must be provided".to_string(),
        ));
    }

    tokens
        .iter()
        .map(|token| {
            token.trim().parse::<i64>().map_err(|_| {
                ProfitError::InvalidNumericData(format!(
                    "stock prices should contain whole numbers only, got '{}'",
                    token.trim()
                ))
            })
        })
        .collect()
}

/// Generate a synthetic per-minute price series as a bounded random walk
///
/// The walk never drops below 1, and the same seed always produces the same
/// series, so generated fixtures are reproducible.
///
/// # Arguments
/// * `len` - Number of per-minute prices to generate
/// * `base_price` - Starting price level
/// * `max_step` - Largest per-minute move in either direction
/// * `seed` - RNG seed
///
/// # Returns
/// * `Vec<i64>` - Generated prices
pub fn generate_price_series(len: usize, base_price: i64, max_step: i64, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut prices = Vec::with_capacity(len);
    let mut price = base_price;

    for _ in 0..len {
        price = (price + rng.gen_range(-max_step..=max_step)).max(1);
        prices.push(price);
    }

    prices
}
