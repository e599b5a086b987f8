//! Maximum-profit search over a windowed price series
//!
//! The search itself is an exhaustive scan of every buy-before-sell pair in
//! the working window. Price series are minute-granularity and bounded by a
//! single trading day, so the quadratic pass stays cheap in practice.

use crate::error::Result;
use crate::request::StockRequest;
use crate::utils::parse_prices;
use crate::window::PriceWindow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Best buy/sell pair found by a scan, all zeros when no pair is profitable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestTrade {
    /// Sell price minus buy price
    pub profit: i64,
    /// Price bought at
    pub buy: i64,
    /// Price sold at
    pub sell: i64,
}

/// Scan every (buy, sell) pair with the buy before the sell and return the
/// most profitable one
///
/// Only a strictly larger profit replaces the running best, so the first
/// pair reaching the maximum in scan order (buy index ascending, then sell
/// index ascending) is the one reported.
pub fn best_trade(prices: &[i64]) -> BestTrade {
    let mut best = BestTrade::default();

    for (i, &buy) in prices.iter().enumerate() {
        for &sell in &prices[i + 1..] {
            if sell <= buy {
                continue;
            }
            let profit = sell - buy;
            if profit > best.profit {
                best = BestTrade { profit, buy, sell };
            }
        }
    }

    best
}

/// Outcome of a profit query: the original request plus the best trade
/// found within its time window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitReport {
    /// Request the report was computed for
    pub request: StockRequest,
    /// When the computation ran
    pub computed_at: DateTime<Utc>,
    /// Best achievable profit, 0 when no pair is profitable
    pub max_profit: i64,
    /// Price bought at, 0 when no pair is profitable
    pub best_buy: i64,
    /// Price sold at, 0 when no pair is profitable
    pub best_sell: i64,
}

impl fmt::Display for ProfitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Profit: ${} (Buy at ${}, Sell at ${})",
            self.max_profit, self.best_buy, self.best_sell
        )
    }
}

/// Compute the maximum-profit trade for a request
///
/// Parses the request's price list, derives the minute window from its
/// timestamps against the 10:00 anchor and scans the window for the best
/// buy/sell pair. The report carries the original request and the time of
/// computation; when no profitable pair exists all three trade fields are 0.
///
/// # Errors
///
/// * `InsufficientData` - fewer than 2 prices in the list
/// * `InvalidNumericData` - a price is not a whole number
/// * `InvalidRange` - end time before start time
/// * `OutOfRange` - start time past the end of the series
/// * `WindowTooSmall` - window spans fewer than 2 minutes
pub fn find_maximum_profit(request: StockRequest) -> Result<ProfitReport> {
    let prices = parse_prices(&request.stock_prices)?;
    let window = PriceWindow::from_request_times(
        request.start_date_time,
        request.end_date_time,
        prices.len(),
    )?;

    let best = best_trade(window.slice(&prices));

    let report = ProfitReport {
        request,
        computed_at: Utc::now(),
        max_profit: best.profit,
        best_buy: best.buy,
        best_sell: best.sell,
    };
    log::debug!("{}", report);

    Ok(report)
}
