//! Profit query request model and validation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A request to find the best buy/sell trade within a time window of a
/// per-minute price series
///
/// `stock_prices` carries one integer price per minute, comma separated,
/// with the first entry at the 10:00 trading-day anchor. The timestamps
/// bound the subrange of the series the search runs over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockRequest {
    /// Caller-chosen identifier, echoed back in the report
    pub identifier: String,
    /// Start of the query window
    pub start_date_time: DateTime<Utc>,
    /// End of the query window
    pub end_date_time: DateTime<Utc>,
    /// Comma-separated per-minute prices, e.g. `"10,7,5,8,11,9"`
    pub stock_prices: String,
}

impl StockRequest {
    /// Create a new request
    pub fn new(
        identifier: &str,
        start_date_time: DateTime<Utc>,
        end_date_time: DateTime<Utc>,
        stock_prices: &str,
    ) -> Self {
        Self {
            identifier: identifier.to_string(),
            start_date_time,
            end_date_time,
            stock_prices: stock_prices.to_string(),
        }
    }

    /// Pre-check that the request is worth computing on
    ///
    /// True when the identifier is non-empty after trimming and the price
    /// list is non-empty text with at least one comma-separated entry.
    /// This does not guarantee the entries are numeric or that the window
    /// is sane; those checks run during the query and fail with specific
    /// error kinds.
    pub fn is_valid(&self) -> bool {
        !self.identifier.trim().is_empty()
            && !self.stock_prices.trim().is_empty()
            && self.stock_prices.split(',').any(|token| !token.is_empty())
    }
}
