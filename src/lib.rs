//! # Trade Window
//!
//! `trade_window` is a Rust library for finding the single most profitable
//! buy/sell pair within a time window of minute-by-minute stock prices.
//!
//! Prices arrive as a comma-separated list with one entry per minute,
//! starting at the 10:00 trading-day anchor. A query names a start and an
//! end timestamp; the library maps them onto indices into the series,
//! rejects or clamps windows that fall outside it and scans every
//! buy-before-sell pair inside the window for the largest profit.
//!
//! Every query is a pure, call-local computation: no shared state, no I/O,
//! safe to run concurrently without coordination.
//!
//! ## Usage Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use trade_window::{find_maximum_profit, StockRequest};
//!
//! let request = StockRequest::new(
//!     "ACME",
//!     Utc.with_ymd_and_hms(2023, 1, 2, 10, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2023, 1, 2, 10, 5, 0).unwrap(),
//!     "10,7,5,8,11,9",
//! );
//! assert!(request.is_valid());
//!
//! let report = find_maximum_profit(request).unwrap();
//! assert_eq!(report.max_profit, 6); // buy at 5, sell at 11
//! ```

pub mod error;
mod profit;
mod request;
pub mod utils;
pub mod window;

pub use error::{ProfitError, Result};
pub use profit::{best_trade, find_maximum_profit, BestTrade, ProfitReport};
pub use request::StockRequest;
pub use window::PriceWindow;
