//! Trading-day anchor and price-window derivation
//!
//! Maps wall-clock timestamps onto per-minute indices into a price series.
//! The trading day is anchored at 10:00; a timestamp N whole minutes after
//! the anchor addresses element N of the series.

use crate::error::{ProfitError, Result};
use chrono::{DateTime, Utc};

/// Hour of day at which the trading day (and the price series) begins
pub const MARKET_OPEN_HOUR: u32 = 10;

/// Anchor timestamp for the trading day containing `ts`: the same calendar
/// date, at 10:00:00.000
pub fn day_anchor(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.date_naive()
        .and_hms_opt(MARKET_OPEN_HOUR, 0, 0)
        .unwrap()
        .and_utc()
}

/// Whole minutes elapsed from `from` to `to`, floored at zero
///
/// A `to` earlier than `from` yields 0 rather than a negative offset, so
/// timestamps before the day anchor all land on index 0.
pub fn elapsed_minutes(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_minutes().max(0)
}

/// Inclusive index range of the price series over which the profit search
/// runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceWindow {
    start_index: usize,
    end_index: usize,
}

impl PriceWindow {
    /// Derive the window for a request's timestamps against a series of
    /// `price_count` per-minute prices
    ///
    /// Indices come from whole minutes elapsed since the 10:00 anchor of the
    /// start timestamp's day. The end index is clamped to the last element
    /// of the series once the range checks have passed. A start index equal
    /// to `price_count` is accepted; the clamp then leaves an empty working
    /// window and the search reports no profit.
    pub fn from_request_times(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        price_count: usize,
    ) -> Result<Self> {
        let anchor = day_anchor(start);
        let start_index = elapsed_minutes(anchor, start) as usize;
        let end_index = elapsed_minutes(anchor, end) as usize;

        if end_index < start_index {
            return Err(ProfitError::InvalidRange(
                "end date cannot be before start date".to_string(),
            ));
        }
        if start_index > price_count {
            return Err(ProfitError::OutOfRange(
                "start and end times are out of range of the price series".to_string(),
            ));
        }
        if end_index - start_index < 2 {
            return Err(ProfitError::WindowTooSmall(
                "time range should be at least 2 minutes".to_string(),
            ));
        }

        Ok(Self {
            start_index,
            end_index: end_index.min(price_count.saturating_sub(1)),
        })
    }

    /// First index of the window
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Last index of the window, already clamped to the series
    pub fn end_index(&self) -> usize {
        self.end_index
    }

    /// The inclusive `[start_index, end_index]` subsequence of `prices`
    ///
    /// `prices` must be the series the window was derived for. Empty when
    /// the start index sits just past the series.
    pub fn slice<'a>(&self, prices: &'a [i64]) -> &'a [i64] {
        if self.start_index >= prices.len() {
            return &[];
        }
        &prices[self.start_index..=self.end_index]
    }
}
