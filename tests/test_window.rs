use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use trade_window::window::{day_anchor, elapsed_minutes, PriceWindow, MARKET_OPEN_HOUR};
use trade_window::ProfitError;

fn at(hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 6, 15, hour, min, sec).unwrap()
}

#[test]
fn test_anchor_zeroes_minutes_and_seconds() {
    let anchor = day_anchor(at(14, 37, 22));

    assert_eq!(anchor, at(MARKET_OPEN_HOUR, 0, 0));
    assert_eq!(anchor.date_naive(), at(14, 37, 22).date_naive());
}

#[test]
fn test_anchor_of_pre_open_timestamp_is_same_day() {
    // 08:15 still anchors to 10:00 of its own day, not the day before.
    assert_eq!(day_anchor(at(8, 15, 0)), at(MARKET_OPEN_HOUR, 0, 0));
}

#[test]
fn test_elapsed_minutes_ignores_partial_minutes() {
    assert_eq!(elapsed_minutes(at(10, 0, 0), at(10, 0, 59)), 0);
    assert_eq!(elapsed_minutes(at(10, 0, 0), at(10, 3, 59)), 3);
}

#[test]
fn test_pre_anchor_timestamps_floor_to_zero() {
    assert_eq!(elapsed_minutes(at(10, 0, 0), at(9, 0, 0)), 0);

    let window = PriceWindow::from_request_times(at(9, 0, 0), at(10, 5, 0), 6).unwrap();
    assert_eq!(window.start_index(), 0);
    assert_eq!(window.end_index(), 5);
}

#[test]
fn test_range_check_precedes_out_of_range_check() {
    // Both indices are past the series, but the reversed order is reported
    // first.
    let window = PriceWindow::from_request_times(at(10, 9, 0), at(10, 7, 0), 6);
    assert!(matches!(window, Err(ProfitError::InvalidRange(_))));
}

#[test]
fn test_start_index_may_equal_price_count() {
    let window = PriceWindow::from_request_times(at(10, 6, 0), at(10, 9, 0), 6).unwrap();

    assert_eq!(window.start_index(), 6);
    assert_eq!(window.end_index(), 5);
    assert!(window.slice(&[10, 7, 5, 8, 11, 9]).is_empty());
}

#[test]
fn test_start_index_past_price_count_is_rejected() {
    let window = PriceWindow::from_request_times(at(10, 7, 0), at(10, 9, 0), 6);
    assert!(matches!(window, Err(ProfitError::OutOfRange(_))));
}

#[test]
fn test_window_slices_inclusively() {
    let window = PriceWindow::from_request_times(at(10, 1, 0), at(10, 4, 0), 6).unwrap();
    assert_eq!(window.slice(&[10, 7, 5, 8, 11, 9]), &[7, 5, 8, 11]);
}

#[test]
fn test_end_index_clamps_to_series() {
    let window = PriceWindow::from_request_times(at(10, 0, 0), at(16, 0, 0), 6).unwrap();
    assert_eq!(window.end_index(), 5);
}
