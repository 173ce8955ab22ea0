use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::{Duration as TimeDelta, FixedOffset, TimeZone, Utc};
use pagedom::Page;
use pagekit::utils::{
    DateFormat, Debounce, FormatError, PageDebounce, Throttle, format_date, format_date_str,
    format_file_size,
};

// ============================================================================
// File sizes
// ============================================================================

#[test]
fn test_format_file_size() {
    assert_eq!(format_file_size(0), "0 Bytes");
    assert_eq!(format_file_size(512), "512 Bytes");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(1_048_576), "1 MB");
    assert_eq!(format_file_size(5_347_738), "5.1 MB");
    assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
}

#[test]
fn test_format_file_size_rounds_to_two_places() {
    // 1234 / 1024 = 1.205...
    assert_eq!(format_file_size(1234), "1.21 KB");
}

// ============================================================================
// Dates
// ============================================================================

#[test]
fn test_format_date_today() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
    assert!(format_date(&now, &now).starts_with("Today "));

    let morning = Utc.with_ymd_and_hms(2024, 3, 15, 9, 5, 0).unwrap();
    assert_eq!(format_date(&morning, &now), "Today 09:05");
}

#[test]
fn test_format_date_counts_whole_days() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap();

    // Calendar yesterday but under 24 hours ago.
    let late = Utc.with_ymd_and_hms(2024, 3, 14, 22, 0, 0).unwrap();
    assert_eq!(format_date(&late, &now), "Today 22:00");

    assert_eq!(format_date(&(now - TimeDelta::hours(30)), &now), "Yesterday 02:00");
    assert_eq!(format_date(&(now - TimeDelta::days(2)), &now), "2 days ago");
    assert_eq!(format_date(&(now - TimeDelta::days(6)), &now), "6 days ago");
    assert_eq!(format_date(&(now - TimeDelta::days(7)), &now), "03/08/2024");
}

#[test]
fn test_future_date_uses_calendar_form() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap();
    assert_eq!(format_date(&(now + TimeDelta::hours(1)), &now), "03/15/2024");
}

#[test]
fn test_custom_date_format() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap();
    let format = DateFormat::new("%I:%M %p", "%Y-%m-%d").unwrap();
    assert_eq!(format.format(&now, &now), "Today 08:00 AM");
    assert_eq!(format.format(&(now - TimeDelta::days(10)), &now), "2024-03-05");
}

#[test]
fn test_date_format_rejects_broken_patterns() {
    assert!(matches!(
        DateFormat::new("%", "%m/%d/%Y"),
        Err(FormatError::InvalidPattern { pattern }) if pattern == "%"
    ));
    assert!(matches!(
        DateFormat::new("%H:%M", "%Q"),
        Err(FormatError::InvalidPattern { pattern }) if pattern == "%Q"
    ));
    assert!(matches!(
        DateFormat::new("", "%m/%d/%Y"),
        Err(FormatError::InvalidPattern { .. })
    ));

    let format = DateFormat::new("%H:%M", "%d.%m.%Y").unwrap();
    assert_eq!(format.time(), "%H:%M");
    assert_eq!(format.date(), "%d.%m.%Y");
}

#[test]
fn test_format_date_str() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap();
    assert_eq!(format_date_str("2024-03-15T07:15:00Z", &now).unwrap(), "Today 07:15");
    assert_eq!(format_date_str("2024-03-13 08:00:00", &now).unwrap(), "2 days ago");
    assert_eq!(format_date_str("2024-01-02T10:00:00", &now).unwrap(), "01/02/2024");
}

#[test]
fn test_format_date_str_converts_offsets() {
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let now = tz.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
    assert_eq!(format_date_str("2024-03-15T08:00:00Z", &now).unwrap(), "Today 10:00");
}

#[test]
fn test_format_date_str_rejects_garbage() {
    let now = Utc::now();
    let err = format_date_str("yesterday-ish", &now).unwrap_err();
    assert!(matches!(err, FormatError::InvalidDate { ref input, .. } if input == "yesterday-ish"));
}

// ============================================================================
// Debounce and throttle
// ============================================================================

#[test]
fn test_debounce_keeps_latest_call() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let mut search = Debounce::new(Duration::from_millis(300), move |q: String| {
        sink.borrow_mut().push(q)
    });
    let t0 = Instant::now();

    search.trigger("r".to_string(), t0);
    search.trigger("re".to_string(), t0 + Duration::from_millis(100));
    search.trigger("rep".to_string(), t0 + Duration::from_millis(200));

    assert!(!search.poll(t0 + Duration::from_millis(400)));
    assert_eq!(search.deadline(), Some(t0 + Duration::from_millis(500)));
    assert!(search.poll(t0 + Duration::from_millis(500)));
    assert!(!search.is_pending());
    assert_eq!(*calls.borrow(), vec!["rep"]);
}

#[test]
fn test_debounce_cancel() {
    let mut fired = false;
    let t0 = Instant::now();
    {
        let mut debounce = Debounce::new(Duration::from_millis(10), |_: ()| fired = true);
        debounce.trigger((), t0);
        debounce.cancel();
        assert!(!debounce.poll(t0 + Duration::from_secs(1)));
    }
    assert!(!fired);
}

#[test]
fn test_page_debounce_uses_timers() {
    let mut page = Page::new();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let mut debounce = PageDebounce::new(Duration::from_millis(250), move |_, n: u32| {
        sink.borrow_mut().push(n)
    });

    debounce.trigger(&mut page, 1);
    page.advance(Duration::from_millis(200));
    debounce.trigger(&mut page, 2);
    assert_eq!(page.pending_timers(), 1);

    page.advance(Duration::from_millis(249));
    assert!(debounce.is_pending(&page));
    page.advance(Duration::from_millis(1));

    assert!(!debounce.is_pending(&page));
    assert_eq!(*calls.borrow(), vec![2]);
}

#[test]
fn test_throttle_drops_calls_inside_window() {
    let mut count = 0;
    let t0 = Instant::now();
    {
        let mut throttle = Throttle::new(Duration::from_millis(100), |n: u32| count += n);
        assert!(throttle.trigger(1, t0));
        assert!(!throttle.trigger(10, t0 + Duration::from_millis(50)));
        assert!(throttle.is_throttled(t0 + Duration::from_millis(99)));
        assert!(throttle.trigger(100, t0 + Duration::from_millis(100)));
    }
    assert_eq!(count, 101);
}
