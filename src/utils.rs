//! Formatting Utilities
//!
//! Pure display formatting for the API's date shapes, plus a debounce
//! helper for input events.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{NaiveDateTime, NaiveTime};
use gloo_timers::callback::Timeout;

use crate::state::filter::parse_booking_date;

/// Render a wire date for display.
///
/// Booking dates arrive as `DD/MM/YYYY`; creation timestamps as SQL or ISO
/// datetimes. Anything else renders as a placeholder rather than failing.
pub fn format_date(raw: &str) -> String {
    if raw.contains('/') {
        if let Some(date) = parse_booking_date(raw) {
            return date.format("%d/%m/%Y").to_string();
        }
        return "Invalid date".to_string();
    }

    parse_datetime(raw)
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| "Invalid date".to_string())
}

/// [`format_date`] for fields the API may omit entirely.
pub fn format_optional_date(raw: Option<&str>) -> String {
    raw.map(format_date)
        .unwrap_or_else(|| "Invalid date".to_string())
}

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

/// Render the appointment period slot.
///
/// The booking flow stores day periods ("manhã", "tarde", "noite"); older
/// records may carry a raw time or, wrongly, a date.
pub fn format_period(raw: &str) -> String {
    if ["manhã", "tarde", "noite"].iter().any(|p| raw.contains(p)) {
        return raw.to_string();
    }
    if raw.contains('/') {
        return "Period not specified".to_string();
    }
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S"))
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Normalize a free-text user id query. Whitespace-only input yields
/// `None`, which callers must reject before any network call.
pub fn normalized_query(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Wrap `f` so rapid calls collapse into a single invocation `delay_ms`
/// after the last one; each call cancels the previously scheduled timer.
pub fn debounce<A: 'static>(
    delay_ms: u32,
    f: impl Fn(A) + Clone + 'static,
) -> impl FnMut(A) {
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    move |arg: A| {
        let f = f.clone();
        let handle = Timeout::new(delay_ms, move || f(arg));
        if let Some(previous) = pending.borrow_mut().replace(handle) {
            previous.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_dates_render_in_day_month_year_order() {
        assert_eq!(format_date("10/05/2024"), "10/05/2024");
        assert_eq!(format_date("1/5/2024"), "01/05/2024");
    }

    #[test]
    fn datetimes_render_with_a_time_component() {
        assert_eq!(format_date("2024-05-10 14:30:00"), "10/05/2024 14:30");
        assert_eq!(format_date("2024-05-10T14:30:00"), "10/05/2024 14:30");
    }

    #[test]
    fn garbage_dates_render_a_placeholder() {
        assert_eq!(format_date("not a date"), "Invalid date");
        assert_eq!(format_date("99/99/9999"), "Invalid date");
        assert_eq!(format_optional_date(None), "Invalid date");
    }

    #[test]
    fn period_labels_pass_through() {
        assert_eq!(format_period("manhã"), "manhã");
        assert_eq!(format_period("tarde (13h-18h)"), "tarde (13h-18h)");
    }

    #[test]
    fn date_shaped_periods_are_flagged() {
        assert_eq!(format_period("10/05/2024"), "Period not specified");
    }

    #[test]
    fn raw_times_normalize() {
        assert_eq!(format_period("14:30:00"), "14:30");
        assert_eq!(format_period("09:15"), "09:15");
    }

    #[test]
    fn whitespace_only_queries_are_rejected() {
        assert_eq!(normalized_query(""), None);
        assert_eq!(normalized_query("  \t "), None);
        assert_eq!(
            normalized_query(" 5511999990000 ").as_deref(),
            Some("5511999990000")
        );
    }
}
