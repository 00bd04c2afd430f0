//! Appointment Filtering
//!
//! Pure time-window filtering over the in-memory appointment list. The
//! current day is passed in by the caller so the logic runs against a
//! fixed clock in tests.

use chrono::{Duration, Months, NaiveDate};

use super::global::Appointment;

/// Time window applied to the appointment list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PeriodFilter {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl PeriodFilter {
    /// Value carried by the corresponding `<select>` option.
    pub fn as_str(self) -> &'static str {
        match self {
            PeriodFilter::All => "all",
            PeriodFilter::Today => "today",
            PeriodFilter::Week => "week",
            PeriodFilter::Month => "month",
        }
    }

    /// Parse a `<select>` value; anything unknown falls back to `All`.
    pub fn parse(value: &str) -> Self {
        match value {
            "today" => PeriodFilter::Today,
            "week" => PeriodFilter::Week,
            "month" => PeriodFilter::Month,
            _ => PeriodFilter::All,
        }
    }
}

/// Parse the `DD/MM/YYYY` wire format used by the booking API.
pub fn parse_booking_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%d/%m/%Y").ok()
}

/// Keep the appointments that fall inside the filter window.
///
/// `Today`, `Week` and `Month` only ever match appointments whose date
/// parses; `All` returns the list untouched. Window edges are inclusive.
pub fn filter_appointments(
    appointments: &[Appointment],
    filter: PeriodFilter,
    today: NaiveDate,
) -> Vec<Appointment> {
    let cutoff = match filter {
        PeriodFilter::All => return appointments.to_vec(),
        PeriodFilter::Today => today,
        PeriodFilter::Week => today - Duration::days(7),
        PeriodFilter::Month => today
            .checked_sub_months(Months::new(1))
            .unwrap_or(NaiveDate::MIN),
    };

    appointments
        .iter()
        .filter(|apt| {
            let Some(date) = apt.date.as_deref().and_then(parse_booking_date) else {
                return false;
            };
            match filter {
                PeriodFilter::All => true,
                PeriodFilter::Today => date == cutoff,
                PeriodFilter::Week | PeriodFilter::Month => date >= cutoff,
            }
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apt(date: Option<&str>) -> Appointment {
        Appointment {
            date: date.map(str::to_string),
            period: "manhã".to_string(),
            name: "Maria".to_string(),
            user_id: "5511999990000".to_string(),
            created_at: None,
        }
    }

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    #[test]
    fn today_keeps_only_the_matching_day() {
        let appointments = vec![apt(Some("10/05/2024")), apt(Some("bad-date"))];
        let kept = filter_appointments(&appointments, PeriodFilter::Today, fixed_today());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].date.as_deref(), Some("10/05/2024"));
    }

    #[test]
    fn malformed_or_missing_dates_never_match_a_window() {
        let appointments = vec![apt(None), apt(Some("2024-05-10")), apt(Some("10/05/2024"))];
        for filter in [PeriodFilter::Today, PeriodFilter::Week, PeriodFilter::Month] {
            let kept = filter_appointments(&appointments, filter, fixed_today());
            assert_eq!(kept.len(), 1, "filter {:?}", filter);
        }
        // they stay visible in the unfiltered view
        let all = filter_appointments(&appointments, PeriodFilter::All, fixed_today());
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn week_window_is_inclusive_of_the_boundary_day() {
        let appointments = vec![apt(Some("03/05/2024")), apt(Some("02/05/2024"))];
        let kept = filter_appointments(&appointments, PeriodFilter::Week, fixed_today());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].date.as_deref(), Some("03/05/2024"));
    }

    #[test]
    fn month_window_uses_a_calendar_month() {
        let appointments = vec![apt(Some("10/04/2024")), apt(Some("09/04/2024"))];
        let kept = filter_appointments(&appointments, PeriodFilter::Month, fixed_today());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].date.as_deref(), Some("10/04/2024"));
    }

    #[test]
    fn week_results_are_a_subset_of_month_results() {
        let dates = [
            "10/05/2024",
            "04/05/2024",
            "03/05/2024",
            "15/04/2024",
            "10/04/2024",
            "09/04/2024",
            "01/01/2024",
            "garbage",
        ];
        let appointments: Vec<_> = dates.iter().map(|d| apt(Some(d))).collect();
        let week = filter_appointments(&appointments, PeriodFilter::Week, fixed_today());
        let month = filter_appointments(&appointments, PeriodFilter::Month, fixed_today());
        assert!(week.iter().all(|a| month.contains(a)));
        assert!(week.len() <= month.len());
    }

    #[test]
    fn select_values_round_trip_and_default_to_all() {
        for filter in [
            PeriodFilter::All,
            PeriodFilter::Today,
            PeriodFilter::Week,
            PeriodFilter::Month,
        ] {
            assert_eq!(PeriodFilter::parse(filter.as_str()), filter);
        }
        assert_eq!(PeriodFilter::parse("sometime"), PeriodFilter::All);
    }
}
