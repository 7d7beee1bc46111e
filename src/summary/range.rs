//! Date-range selection for event cards and objective period labels.
//!
//! All functions are total: arithmetic at the far edges of chrono's date
//! range falls back to the input date instead of panicking.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::Resolution;

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True when `[start, end]` lies entirely within this range.
    pub fn encloses(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start <= start && end <= self.end
    }
}

/// The most recent fully completed period at `resolution`, relative to
/// `today`.
///
/// ```
/// use chrono::NaiveDate;
/// use metricard::core::Resolution;
/// use metricard::summary::range::last_completed_range;
///
/// // 2024-03-13 is a Wednesday; last completed week is Mar 4 to Mar 10.
/// let today = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
/// let range = last_completed_range(Resolution::Weekly, today);
/// assert_eq!(range.start, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
/// assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
/// ```
pub fn last_completed_range(resolution: Resolution, today: NaiveDate) -> DateRange {
    match resolution {
        Resolution::Daily => {
            let day = today.pred_opt().unwrap_or(today);
            DateRange::new(day, day)
        }
        Resolution::Weekly => {
            let start = monday_of(today.checked_sub_days(Days::new(7)).unwrap_or(today));
            let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
            DateRange::new(start, end)
        }
        Resolution::Monthly => {
            let current = first_of_month(today);
            let start = current.checked_sub_months(Months::new(1)).unwrap_or(current);
            DateRange::new(start, current.pred_opt().unwrap_or(current))
        }
        Resolution::Yearly => {
            let year = today.year() - 1;
            let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(today);
            let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(today);
            DateRange::new(start, end)
        }
    }
}

/// Classify an objective's evaluation range for display.
///
/// "Yearly" for a full calendar year, "Monthly" for a full calendar month,
/// "Weekly" for a Monday-start 7-day span, "Custom" otherwise.
pub fn period_label(start: NaiveDate, end: NaiveDate) -> &'static str {
    if is_whole_year(start, end) {
        "Yearly"
    } else if is_whole_month(start, end) {
        "Monthly"
    } else if is_whole_week(start, end) {
        "Weekly"
    } else {
        "Custom"
    }
}

fn is_whole_year(start: NaiveDate, end: NaiveDate) -> bool {
    start.year() == end.year()
        && (start.month(), start.day()) == (1, 1)
        && (end.month(), end.day()) == (12, 31)
}

fn is_whole_month(start: NaiveDate, end: NaiveDate) -> bool {
    start.day() == 1 && end == last_of_month(start)
}

fn is_whole_week(start: NaiveDate, end: NaiveDate) -> bool {
    start.weekday() == Weekday::Mon && start.checked_add_days(Days::new(6)) == Some(end)
}

pub(crate) fn monday_of(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(date)
}
