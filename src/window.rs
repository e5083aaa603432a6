//! Relative "last N months" windows expressed as absolute UTC instants.

use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, TimeZone, Utc};
use std::fmt;
use std::fmt::{Display, Formatter};

/// An absolute UTC range. `from` is always midnight on the first day of a month
/// and never after `to`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl TimeWindow {
    pub fn from(&self) -> DateTime<Utc> {
        self.from
    }

    pub fn to(&self) -> DateTime<Utc> {
        self.to
    }

    /// `from` as `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn from_iso(&self) -> String {
        render(self.from)
    }

    /// `to` as `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn to_iso(&self) -> String {
        render(self.to)
    }
}

impl Display for TimeWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.from_iso(), self.to_iso())
    }
}

fn render(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Window covering the current calendar month and the `months - 1` before it,
/// ending now. Values below 1 are treated as 1.
pub fn compute_window(months: i32) -> TimeWindow {
    compute_window_at(months, Utc::now())
}

/// Same as [`compute_window`] with an explicit "now".
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use openaq_history::compute_window_at;
///
/// let now = Utc.with_ymd_and_hms(2025, 11, 25, 9, 30, 0).unwrap();
/// let window = compute_window_at(12, now);
/// assert_eq!(window.from_iso(), "2024-12-01T00:00:00Z");
/// assert_eq!(window.to_iso(), "2025-11-25T09:30:00Z");
/// ```
pub fn compute_window_at(months: i32, now: DateTime<Utc>) -> TimeWindow {
    let months = months.max(1);

    // Month index counted from year 0, so borrowing across years is plain arithmetic.
    let current = now.year() * 12 + now.month0() as i32;
    let start = current - (months - 1);
    let year = start.div_euclid(12);
    let month = start.rem_euclid(12) as u32 + 1;

    let from = NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        // Only reachable for windows reaching before chrono's minimum year.
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

    TimeWindow { from, to: now }
}
