//! Move requested start dates onto the crew-change weekday.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::date::CalendarDate;

/// Weekday on which all rotations start by default.
pub const ANCHOR_WEEKDAY: Weekday = Weekday::Tue;

/// Get the most recent Tuesday on or before given date.
///
/// Only the calendar day of the input is considered, which makes the result
/// independent of time of day and timezone offsets.
///
/// ```
/// use chrono::NaiveDate;
/// use rotation_calendar::normalize::normalize;
///
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let tuesday = NaiveDate::from_ymd_opt(2023, 12, 26).unwrap();
///
/// assert_eq!(normalize(monday), tuesday);
/// assert_eq!(normalize(tuesday), tuesday);
/// ```
///
/// # Panics
///
/// If the previous Tuesday is not representable, which may only happen during
/// the first week supported by chrono. See [`normalize_to`] for a fallible
/// version.
pub fn normalize(date: impl CalendarDate) -> NaiveDate {
    normalize_to(date, ANCHOR_WEEKDAY).expect("no Tuesday before the first supported date")
}

/// Get the most recent `anchor` weekday on or before given date, if chrono can
/// represent it.
///
/// ```
/// use chrono::{Datelike, NaiveDate, Weekday};
/// use rotation_calendar::normalize::normalize_to;
///
/// let friday = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
///
/// assert_eq!(
///     normalize_to(friday, Weekday::Mon),
///     NaiveDate::from_ymd_opt(2024, 2, 26),
/// );
///
/// assert_eq!(normalize_to(NaiveDate::MIN, NaiveDate::MIN.weekday().succ()), None);
/// ```
pub fn normalize_to(date: impl CalendarDate, anchor: Weekday) -> Option<NaiveDate> {
    let date = date.calendar_date();

    let days_back =
        (7 + date.weekday().num_days_from_monday() - anchor.num_days_from_monday()) % 7;

    date.checked_sub_days(Days::new(days_back.into()))
}
