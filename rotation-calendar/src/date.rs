use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::error::{Error, Result};

/// A value that can be reduced to a day of the calendar.
///
/// Only the local year, month and day are kept: two values on the same
/// calendar day always give the same date, whatever their time of day or
/// timezone offset.
///
/// ```
/// use chrono::{FixedOffset, NaiveDate, TimeZone};
/// use rotation_calendar::CalendarDate;
///
/// let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
/// let late_evening = tokyo.with_ymd_and_hms(2024, 1, 2, 23, 30, 0).unwrap();
///
/// assert_eq!(
///     late_evening.calendar_date(),
///     NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
/// );
/// ```
pub trait CalendarDate {
    fn calendar_date(&self) -> NaiveDate;
}

impl CalendarDate for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDate for NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDate for DateTime<Tz> {
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: CalendarDate + ?Sized> CalendarDate for &T {
    fn calendar_date(&self) -> NaiveDate {
        (**self).calendar_date()
    }
}

/// Build a date from its components, failing on days that don't exist.
///
/// ```
/// use rotation_calendar::date_from_ymd;
///
/// assert!(date_from_ymd(2024, 2, 29).is_ok());
/// assert!(date_from_ymd(2023, 2, 29).is_err());
/// ```
pub fn date_from_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(Error::InvalidDate { year, month, day })
}
