use chrono::{NaiveDate, Weekday};

use crate::date::CalendarDate;
use crate::normalize::{normalize_to, ANCHOR_WEEKDAY};

/// Settings that alter how a rotation is laid out on the calendar.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Context {
    /// Weekday rotations are moved back to, `None` to start rotations on the
    /// exact requested date.
    pub anchor: Option<Weekday>,
}

impl Context {
    /// Start rotations on the most recent given weekday.
    pub fn with_anchor(self, anchor: Weekday) -> Self {
        Self { anchor: Some(anchor) }
    }

    /// Start rotations on the exact requested date.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rotation_calendar::Context;
    ///
    /// let wednesday = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    /// assert_eq!(Context::default().without_anchor().start_date(wednesday), Some(wednesday));
    /// ```
    pub fn without_anchor(self) -> Self {
        Self { anchor: None }
    }

    /// Get the first day of a rotation requested to start at given date, or
    /// `None` if the anchor weekday before it can't be represented.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rotation_calendar::Context;
    ///
    /// let wednesday = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    ///
    /// assert_eq!(
    ///     Context::default().start_date(wednesday),
    ///     NaiveDate::from_ymd_opt(2024, 1, 2),
    /// );
    /// ```
    pub fn start_date(&self, requested: impl CalendarDate) -> Option<NaiveDate> {
        match self.anchor {
            Some(anchor) => normalize_to(requested, anchor),
            None => Some(requested.calendar_date()),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self { anchor: Some(ANCHOR_WEEKDAY) }
    }
}
