use chrono::{Datelike, Month, NaiveDate};

use crate::utils::dates::month_of;

// CalendarDay

/// Status of a single day of the calendar.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// The day belongs to a work period.
    pub is_work_day: bool,
    /// The day is on or after the first day of the rotation.
    pub is_in_rotation: bool,
    /// The day is the first or the last day of a work period, when the crew
    /// travels.
    pub is_transition_day: bool,
}

impl CalendarDay {
    /// A day that precedes the start of the rotation.
    pub fn out_of_rotation(date: NaiveDate) -> Self {
        Self {
            date,
            is_work_day: false,
            is_in_rotation: false,
            is_transition_day: false,
        }
    }

    /// Summarize the status of this day.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rotation_calendar::{CalendarDay, DayKind};
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// assert_eq!(CalendarDay::out_of_rotation(date).kind(), DayKind::OutOfRotation);
    /// ```
    pub fn kind(&self) -> DayKind {
        match (self.is_in_rotation, self.is_work_day, self.is_transition_day) {
            (false, _, _) => DayKind::OutOfRotation,
            (true, _, true) => DayKind::Transition,
            (true, true, false) => DayKind::Work,
            (true, false, false) => DayKind::Off,
        }
    }
}

/// Single discriminant over the flags of a [`CalendarDay`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum DayKind {
    OutOfRotation,
    Off,
    Work,
    Transition,
}

// MonthData

/// All days of a calendar month, with what a renderer needs to lay them out
/// on a weekly grid.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MonthData {
    pub month: Month,
    pub year: i32,
    /// One entry per day of the month, in increasing order.
    pub days: Vec<CalendarDay>,
    /// Weekday of the first day of the month, from Monday = 1 to Sunday = 7.
    pub first_day_of_week: u8,
}

impl MonthData {
    pub(crate) fn new(first_day: NaiveDate, days: Vec<CalendarDay>) -> Self {
        debug_assert_eq!(first_day.day(), 1);

        let first_day_of_week = first_day
            .weekday()
            .number_from_monday()
            .try_into()
            .expect("weekday number fits in a byte");

        Self {
            month: month_of(first_day),
            year: first_day.year(),
            days,
            first_day_of_week,
        }
    }

    /// Full english name of the month.
    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Number of empty cells before the first day on a grid starting on
    /// Mondays.
    pub fn leading_blanks(&self) -> usize {
        usize::from(self.first_day_of_week) - 1
    }

    pub fn count_work_days(&self) -> usize {
        self.days.iter().filter(|day| day.is_work_day).count()
    }

    pub fn count_transition_days(&self) -> usize {
        self.days.iter().filter(|day| day.is_transition_day).count()
    }
}
