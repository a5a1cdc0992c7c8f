#![doc = include_str!("../../README.md")]

pub mod adjust;
pub mod calendar;
pub mod context;
pub mod date;
pub mod error;
pub mod normalize;
pub mod rotation;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;

mod utils;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::calendar::{CalendarDay, DayKind, MonthData};
pub use crate::context::Context;
pub use crate::date::{date_from_ymd, CalendarDate};
pub use crate::error::{Error, PatternError};
pub use crate::rotation::Rotation;
pub use rotation_syntax::{NamedPattern, RotationConfig, RotationPattern};

/// Number of months displayed when the caller has no preference.
pub const DEFAULT_MONTH_COUNT: u32 = 12;

/// Build the calendar of a rotation for `month_count` months, starting with
/// the month of the requested start date.
///
/// ```
/// use chrono::NaiveDate;
/// use rotation_calendar::{generate, RotationPattern};
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
/// let pattern = RotationPattern::custom(0, 10).unwrap();
/// let months = generate(start, pattern, 2).unwrap();
///
/// assert!(months
///     .iter()
///     .flat_map(|month| &month.days)
///     .all(|day| !day.is_work_day));
///
/// assert!(generate(start, pattern, 0).is_err());
/// ```
pub fn generate(
    start: impl CalendarDate,
    pattern: RotationPattern,
    month_count: u32,
) -> error::Result<Vec<MonthData>> {
    Rotation::new(start, pattern)?.months(month_count)
}
