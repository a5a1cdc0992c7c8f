//! Align the last work day of weekly rotations on their first weekday.
//!
//! A "14/14" rotation started on a Tuesday would end its work period on a
//! Monday. Crews change on a fixed weekday, so the work period is stretched to
//! the next Tuesday and the off period shortened by the same amount: the
//! rotation becomes "15/13" and still repeats every four weeks.

use chrono::{Datelike, NaiveDate};

use rotation_syntax::RotationConfig;

use crate::utils::dates::weekday_after;

/// Shift one day between work and off counts so that the last work day of a
/// rotation starting at `start` falls on the same weekday as `start`.
///
/// Rotations that don't span a whole number of weeks are returned unchanged,
/// and so are rotations that would need more than a one-day shift.
///
/// ```
/// use chrono::NaiveDate;
/// use rotation_calendar::adjust::adjust;
/// use rotation_calendar::RotationConfig;
///
/// let tuesday = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
///
/// assert_eq!(
///     adjust(tuesday, RotationConfig::new(14, 14)),
///     RotationConfig::new(15, 13),
/// );
///
/// assert_eq!(
///     adjust(tuesday, RotationConfig::new(10, 10)),
///     RotationConfig::new(10, 10),
/// );
/// ```
pub fn adjust(start: NaiveDate, config: RotationConfig) -> RotationConfig {
    if !config.is_weekly_aligned() || config.work_days == 0 {
        return config;
    }

    let start_wday = start.weekday();
    let last_wday = weekday_after(start_wday, u64::from(config.work_days) - 1);

    if last_wday == start_wday {
        return config;
    }

    let adjusted = {
        if last_wday == start_wday.pred() {
            // Work period ends one day early
            config
                .work_days
                .checked_add(1)
                .zip(config.off_days.checked_sub(1))
        } else if last_wday == start_wday.succ() {
            // Work period ends one day late
            config
                .work_days
                .checked_sub(1)
                .zip(config.off_days.checked_add(1))
        } else {
            None
        }
    };

    match adjusted {
        Some((work_days, off_days)) => {
            let adjusted = RotationConfig::new(work_days, off_days);

            #[cfg(feature = "log")]
            log::debug!("Adjusted rotation {config} to {adjusted} to end on {start_wday}");

            adjusted
        }
        None => {
            #[cfg(feature = "log")]
            log::debug!("Rotation {config} can't end on {start_wday} with a one day shift");

            config
        }
    }
}
