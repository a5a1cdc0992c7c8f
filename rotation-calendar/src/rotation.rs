use chrono::{Days, Months, NaiveDate};

use rotation_syntax::{RotationConfig, RotationPattern};

use crate::adjust::adjust;
use crate::calendar::{CalendarDay, MonthData};
use crate::context::Context;
use crate::date::CalendarDate;
use crate::error::{Error, Result};
use crate::utils::dates::{count_days_in_month, first_day_of_month};

// WorkPeriod

/// A contiguous run of work days, both bounds included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct WorkPeriod {
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
}

impl WorkPeriod {
    fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    fn is_transition(&self, date: NaiveDate) -> bool {
        date == self.start || date == self.end
    }
}

// Rotation

/// A rotation pattern resolved against a start date.
///
/// The requested start is moved back to the anchor weekday of the context and
/// the day counts of standard patterns are adjusted once, the same adjusted
/// counts being then used for every cycle.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Rotation {
    /// Date requested by the user
    requested: NaiveDate,
    /// First day of the first work period
    start: NaiveDate,
    pattern: RotationPattern,
    /// Day counts before weekday adjustment
    base: RotationConfig,
    /// Day counts used to lay out periods
    config: RotationConfig,
    ctx: Context,
}

impl Rotation {
    /// Resolve a rotation with default context.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rotation_calendar::{NamedPattern, Rotation, RotationConfig};
    ///
    /// let friday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    /// let rotation = Rotation::new(friday, NamedPattern::FourteenTwentyOne.into()).unwrap();
    ///
    /// assert_eq!(rotation.start(), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    /// assert_eq!(rotation.config(), RotationConfig::new(15, 20));
    /// ```
    pub fn new(start: impl CalendarDate, pattern: RotationPattern) -> Result<Self> {
        let base = pattern.config()?;
        Self::resolve(start.calendar_date(), pattern, base, Context::default())
    }

    /// Resolve this rotation again with another context.
    ///
    /// Fails with [`Error::OutOfRange`] if the anchor weekday of the new
    /// context precedes the first date supported by chrono.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rotation_calendar::{Context, NamedPattern, Rotation};
    ///
    /// let friday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    ///
    /// let rotation = Rotation::new(friday, NamedPattern::SevenSeven.into())
    ///     .unwrap()
    ///     .with_context(Context::default().without_anchor())
    ///     .unwrap();
    ///
    /// assert_eq!(rotation.start(), friday);
    /// ```
    pub fn with_context(self, ctx: Context) -> Result<Self> {
        Self::resolve(self.requested, self.pattern, self.base, ctx)
    }

    fn resolve(
        requested: NaiveDate,
        pattern: RotationPattern,
        base: RotationConfig,
        ctx: Context,
    ) -> Result<Self> {
        let start = ctx
            .start_date(requested)
            .ok_or(Error::OutOfRange(requested))?;

        let config = {
            if pattern.is_custom() {
                base
            } else {
                adjust(start, base)
            }
        };

        #[cfg(feature = "log")]
        log::trace!("Resolved rotation {pattern} requested at {requested}: {config} from {start}");

        Ok(Self { requested, start, pattern, base, config, ctx })
    }

    // --
    // -- Accessors
    // --

    /// Date the rotation was requested to start at.
    pub fn requested_date(&self) -> NaiveDate {
        self.requested
    }

    /// First day of the first work period.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn pattern(&self) -> RotationPattern {
        self.pattern
    }

    /// Day counts of the pattern, before any weekday adjustment.
    pub fn base_config(&self) -> RotationConfig {
        self.base
    }

    /// Day counts actually used for every cycle.
    pub fn config(&self) -> RotationConfig {
        self.config
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    // --
    // -- Periods
    // --

    /// Iterate over work periods, starting from the last cycle that begins
    /// on or before `from`.
    pub(crate) fn periods_from(&self, from: NaiveDate) -> impl Iterator<Item = WorkPeriod> {
        let work_days = u64::from(self.config.work_days);
        let cycle_len = self.config.cycle_len();

        let first_cycle = {
            if from <= self.start {
                0
            } else {
                let elapsed = (from - self.start).num_days().unsigned_abs();
                elapsed / cycle_len
            }
        };

        let mut next_start = first_cycle
            .checked_mul(cycle_len)
            .and_then(|offset| self.start.checked_add_days(Days::new(offset)));

        std::iter::from_fn(move || {
            if work_days == 0 {
                return None;
            }

            let start = next_start?;

            let end = start
                .checked_add_days(Days::new(work_days - 1))
                .unwrap_or(NaiveDate::MAX);

            next_start = start.checked_add_days(Days::new(cycle_len));
            Some(WorkPeriod { start, end })
        })
    }

    /// Get the status of a single day.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rotation_calendar::{NamedPattern, Rotation};
    ///
    /// let tuesday = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    /// let rotation = Rotation::new(tuesday, NamedPattern::FourteenFourteen.into()).unwrap();
    ///
    /// let last_work_day = rotation.day(NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
    /// assert!(last_work_day.is_work_day && last_work_day.is_transition_day);
    ///
    /// let first_off_day = rotation.day(NaiveDate::from_ymd_opt(2024, 1, 17).unwrap());
    /// assert!(!first_off_day.is_work_day && !first_off_day.is_transition_day);
    /// ```
    pub fn day(&self, date: impl CalendarDate) -> CalendarDay {
        let date = date.calendar_date();

        if date < self.start {
            return CalendarDay::out_of_rotation(date);
        }

        let elapsed = (date - self.start).num_days().unsigned_abs();
        let work_days = u64::from(self.config.work_days);
        let pos = elapsed % self.config.cycle_len();
        let is_work_day = pos < work_days;

        CalendarDay {
            date,
            is_work_day,
            is_in_rotation: true,
            is_transition_day: is_work_day && (pos == 0 || pos + 1 == work_days),
        }
    }

    /// Get the first transition day strictly after given date.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rotation_calendar::{NamedPattern, Rotation};
    ///
    /// let tuesday = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    /// let rotation = Rotation::new(tuesday, NamedPattern::SevenSeven.into()).unwrap();
    ///
    /// assert_eq!(
    ///     rotation.next_transition(tuesday),
    ///     NaiveDate::from_ymd_opt(2024, 1, 9),
    /// );
    /// ```
    pub fn next_transition(&self, after: impl CalendarDate) -> Option<NaiveDate> {
        let after = after.calendar_date();

        self.periods_from(after)
            .flat_map(|period| [period.start, period.end])
            .find(|date| *date > after)
    }

    // --
    // -- Calendar
    // --

    /// Build the calendar of `month_count` months, starting with the month of
    /// the requested date.
    ///
    /// ```
    /// use chrono::{Month, NaiveDate};
    /// use rotation_calendar::{NamedPattern, Rotation};
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    /// let rotation = Rotation::new(date, NamedPattern::FourteenFourteen.into()).unwrap();
    /// let months = rotation.months(3).unwrap();
    ///
    /// assert_eq!(months.len(), 3);
    /// assert_eq!(months[1].month, Month::February);
    /// assert_eq!(months[1].days.len(), 29);
    /// ```
    pub fn months(&self, month_count: u32) -> Result<Vec<MonthData>> {
        self.months_from(self.requested, month_count)
    }

    /// Build the calendar of `month_count` months, starting with the month of
    /// `first`.
    pub fn months_from(
        &self,
        first: impl CalendarDate,
        month_count: u32,
    ) -> Result<Vec<MonthData>> {
        if month_count == 0 {
            return Err(Error::InvalidMonthCount);
        }

        let range_start = first_day_of_month(first.calendar_date());

        let month_starts: Vec<_> = (0..month_count)
            .map(|idx| range_start.checked_add_months(Months::new(idx)))
            .collect::<Option<_>>()
            .ok_or(Error::OutOfRange(range_start))?;

        let mut periods = self.periods_from(range_start).peekable();

        let months = month_starts
            .into_iter()
            .map(|month_start| {
                let days = std::iter::successors(Some(month_start), |date| date.succ_opt())
                    .take(count_days_in_month(month_start).into())
                    .map(|date| {
                        while periods.next_if(|period| period.end < date).is_some() {}

                        let period = periods
                            .peek()
                            .filter(|period| period.contains(date));

                        self.classify(date, period)
                    })
                    .collect();

                MonthData::new(month_start, days)
            })
            .collect();

        Ok(months)
    }

    fn classify(&self, date: NaiveDate, period: Option<&WorkPeriod>) -> CalendarDay {
        if date < self.start {
            return CalendarDay::out_of_rotation(date);
        }

        CalendarDay {
            date,
            is_work_day: period.is_some(),
            is_in_rotation: true,
            is_transition_day: period.is_some_and(|period| period.is_transition(date)),
        }
    }
}
