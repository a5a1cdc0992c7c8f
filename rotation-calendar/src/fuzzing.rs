use arbitrary::Arbitrary;
use chrono::{Datelike, NaiveDate};

use std::fmt::Debug;

use crate::{Context, NamedPattern, Rotation, RotationPattern};

#[derive(Arbitrary, Clone, Debug)]
pub enum PatternInput {
    Named(NamedPattern),
    Custom { work_days: u8, off_days: u8 },
}

#[derive(Arbitrary, Clone)]
pub struct Data {
    pub(crate) days_from_ce: i32,
    pub(crate) pattern: PatternInput,
    pub(crate) month_count: u8,
    pub(crate) anchored: bool,
}

impl Data {
    fn start(&self) -> Option<NaiveDate> {
        NaiveDate::from_num_days_from_ce_opt(self.days_from_ce)
    }

    fn pattern(&self) -> RotationPattern {
        match self.pattern {
            PatternInput::Named(named) => RotationPattern::Named(named),
            PatternInput::Custom { work_days, off_days } => RotationPattern::Custom {
                work_days: work_days.into(),
                off_days: off_days.into(),
            },
        }
    }
}

impl Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Data");

        if let Some(start) = self.start() {
            debug.field("start", &start);
        }

        debug
            .field("pattern", &self.pattern())
            .field("month_count", &self.month_count)
            .field("anchored", &self.anchored)
            .finish()
    }
}

pub fn run_fuzz_rotation(data: Data) -> bool {
    let Some(start) = data.start() else {
        return false;
    };

    if start.year() < 1900 || start.year() > 9999 {
        return false;
    }

    if data.month_count == 0 || data.month_count > 48 {
        return false;
    }

    let ctx = {
        if data.anchored {
            Context::default()
        } else {
            Context::default().without_anchor()
        }
    };

    let Ok(rotation) =
        Rotation::new(start, data.pattern()).and_then(|rotation| rotation.with_context(ctx))
    else {
        return false;
    };

    let config = rotation.config();
    assert_eq!(config.cycle_len(), rotation.base_config().cycle_len());
    assert!(rotation.start() <= start);

    let months = rotation
        .months(data.month_count.into())
        .expect("failed to build calendar for a supported date");

    assert_eq!(months.len(), usize::from(data.month_count));
    let days: Vec<_> = months.iter().flat_map(|month| &month.days).collect();

    assert_eq!(days[0].date.day(), 1);
    assert_eq!(days[0].date.month(), start.month());

    for pair in days.windows(2) {
        assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
    }

    for day in days {
        assert_eq!(*day, rotation.day(day.date));
        assert!(day.is_in_rotation || !(day.is_work_day || day.is_transition_day));
        assert_eq!(day.is_in_rotation, day.date >= rotation.start());

        if day.is_transition_day && !rotation.pattern().is_custom() {
            assert_eq!(day.date.weekday(), rotation.start().weekday());
        }
    }

    true
}
