


use chrono::NaiveDate;

use crate::{MonthData, NamedPattern, Rotation, RotationPattern};

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

#[macro_export]
macro_rules! datetime {
    ( $date: expr ) => {{
        use chrono::NaiveDateTime;
        NaiveDateTime::parse_from_str($date, "%Y-%m-%d %H:%M").expect("invalid datetime literal")
    }};
    ( $date: expr, $tz: expr ) => {{
        use chrono::TimeZone;

        $tz.from_local_datetime(&datetime!($date))
            .single()
            .expect("ambiguous input datetime")
    }};
}

/// Get the status of a day from a generated calendar.
#[macro_export]
macro_rules! day_at {
    ( $months: expr, $date: expr ) => {{
        let date = $crate::date!($date);

        $months
            .iter()
            .flat_map(|month| &month.days)
            .find(|day| day.date == date)
            .copied()
            .expect("date is not part of the calendar")
    }};
}

/// A mix of standard and custom rotations covering degenerate counts.
fn sample_patterns() -> impl Iterator<Item = RotationPattern> {
    let custom = [(10, 10), (10, 4), (1, 1), (0, 10), (10, 0), (14, 14), (3, 40)]
        .into_iter()
        .map(|(work_days, off_days)| RotationPattern::Custom { work_days, off_days });

    NamedPattern::iter().map(RotationPattern::from).chain(custom)
}

/// Check the invariants every generated calendar must hold.
fn assert_calendar_invariants(rotation: &Rotation, months: &[MonthData]) {
    let mut prev_date: Option<NaiveDate> = None;

    for month in months {
        let first = month.days.first().expect("empty month");
        assert_eq!(first.date.format("%d").to_string(), "01");
        assert_eq!(month.month_name(), first.date.format("%B").to_string());
        assert_eq!(month.year.to_string(), first.date.format("%Y").to_string());

        assert_eq!(
            u32::from(month.first_day_of_week),
            first.date.format("%u").to_string().parse::<u32>().unwrap(),
        );

        for day in &month.days {
            if let Some(prev_date) = prev_date {
                assert_eq!(prev_date.succ_opt(), Some(day.date), "gap before {}", day.date);
            }

            prev_date = Some(day.date);
            assert_eq!(*day, rotation.day(day.date), "walk and arithmetic disagree");
            assert!(!day.is_work_day || day.is_in_rotation);
            assert!(!day.is_transition_day || day.is_in_rotation);
            assert_eq!(day.is_in_rotation, day.date >= rotation.start());
        }
    }
}
