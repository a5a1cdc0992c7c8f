use chrono::{Datelike, Month, Months, NaiveDate, Weekday};

pub(crate) fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1)
        .expect("first of the month should always exist")
}

pub(crate) fn count_days_in_month(date: NaiveDate) -> u8 {
    let Some(date_next_month) = date.checked_add_months(Months::new(1)) else {
        // December of last supported year
        return 31;
    };

    let first_this_month = first_day_of_month(date);
    let first_next_month = first_day_of_month(date_next_month);

    (first_next_month - first_this_month)
        .num_days()
        .try_into()
        .expect("time not monotonic while comparing dates")
}

pub(crate) fn month_of(date: NaiveDate) -> Month {
    let month: u8 = date.month().try_into().expect("month number fits in a byte");
    Month::try_from(month).expect("month number is always between 1 and 12")
}

/// Weekday reached after moving forward by given number of days.
pub(crate) fn weekday_after(wday: Weekday, days: u64) -> Weekday {
    (0..days % 7).fold(wday, |wday, _| wday.succ())
}

#[cfg(test)]
mod test {
    use chrono::{Month, NaiveDate, Weekday};

    use super::{count_days_in_month, first_day_of_month, month_of, weekday_after};
    use crate::date;

    #[test]
    fn test_count_days_in_month() {
        assert_eq!(count_days_in_month(date!("2024-01-15")), 31);
        assert_eq!(count_days_in_month(date!("2024-02-01")), 29);
        assert_eq!(count_days_in_month(date!("2023-02-28")), 28);
        assert_eq!(count_days_in_month(date!("1900-02-10")), 28);
        assert_eq!(count_days_in_month(date!("2000-02-10")), 29);
        assert_eq!(count_days_in_month(date!("2024-04-30")), 30);
        assert_eq!(count_days_in_month(date!("2024-12-31")), 31);
        assert_eq!(count_days_in_month(NaiveDate::MAX), 31);
    }

    #[test]
    fn test_first_day_of_month() {
        assert_eq!(first_day_of_month(date!("2024-02-29")), date!("2024-02-01"));
        assert_eq!(first_day_of_month(date!("2024-03-01")), date!("2024-03-01"));
    }

    #[test]
    fn test_month_of() {
        assert_eq!(month_of(date!("2024-01-31")), Month::January);
        assert_eq!(month_of(date!("2024-12-01")), Month::December);
    }

    #[test]
    fn test_weekday_after() {
        assert_eq!(weekday_after(Weekday::Tue, 0), Weekday::Tue);
        assert_eq!(weekday_after(Weekday::Tue, 13), Weekday::Mon);
        assert_eq!(weekday_after(Weekday::Tue, 14), Weekday::Tue);
        assert_eq!(weekday_after(Weekday::Sun, 1), Weekday::Mon);
        assert_eq!(weekday_after(Weekday::Wed, u64::MAX), Weekday::Thu);
    }
}
