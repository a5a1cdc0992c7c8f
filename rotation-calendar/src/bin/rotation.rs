use std::env;

use chrono::{Local, NaiveDate};

use rotation_calendar::{DayKind, MonthData, Rotation, RotationPattern, DEFAULT_MONTH_COUNT};

const USAGE: &str = "Usage: ./rotation <PATTERN> [START_DATE] [MONTHS]";

fn print_month(month: &MonthData) {
    println!("---");
    println!("{} {}:", month.month_name(), month.year);
    println!(" Mo  Tu  We  Th  Fr  Sa  Su");

    let mut line = "    ".repeat(month.leading_blanks());

    for (idx, day) in month.days.iter().enumerate() {
        let marker = match day.kind() {
            DayKind::OutOfRotation => ' ',
            DayKind::Off => '.',
            DayKind::Work => 'W',
            DayKind::Transition => 'T',
        };

        line.push_str(&format!("{:>3}{marker}", idx + 1));

        if (month.leading_blanks() + idx) % 7 == 6 {
            println!("{}", line.trim_end());
            line.clear();
        }
    }

    if !line.is_empty() {
        println!("{}", line.trim_end());
    }

    println!(
        " ({} work days, {} travel days)",
        month.count_work_days(),
        month.count_transition_days(),
    );
}

fn main() {
    let mut args = env::args().skip(1);

    let pattern: RotationPattern = match args.next().expect(USAGE).parse() {
        Ok(val) => val,
        Err(err) => panic!("{err}"),
    };

    let requested = args
        .next()
        .map(|raw| NaiveDate::parse_from_str(&raw, "%Y-%m-%d").expect("invalid start date"))
        .unwrap_or_else(|| Local::now().date_naive());

    let month_count = args
        .next()
        .map(|raw| raw.parse().expect("invalid number of months"))
        .unwrap_or(DEFAULT_MONTH_COUNT);

    let rotation = match Rotation::new(requested, pattern) {
        Ok(val) => val,
        Err(err) => panic!("{err}"),
    };

    println!(" - pattern: {pattern}");
    println!(" - requested date: {requested}");
    println!(" - rotation start: {}", rotation.start().format("%A, %-d %B %Y"));
    println!(" - day counts: {} (from {})", rotation.config(), rotation.base_config());

    if let Some(next_transition) = rotation.next_transition(requested) {
        println!(" - next travel day: {next_transition}");
    }

    let months = match rotation.months(month_count) {
        Ok(val) => val,
        Err(err) => panic!("{err}"),
    };

    for month in &months {
        print_month(month);
    }
}
