use crate::error::{Error, Result};
use crate::parser::parse;
use crate::pattern::{NamedPattern, RotationPattern};

macro_rules! ex {
    ( $( $tt: expr ),* $( , )? ) => {
        (file!(), line!() $( , $tt )*)
    };
}

const EXAMPLES: &[(&str, u32, &str, &str)] = &[
    ex!("7/7", "7/7"),
    ex!("14/14", "14/14"),
    ex!(" 14 / 21 ", "14/21"),
    ex!("14-28", "14/28"),
    ex!("21x21", "21/21"),
    ex!("21X28", "21/28"),
    ex!("28/28", "28/28"),
    ex!("custom 10/4", "custom 10/4"),
    ex!("Custom:10-10", "custom 10/10"),
    ex!("CUSTOM 14/14", "custom 14/14"),
    ex!("custom 0/10", "custom 0/10"),
    ex!("custom 10/0", "custom 10/0"),
];

#[test]
fn display_examples() -> Result<()> {
    for (file, line, example, expected) in EXAMPLES {
        let pattern = parse(example)?;
        let displayed = pattern.to_string();

        assert_eq!(
            displayed, *expected,
            "wrong display for {example:?} at {file}:{line}"
        );

        assert_eq!(
            parse(&displayed)?,
            pattern,
            "display does not parse back at {file}:{line}"
        );
    }

    Ok(())
}

#[test]
fn parse_named() -> Result<()> {
    assert_eq!(
        parse("14/21")?,
        RotationPattern::Named(NamedPattern::FourteenTwentyOne)
    );

    for named in NamedPattern::iter() {
        assert_eq!(parse(&named.to_string())?, RotationPattern::Named(named));
    }

    Ok(())
}

#[test]
fn parse_custom() -> Result<()> {
    assert_eq!(
        parse("custom 10/4")?,
        RotationPattern::Custom { work_days: 10, off_days: 4 }
    );

    // Custom rotations keep their literal counts even when they match a
    // standard rotation.
    assert_eq!(
        parse("custom 14/14")?,
        RotationPattern::Custom { work_days: 14, off_days: 14 }
    );

    Ok(())
}

#[test]
fn parse_unknown_named() {
    assert!(matches!(
        parse("10/4"),
        Err(Error::UnknownPattern { work_days: 10, off_days: 4 })
    ));
}

#[test]
fn parse_empty_cycle() {
    assert!(matches!(parse("custom 0/0"), Err(Error::EmptyCycle)));
}

#[test]
fn parse_overflow() {
    assert!(matches!(
        parse("custom 99999999999/1"),
        Err(Error::Overflow { .. })
    ));
}

#[test]
fn parse_invalid() {
    assert!(matches!(parse(""), Err(Error::Parser(_))));
    assert!(matches!(parse("14"), Err(Error::Parser(_))));
    assert!(matches!(parse("-14/14"), Err(Error::Parser(_))));
    assert!(matches!(parse("14/14/14"), Err(Error::Parser(_))));
    assert!(matches!(parse("1.5/14"), Err(Error::Parser(_))));
    assert!(matches!(parse("custom"), Err(Error::Parser(_))));
    assert!(matches!(parse("two weeks on"), Err(Error::Parser(_))));
}

#[test]
fn from_str() {
    assert_eq!(
        "28/28".parse::<RotationPattern>().ok(),
        Some(RotationPattern::Named(NamedPattern::TwentyEightTwentyEight)),
    );
}
