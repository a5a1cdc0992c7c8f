use pest::iterators::Pair;
use pest::Parser;

use crate::error::{Error, Result};
use crate::pattern::{NamedPattern, RotationConfig, RotationPattern};

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct RotationParser;

/// Parse the textual notation of a rotation.
///
/// ```
/// use rotation_syntax::{parse, NamedPattern, RotationPattern};
///
/// assert_eq!(
///     parse("14/14").unwrap(),
///     RotationPattern::Named(NamedPattern::FourteenFourteen),
/// );
///
/// assert_eq!(
///     parse("custom 10/4").unwrap(),
///     RotationPattern::Custom { work_days: 10, off_days: 4 },
/// );
///
/// assert!(parse("10/4").is_err()); // not a standard rotation
/// ```
pub fn parse(data: &str) -> Result<RotationPattern> {
    let pattern_pair = RotationParser::parse(Rule::input_pattern, data)
        .map_err(Error::from)?
        .next()
        .expect("grammar error: no pattern found");

    build_pattern(pattern_pair)
}

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

fn build_pattern(pair: Pair<Rule>) -> Result<RotationPattern> {
    match pair.as_rule() {
        Rule::named_pattern => build_named_pattern(pair),
        Rule::custom_pattern => build_custom_pattern(pair),
        other => unexpected_token(other, Rule::input_pattern),
    }
}

fn build_named_pattern(pair: Pair<Rule>) -> Result<RotationPattern> {
    assert_eq!(pair.as_rule(), Rule::named_pattern);

    let config = build_day_counts(
        pair.into_inner()
            .next()
            .expect("grammar error: empty named pattern"),
    )?;

    let named = NamedPattern::from_config(config).ok_or(Error::UnknownPattern {
        work_days: config.work_days,
        off_days: config.off_days,
    })?;

    Ok(RotationPattern::Named(named))
}

fn build_custom_pattern(pair: Pair<Rule>) -> Result<RotationPattern> {
    assert_eq!(pair.as_rule(), Rule::custom_pattern);

    let config = build_day_counts(
        pair.into_inner()
            .next()
            .expect("grammar error: empty custom pattern"),
    )?;

    if NamedPattern::from_config(config).is_some() {
        #[cfg(feature = "log")]
        log::debug!("Custom rotation {config} matches a standard rotation, weekdays won't be aligned");
    }

    RotationPattern::custom(config.work_days, config.off_days)
}

fn build_day_counts(pair: Pair<Rule>) -> Result<RotationConfig> {
    assert_eq!(pair.as_rule(), Rule::day_counts);
    let mut pairs = pair.into_inner();

    let work_days = build_positive_number(pairs.next().expect("missing work days"))?;
    let off_days = build_positive_number(pairs.next().expect("missing off days"))?;
    Ok(RotationConfig::new(work_days, off_days))
}

fn build_positive_number(pair: Pair<Rule>) -> Result<u32> {
    assert_eq!(pair.as_rule(), Rule::positive_number);

    pair.as_str().parse().map_err(|_| Error::Overflow {
        value: pair.as_str().to_string(),
        expected: format!("a number of days between 0 and {}", u32::MAX),
    })
}
