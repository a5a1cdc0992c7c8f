use crate::error::Error;
use crate::pattern::{NamedPattern, RotationConfig, RotationPattern};

#[test]
fn table_is_indexed_by_discriminant() {
    for (idx, (named, config)) in NamedPattern::TABLE.into_iter().enumerate() {
        assert_eq!(named as usize, idx);
        assert_eq!(named.config(), config);
    }
}

#[test]
fn standard_rotations_are_weekly_aligned() {
    for named in NamedPattern::iter() {
        assert!(named.config().is_weekly_aligned(), "{named} is not aligned");
    }
}

#[test]
fn from_config_round_trip() {
    for named in NamedPattern::iter() {
        assert_eq!(NamedPattern::from_config(named.config()), Some(named));
    }

    assert_eq!(NamedPattern::from_config(RotationConfig::new(15, 13)), None);
}

#[test]
fn custom_degenerate_counts() {
    let no_work = RotationPattern::custom(0, 10).unwrap();
    assert_eq!(no_work.config().unwrap(), RotationConfig::new(0, 10));

    let no_off = RotationPattern::custom(10, 0).unwrap();
    assert_eq!(no_off.config().unwrap(), RotationConfig::new(10, 0));

    assert!(matches!(RotationPattern::custom(0, 0), Err(Error::EmptyCycle)));
}

#[test]
fn cycle_len_does_not_overflow() {
    let config = RotationConfig::new(u32::MAX, u32::MAX);
    assert_eq!(config.cycle_len(), 2 * u64::from(u32::MAX));
}

#[test]
fn is_custom() {
    assert!(!RotationPattern::from(NamedPattern::SevenSeven).is_custom());
    assert!(RotationPattern::custom(7, 7).unwrap().is_custom());
}
