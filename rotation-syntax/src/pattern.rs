use std::fmt::Display;
use std::str::FromStr;

use crate::error::{Error, Result};

// RotationConfig

/// Number of consecutive work days followed by the number of consecutive off
/// days of a rotation cycle.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RotationConfig {
    pub work_days: u32,
    pub off_days: u32,
}

impl RotationConfig {
    #[inline]
    pub const fn new(work_days: u32, off_days: u32) -> Self {
        Self { work_days, off_days }
    }

    /// Total length of a cycle, in days.
    ///
    /// ```
    /// use rotation_syntax::RotationConfig;
    ///
    /// assert_eq!(RotationConfig::new(14, 21).cycle_len(), 35);
    /// ```
    #[inline]
    pub const fn cycle_len(self) -> u64 {
        self.work_days as u64 + self.off_days as u64
    }

    /// Check if a cycle spans a whole number of weeks, in which case every
    /// cycle starts on the same weekday.
    ///
    /// ```
    /// use rotation_syntax::RotationConfig;
    ///
    /// assert!(RotationConfig::new(14, 21).is_weekly_aligned());
    /// assert!(RotationConfig::new(10, 4).is_weekly_aligned());
    /// assert!(!RotationConfig::new(10, 10).is_weekly_aligned());
    /// ```
    #[inline]
    pub const fn is_weekly_aligned(self) -> bool {
        self.cycle_len() % 7 == 0
    }

    /// Ensure that the cycle moves forward in time.
    pub fn validate(self) -> Result<Self> {
        if self.cycle_len() == 0 {
            return Err(Error::EmptyCycle);
        }

        Ok(self)
    }
}

impl Display for RotationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.work_days, self.off_days)
    }
}

// NamedPattern

/// Standard offshore rotations, named after their work and off day counts.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NamedPattern {
    SevenSeven,
    FourteenFourteen,
    FourteenTwentyOne,
    FourteenTwentyEight,
    TwentyOneTwentyOne,
    TwentyOneTwentyEight,
    TwentyEightTwentyEight,
}

impl NamedPattern {
    /// Canonical day counts of each standard rotation.
    pub const TABLE: [(NamedPattern, RotationConfig); 7] = [
        (Self::SevenSeven, RotationConfig::new(7, 7)),
        (Self::FourteenFourteen, RotationConfig::new(14, 14)),
        (Self::FourteenTwentyOne, RotationConfig::new(14, 21)),
        (Self::FourteenTwentyEight, RotationConfig::new(14, 28)),
        (Self::TwentyOneTwentyOne, RotationConfig::new(21, 21)),
        (Self::TwentyOneTwentyEight, RotationConfig::new(21, 28)),
        (Self::TwentyEightTwentyEight, RotationConfig::new(28, 28)),
    ];

    /// Iterate over all standard rotations.
    pub fn iter() -> impl Iterator<Item = Self> {
        Self::TABLE.into_iter().map(|(pattern, _)| pattern)
    }

    /// Get the canonical day counts for this rotation.
    ///
    /// ```
    /// use rotation_syntax::{NamedPattern, RotationConfig};
    ///
    /// assert_eq!(
    ///     NamedPattern::FourteenTwentyOne.config(),
    ///     RotationConfig::new(14, 21),
    /// );
    /// ```
    pub const fn config(self) -> RotationConfig {
        Self::TABLE[self as usize].1
    }

    /// Find the standard rotation with given day counts, if any.
    ///
    /// ```
    /// use rotation_syntax::{NamedPattern, RotationConfig};
    ///
    /// assert_eq!(
    ///     NamedPattern::from_config(RotationConfig::new(28, 28)),
    ///     Some(NamedPattern::TwentyEightTwentyEight),
    /// );
    ///
    /// assert_eq!(NamedPattern::from_config(RotationConfig::new(10, 4)), None);
    /// ```
    pub fn from_config(config: RotationConfig) -> Option<Self> {
        Self::TABLE
            .into_iter()
            .find(|(_, candidate)| *candidate == config)
            .map(|(pattern, _)| pattern)
    }
}

impl Display for NamedPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.config())
    }
}

// RotationPattern

/// A rotation chosen by the user: either a standard one or explicit day
/// counts.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum RotationPattern {
    Named(NamedPattern),
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Custom { work_days: u32, off_days: u32 },
}

impl RotationPattern {
    /// Build a custom rotation, rejecting cycles that never move forward.
    ///
    /// ```
    /// use rotation_syntax::RotationPattern;
    ///
    /// assert!(RotationPattern::custom(10, 4).is_ok());
    /// assert!(RotationPattern::custom(0, 10).is_ok());
    /// assert!(RotationPattern::custom(0, 0).is_err());
    /// ```
    pub fn custom(work_days: u32, off_days: u32) -> Result<Self> {
        RotationConfig::new(work_days, off_days).validate()?;
        Ok(Self::Custom { work_days, off_days })
    }

    /// Check if the day counts were given explicitly by the user.
    #[inline]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }

    /// Resolve the day counts of this rotation.
    ///
    /// ```
    /// use rotation_syntax::{NamedPattern, RotationConfig, RotationPattern};
    ///
    /// let named = RotationPattern::Named(NamedPattern::SevenSeven);
    /// assert_eq!(named.config().unwrap(), RotationConfig::new(7, 7));
    ///
    /// let empty = RotationPattern::Custom { work_days: 0, off_days: 0 };
    /// assert!(empty.config().is_err());
    /// ```
    pub fn config(&self) -> Result<RotationConfig> {
        match *self {
            Self::Named(named) => Ok(named.config()),
            Self::Custom { work_days, off_days } => {
                RotationConfig::new(work_days, off_days).validate()
            }
        }
    }
}

impl From<NamedPattern> for RotationPattern {
    fn from(named: NamedPattern) -> Self {
        Self::Named(named)
    }
}

impl FromStr for RotationPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse(s)
    }
}

impl Display for RotationPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(named) => write!(f, "{named}"),
            Self::Custom { work_days, off_days } => write!(f, "custom {work_days}/{off_days}"),
        }
    }
}
