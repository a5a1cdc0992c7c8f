use std::fmt;

use chrono::NaiveDate;

pub use rotation_syntax::Error as PatternError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug)]
pub enum Error {
    /// The rotation pattern could not be parsed or resolved.
    Pattern(PatternError),
    /// The date components do not describe an existing day.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// The calendar would need days that chrono can't represent.
    OutOfRange(NaiveDate),
    /// A calendar must span at least one month.
    InvalidMonthCount,
}

impl From<PatternError> for Error {
    fn from(err: PatternError) -> Self {
        Self::Pattern(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(err) => write!(f, "invalid rotation: {err}"),
            Self::InvalidDate { year, month, day } => {
                write!(f, "{year:04}-{month:02}-{day:02} is not a valid date")
            }
            Self::OutOfRange(date) => {
                write!(f, "calendar starting at {date} exceeds supported dates")
            }
            Self::InvalidMonthCount => write!(f, "a calendar must span at least one month"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pattern(err) => Some(err),
            _ => None,
        }
    }
}
