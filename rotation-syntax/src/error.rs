use std::fmt;

use crate::parser::Rule;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug)]
pub enum Error {
    Parser(pest::error::Error<Rule>),
    UnknownPattern { work_days: u32, off_days: u32 },
    Overflow { value: String, expected: String },
    EmptyCycle,
}

impl From<pest::error::Error<Rule>> for Error {
    fn from(pest_err: pest::error::Error<Rule>) -> Self {
        Self::Parser(pest_err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parser(pest_err) => write!(f, "{}", pest_err),
            Self::UnknownPattern { work_days, off_days } => write!(
                f,
                "{work_days}/{off_days} is not a standard rotation: use `custom {work_days}/{off_days}`"
            ),
            Self::Overflow { value, expected } => {
                write!(f, "{} is too large: expected {}", value, expected)
            }
            Self::EmptyCycle => write!(f, "a rotation cycle must span at least one day"),
        }
    }
}

impl std::error::Error for Error {}
