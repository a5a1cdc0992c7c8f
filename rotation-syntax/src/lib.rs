#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod pattern;

mod parser;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use parser::parse;
pub use pattern::{NamedPattern, RotationConfig, RotationPattern};
