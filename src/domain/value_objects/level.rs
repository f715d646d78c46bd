//! Level value object
//!
//! The school level a student is taught at. Levels follow the local school
//! system: primary (P1-P6), secondary (S1-S4) and junior college (J1-J2).

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ParseError, ParseResult};

static LEVEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(P[1-6]|S[1-4]|J[12])$").expect("valid level regex"));

/// A validated school level code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(String);

impl Level {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Levels should be one of P1-P6, S1-S4 or J1-J2.";

    pub fn is_valid(value: &str) -> bool {
        LEVEL_RE.is_match(value)
    }

    pub fn new(value: impl Into<String>) -> ParseResult<Self> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ParseError::InvalidFormat(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Level {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
