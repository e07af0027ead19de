//! ID types for person records.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Numeric id carried by person records.
///
/// Ingested people keep the id from the file; people added during a session
/// get `count + 1`, which is only unique because nothing is ever removed.
///
/// # Examples
///
/// ```rust
/// use rugby_roster::PersonId;
///
/// let id: PersonId = "42".parse().unwrap();
/// assert_eq!(id.as_i64(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PersonId(pub i64);

impl PersonId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PersonId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
