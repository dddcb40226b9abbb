//! Central Index Key handling.
//!
//! The SEC identifies every filer by a numeric CIK. URLs and most exports use the
//! canonical rendering: the literal `CIK` followed by the number zero-padded to ten
//! digits, e.g. `CIK0000320193` for Apple.

use std::fmt;
use std::str::FromStr;

use super::error::EdgarError;

const CIK_PREFIX: &str = "CIK";
const CIK_DIGITS: usize = 10;

/// A Central Index Key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cik(u64);

impl Cik {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The bare numeric identifier.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Cik {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Cik {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:0>width$}", CIK_PREFIX, self.0, width = CIK_DIGITS)
    }
}

/// Parses the canonical `CIK##########` form. Bare numbers are rejected.
impl FromStr for Cik {
    type Err = EdgarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(CIK_PREFIX)
            .filter(|d| d.len() == CIK_DIGITS && d.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| EdgarError::InvalidCik(s.to_string()))?;

        digits
            .parse()
            .map(Self)
            .map_err(|_| EdgarError::InvalidCik(s.to_string()))
    }
}
