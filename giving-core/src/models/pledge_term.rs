use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of years a total is pledged over.
///
/// Always at least one year, and small enough that every
/// [`Denomination`](crate::Denomination) multiplier fits in a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PledgeTerm(u32);

impl PledgeTerm {
    pub const DEFAULT_YEARS: u32 = 3;

    /// Largest term for which `years * 365` still fits in a `u32`.
    pub const MAX_YEARS: u32 = u32::MAX / 365;

    /// Returns `None` for zero or for terms above [`Self::MAX_YEARS`].
    pub fn new(years: u32) -> Option<Self> {
        (1..=Self::MAX_YEARS).contains(&years).then_some(Self(years))
    }

    pub fn years(&self) -> u32 {
        self.0
    }
}

impl Default for PledgeTerm {
    fn default() -> Self {
        Self(Self::DEFAULT_YEARS)
    }
}

impl TryFrom<u32> for PledgeTerm {
    type Error = String;

    fn try_from(years: u32) -> Result<Self, Self::Error> {
        Self::new(years).ok_or_else(|| format!("pledge term out of range: {years}"))
    }
}

impl From<PledgeTerm> for u32 {
    fn from(term: PledgeTerm) -> Self {
        term.0
    }
}

impl fmt::Display for PledgeTerm {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self.0 {
            1 => write!(f, "1 year"),
            n => write!(f, "{n} years"),
        }
    }
}
