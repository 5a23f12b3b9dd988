use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PledgeTerm;

const DAYS_PER_YEAR: u32 = 365;
const WEEKS_PER_YEAR: u32 = 52;
const MONTHS_PER_YEAR: u32 = 12;

/// One of the five time-scaled views of the same pledged total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Denomination {
    Day,
    Week,
    Month,
    Year,
    Total,
}

impl Denomination {
    /// All denominations in column order, finest first.
    pub const ALL: [Denomination; 5] = [
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Year,
        Self::Total,
    ];

    /// Number of units of this denomination that make up the grand total.
    ///
    /// `Total` is always 1; everything else scales with the pledge term.
    pub fn multiplier(
        &self,
        term: PledgeTerm,
    ) -> u32 {
        let years = term.years();
        match self {
            Self::Day => years * DAYS_PER_YEAR,
            Self::Week => years * WEEKS_PER_YEAR,
            Self::Month => years * MONTHS_PER_YEAR,
            Self::Year => years,
            Self::Total => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::Total => "total",
        }
    }

    /// Column header used by the rendered table.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "Per Day",
            Self::Week => "Per Week",
            Self::Month => "Per Month",
            Self::Year => "Per Year",
            Self::Total => "Total",
        }
    }

    /// Parses a short code (`day`, `week`, ...). Case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            "total" => Some(Self::Total),
            _ => None,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Day => 0,
            Self::Week => 1,
            Self::Month => 2,
            Self::Year => 3,
            Self::Total => 4,
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
