//! Mount-time configuration of one widget instance.
//!
//! The host supplies two optional override strings: a pledge term (`"5"`) and
//! a comma-separated list of gift levels (`"1000,500"`). Malformed overrides
//! never fail the mount; they fall back to the defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::{GiftLevel, PledgeTerm};

/// Errors produced while reading host overrides.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid pledge term '{0}': expected a whole number of years between 1 and {max}", max = PledgeTerm::MAX_YEARS)]
    InvalidTerm(String),

    #[error("invalid gift level '{0}': expected a non-negative amount")]
    InvalidGiftLevel(String),

    #[error("gift level list is empty")]
    NoGiftLevels,
}

/// Pledge term and gift levels for one widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub term: PledgeTerm,
    pub gift_levels: Vec<GiftLevel>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            term: PledgeTerm::default(),
            gift_levels: GiftLevel::defaults(),
        }
    }
}

impl WidgetConfig {
    /// Builds a configuration from raw host override strings.
    ///
    /// Absent or malformed values fall back to the defaults independently of
    /// each other; a warning is logged for malformed ones.
    pub fn from_overrides(
        years: Option<&str>,
        gift_levels: Option<&str>,
    ) -> Self {
        let term = years
            .and_then(|raw| {
                parse_term(raw)
                    .inspect_err(|e| warn!(%e, "falling back to default pledge term"))
                    .ok()
            })
            .unwrap_or_default();

        let gift_levels = gift_levels
            .and_then(|raw| {
                parse_gift_levels(raw)
                    .inspect_err(|e| warn!(%e, "falling back to default gift levels"))
                    .ok()
            })
            .unwrap_or_else(GiftLevel::defaults);

        Self { term, gift_levels }
    }
}

/// Parses a pledge term override such as `"3"`.
pub fn parse_term(raw: &str) -> Result<PledgeTerm, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .and_then(PledgeTerm::new)
        .ok_or_else(|| ConfigError::InvalidTerm(raw.to_string()))
}

/// Parses a gift level override such as `"150000,80000,50000"`.
///
/// Every entry must be a non-negative amount; one bad entry rejects the whole
/// list.
pub fn parse_gift_levels(raw: &str) -> Result<Vec<GiftLevel>, ConfigError> {
    if raw.trim().is_empty() {
        return Err(ConfigError::NoGiftLevels);
    }

    raw.split(',')
        .map(|entry| {
            entry
                .trim()
                .parse::<Decimal>()
                .ok()
                .filter(|total| !total.is_sign_negative())
                .map(GiftLevel::new)
                .ok_or_else(|| ConfigError::InvalidGiftLevel(entry.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // parse_term tests
    // =========================================================================

    #[test]
    fn parse_term_accepts_whole_years() {
        assert_eq!(parse_term("5").unwrap().years(), 5);
        assert_eq!(parse_term(" 2 ").unwrap().years(), 2);
    }

    #[test]
    fn parse_term_rejects_zero_negative_and_text() {
        for raw in ["0", "-1", "2.5", "three", ""] {
            assert_eq!(parse_term(raw), Err(ConfigError::InvalidTerm(raw.to_string())));
        }
    }

    // =========================================================================
    // parse_gift_levels tests
    // =========================================================================

    #[test]
    fn parse_gift_levels_keeps_order() {
        let levels = parse_gift_levels("1000, 500,2500.50").unwrap();

        let totals: Vec<Decimal> = levels.iter().map(GiftLevel::total).collect();
        assert_eq!(totals, vec![dec!(1000), dec!(500), dec!(2500.50)]);
    }

    #[test]
    fn parse_gift_levels_rejects_any_bad_entry() {
        assert_eq!(
            parse_gift_levels("1000,abc,500"),
            Err(ConfigError::InvalidGiftLevel("abc".to_string()))
        );
        assert_eq!(
            parse_gift_levels("1000,,500"),
            Err(ConfigError::InvalidGiftLevel(String::new()))
        );
        assert!(parse_gift_levels("-5").is_err());
    }

    #[test]
    fn parse_gift_levels_rejects_blank_list() {
        assert_eq!(parse_gift_levels("  "), Err(ConfigError::NoGiftLevels));
    }

    // =========================================================================
    // from_overrides tests
    // =========================================================================

    #[test]
    fn from_overrides_without_values_uses_defaults() {
        assert_eq!(WidgetConfig::from_overrides(None, None), WidgetConfig::default());
    }

    #[test]
    fn from_overrides_applies_valid_values() {
        let config = WidgetConfig::from_overrides(Some("2"), Some("1000,500"));

        assert_eq!(config.term.years(), 2);
        assert_eq!(config.gift_levels.len(), 2);
    }

    #[test]
    fn from_overrides_falls_back_independently() {
        let config = WidgetConfig::from_overrides(Some("abc"), Some("1000,500"));

        assert_eq!(config.term, PledgeTerm::default());
        assert_eq!(config.gift_levels.len(), 2);

        let config = WidgetConfig::from_overrides(Some("4"), Some("1000;500"));

        assert_eq!(config.term.years(), 4);
        assert_eq!(config.gift_levels, GiftLevel::defaults());
    }
}
