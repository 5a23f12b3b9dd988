use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Preset totals shown in the reference table, largest first.
pub const DEFAULT_GIFT_LEVELS: [u32; 10] = [
    150000, 80000, 50000, 35000, 25000, 15000, 7500, 5000, 2500, 1200,
];

/// A preset grand total shown for reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GiftLevel(Decimal);

impl GiftLevel {
    pub fn new(total: Decimal) -> Self {
        Self(total)
    }

    pub fn total(&self) -> Decimal {
        self.0
    }

    /// The built-in list of gift levels.
    pub fn defaults() -> Vec<GiftLevel> {
        DEFAULT_GIFT_LEVELS
            .iter()
            .map(|&total| Self(Decimal::from(total)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn defaults_keep_declared_order() {
        let levels = GiftLevel::defaults();

        assert_eq!(levels.len(), 10);
        assert_eq!(levels.first().map(GiftLevel::total), Some(dec!(150000)));
        assert_eq!(levels.last().map(GiftLevel::total), Some(dec!(1200)));
    }
}
