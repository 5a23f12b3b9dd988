//! Scaling between a denomination and the canonical grand total.
//!
//! | Denomination | Multiplier    | Amount                |
//! |--------------|---------------|-----------------------|
//! | Day          | years × 365   | Total / (years × 365) |
//! | Week         | years × 52    | Total / (years × 52)  |
//! | Month        | years × 12    | Total / (years × 12)  |
//! | Year         | years         | Total / years         |
//! | Total        | 1             | Total                 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use giving_core::calculations::{from_total, to_total};
//! use giving_core::{Denomination, PledgeTerm};
//!
//! let term = PledgeTerm::new(3).unwrap();
//! let total = to_total(dec!(1000), Denomination::Month, term).unwrap();
//!
//! assert_eq!(total, dec!(36000));
//! assert_eq!(from_total(total, Denomination::Year, term), dec!(12000));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{Denomination, PledgeTerm};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// The scaled amount does not fit in a `Decimal`.
    #[error("{value} per {denomination} overflows the grand total")]
    Overflow {
        value: Decimal,
        denomination: Denomination,
    },
}

/// Scales `value`, expressed in `from`, up to the grand total.
pub fn to_total(
    value: Decimal,
    from: Denomination,
    term: PledgeTerm,
) -> Result<Decimal, ConversionError> {
    value
        .checked_mul(Decimal::from(from.multiplier(term)))
        .ok_or(ConversionError::Overflow {
            value,
            denomination: from,
        })
}

/// Expresses the grand total in `to`. The result is not rounded.
pub fn from_total(
    total: Decimal,
    to: Denomination,
    term: PledgeTerm,
) -> Decimal {
    total / Decimal::from(to.multiplier(term))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::common::round_half_up;

    fn term(years: u32) -> PledgeTerm {
        PledgeTerm::new(years).unwrap()
    }

    // =========================================================================
    // to_total tests
    // =========================================================================

    #[test]
    fn to_total_scales_day_by_days_in_term() {
        let result = to_total(dec!(100), Denomination::Day, term(1)).unwrap();

        assert_eq!(result, dec!(36500));
    }

    #[test]
    fn to_total_is_identity_for_total() {
        let result = to_total(dec!(1234.56), Denomination::Total, term(7)).unwrap();

        assert_eq!(result, dec!(1234.56));
    }

    #[test]
    fn to_total_reports_overflow() {
        let result = to_total(Decimal::MAX, Denomination::Week, term(3));

        assert_eq!(
            result,
            Err(ConversionError::Overflow {
                value: Decimal::MAX,
                denomination: Denomination::Week,
            })
        );
    }

    // =========================================================================
    // from_total tests
    // =========================================================================

    #[test]
    fn from_total_divides_by_multiplier() {
        let t = term(3);

        assert_eq!(from_total(dec!(36000), Denomination::Year, t), dec!(12000));
        assert_eq!(from_total(dec!(36000), Denomination::Month, t), dec!(1000));
        assert_eq!(
            round_half_up(from_total(dec!(36000), Denomination::Week, t)),
            dec!(230.77)
        );
        assert_eq!(
            round_half_up(from_total(dec!(36000), Denomination::Day, t)),
            dec!(32.88)
        );
    }

    #[test]
    fn from_total_of_zero_is_zero() {
        assert_eq!(from_total(dec!(0), Denomination::Day, term(3)), dec!(0));
    }
}
