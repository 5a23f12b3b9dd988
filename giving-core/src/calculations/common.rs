//! Rounding shared by the conversion, synchronizer and reference table code.

use rust_decimal::Decimal;

/// Rounds an amount to whole cents, half-up (away from zero at exactly 0.005).
///
/// Every displayed amount passes through here, so two amounts that render the
/// same also compare equal after rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use giving_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(32.8767)), dec!(32.88));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
