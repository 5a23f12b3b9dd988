//! Display formatting for amounts.
//!
//! Two formatters exist: a locale currency formatter (en-US dollars) used for
//! read-only display, and a plain two-decimal formatter used for the editable
//! fields so that re-parsing a displayed value is lossless. Both are stateless
//! values; construct them wherever they are needed.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

/// Turns an amount into display text.
pub trait AmountFormatter {
    fn format(
        &self,
        amount: Decimal,
    ) -> String;
}

/// en-US currency formatting: `$1,234.56`, `-$12.00`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyFormatter;

/// Fixed two-decimal, ungrouped formatting: `1234.56`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDecimalFormatter;

impl AmountFormatter for CurrencyFormatter {
    fn format(
        &self,
        amount: Decimal,
    ) -> String {
        let rounded = round_half_up(amount.abs());
        let negative = amount.is_sign_negative() && !rounded.is_zero();
        let plain = two_places(rounded);
        let (whole, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        format!(
            "{}${}.{}",
            if negative { "-" } else { "" },
            group_thousands(whole),
            cents
        )
    }
}

impl AmountFormatter for PlainDecimalFormatter {
    fn format(
        &self,
        amount: Decimal,
    ) -> String {
        two_places(round_half_up(amount))
    }
}

/// Renders a value that is already rounded to cents with exactly two places.
///
/// Near the top of the `Decimal` range there is no room for a scale of 2, and
/// `rescale` keeps fewer places; the missing zeros are padded as text.
fn two_places(rounded: Decimal) -> String {
    let mut value = rounded;
    value.rescale(2);
    if value.is_zero() {
        // Drop the sign of a negative zero.
        value.set_sign_positive(true);
    }
    match value.scale() {
        0 => format!("{value}.00"),
        1 => format!("{value}0"),
        _ => value.to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
