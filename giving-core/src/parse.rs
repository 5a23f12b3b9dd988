use rust_decimal::Decimal;
use thiserror::Error;

/// Why a field's text could not be read as an amount.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseAmountError {
    /// Nothing but whitespace was entered.
    #[error("empty amount")]
    Empty,

    /// Non-empty text that is not a decimal number.
    #[error("invalid amount '{input}': {reason}")]
    Invalid { input: String, reason: String },
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses the text of one field into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`). Unlike most
/// numeric inputs, empty or whitespace-only text is an error rather than zero:
/// a cleared field must not propagate.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }
    normalized.parse().map_err(|e: rust_decimal::Error| {
        tracing::trace!(input = %s, "unparseable amount: {}", e);
        ParseAmountError::Invalid {
            input: s.to_string(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_amount("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  123.45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn parse_amount_empty_is_an_error() {
        assert_eq!(parse_amount(""), Err(ParseAmountError::Empty));
        assert_eq!(parse_amount("   "), Err(ParseAmountError::Empty));
    }

    #[test]
    fn parse_amount_rejects_text() {
        assert!(matches!(
            parse_amount("abc"),
            Err(ParseAmountError::Invalid { .. })
        ));
        assert!(parse_amount("1.2.3").is_err());
    }
}
