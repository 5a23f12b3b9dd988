//! Character-level filtering of typed amounts.
//!
//! This stands in for a masked currency input: it refuses keystrokes the
//! field would never accept, before the text reaches the synchronizer. Text
//! that is merely not a number yet (`"1."`, `"abc"`) is let through, since the
//! synchronizer tolerates it.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputRejected {
    #[error("negative amounts are not accepted")]
    Negative,

    #[error("amounts must fit on one line")]
    ControlCharacter,
}

/// Checks `raw` against the field's character rules.
pub fn filter_amount(raw: &str) -> Result<&str, InputRejected> {
    if raw.contains('-') {
        return Err(InputRejected::Negative);
    }
    if raw.chars().any(char::is_control) {
        return Err(InputRejected::ControlCharacter);
    }
    Ok(raw)
}
