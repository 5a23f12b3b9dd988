use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Denomination;

/// Display state of the five linked fields.
///
/// Each field holds the text currently shown for its denomination; an empty
/// string means the field has never been filled. `total` is the canonical
/// amount every displayed field was derived from, and only moves when an edit
/// parses successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountState {
    fields: [String; 5],
    total: Option<Decimal>,
}

impl AmountState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently displayed for `denomination`.
    pub fn field(
        &self,
        denomination: Denomination,
    ) -> &str {
        &self.fields[denomination.index()]
    }

    /// The canonical total, if any edit has ever parsed.
    pub fn total(&self) -> Option<Decimal> {
        self.total
    }

    /// True when no field holds any text.
    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(String::is_empty)
    }

    /// Iterates `(denomination, text)` pairs in column order.
    pub fn fields(&self) -> impl Iterator<Item = (Denomination, &str)> {
        Denomination::ALL
            .into_iter()
            .map(|d| (d, self.fields[d.index()].as_str()))
    }

    pub(crate) fn set_field(
        &mut self,
        denomination: Denomination,
        text: impl Into<String>,
    ) {
        self.fields[denomination.index()] = text.into();
    }

    pub(crate) fn set_total(
        &mut self,
        total: Decimal,
    ) {
        self.total = Some(total);
    }
}
