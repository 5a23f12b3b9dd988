//! The Denomination Synchronizer: five linked fields over one canonical total.
//!
//! Editing any field re-derives the other four from the grand total. The
//! edited field keeps exactly what was typed (trailing points, thousands
//! separators, stray whitespace) while the other fields are rewritten with the
//! plain two-decimal formatter.
//!
//! Text that does not parse is stored verbatim in the edited field and nothing
//! else moves. That includes the empty string: clearing a field leaves the
//! other four at their last good values instead of zeroing them.
//!
//! # Example
//!
//! ```
//! use giving_core::calculations::DenominationSynchronizer;
//! use giving_core::{Denomination, PledgeTerm};
//!
//! let mut sync = DenominationSynchronizer::new(PledgeTerm::default());
//! sync.edit(Denomination::Total, "36000");
//!
//! assert_eq!(sync.field(Denomination::Year), "12000.00");
//! assert_eq!(sync.field(Denomination::Month), "1000.00");
//! assert_eq!(sync.field(Denomination::Total), "36000");
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::conversion::{ConversionError, from_total, to_total};
use crate::format::{AmountFormatter, PlainDecimalFormatter};
use crate::parse::{ParseAmountError, parse_amount};
use crate::{AmountState, Denomination, PledgeTerm};

/// Why an edit did not propagate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoredReason {
    Unparseable(ParseAmountError),
    Overflow(ConversionError),
}

/// What a single edit did to the other fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The text parsed; every other field was re-derived from `total`.
    Propagated { total: Decimal },

    /// The text was stored as typed and nothing else changed.
    Ignored(IgnoredReason),
}

impl EditOutcome {
    pub fn is_propagated(&self) -> bool {
        matches!(self, Self::Propagated { .. })
    }
}

/// Applies one edit to `state` and returns the resulting state.
///
/// `raw` always becomes the display text of `edited`. If it parses, the
/// canonical total becomes `raw * multiplier(edited)` and each other field is
/// set to `total / multiplier(field)` rounded to cents.
pub fn recompute(
    state: &AmountState,
    edited: Denomination,
    raw: &str,
    term: PledgeTerm,
) -> (AmountState, EditOutcome) {
    let mut next = state.clone();
    next.set_field(edited, raw);

    let total = match parse_amount(raw)
        .map_err(IgnoredReason::Unparseable)
        .and_then(|value| to_total(value, edited, term).map_err(IgnoredReason::Overflow))
    {
        Ok(total) => total,
        Err(reason) => return (next, EditOutcome::Ignored(reason)),
    };

    let formatter = PlainDecimalFormatter;
    for other in Denomination::ALL.into_iter().filter(|d| *d != edited) {
        next.set_field(other, formatter.format(from_total(total, other, term)));
    }
    next.set_total(total);

    (next, EditOutcome::Propagated { total })
}

/// Owns the field state of one widget instance.
#[derive(Debug, Clone)]
pub struct DenominationSynchronizer {
    term: PledgeTerm,
    state: AmountState,
}

impl DenominationSynchronizer {
    /// Creates an empty synchronizer for the given pledge term.
    pub fn new(term: PledgeTerm) -> Self {
        Self {
            term,
            state: AmountState::new(),
        }
    }

    /// Handles an edit of one field. Never fails; see [`EditOutcome`].
    pub fn edit(
        &mut self,
        denomination: Denomination,
        raw: &str,
    ) -> EditOutcome {
        debug!(%denomination, input = raw, "field changed");
        let (next, outcome) = recompute(&self.state, denomination, raw, self.term);
        self.state = next;

        if let EditOutcome::Ignored(reason) = &outcome {
            debug!(%denomination, ?reason, "edit not propagated");
        }
        outcome
    }

    pub fn field(
        &self,
        denomination: Denomination,
    ) -> &str {
        self.state.field(denomination)
    }

    /// The canonical total of the last edit that parsed.
    pub fn total(&self) -> Option<Decimal> {
        self.state.total()
    }

    pub fn state(&self) -> &AmountState {
        &self.state
    }
}
