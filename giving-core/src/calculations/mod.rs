//! Conversion math shared by the synchronizer and the reference table.
//!
//! Every amount is derived from one canonical grand total; the submodules
//! scale amounts to and from that total, fan a single edit out to the five
//! linked fields, and build the gift level reference rows.

pub mod common;
pub mod conversion;
pub mod reference_table;
pub mod synchronizer;

pub use conversion::{ConversionError, from_total, to_total};
pub use reference_table::{ReferenceCell, ReferenceRow, ReferenceTable};
pub use synchronizer::{DenominationSynchronizer, EditOutcome, IgnoredReason, recompute};
