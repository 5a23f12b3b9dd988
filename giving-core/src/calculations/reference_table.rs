//! Preset gift levels converted through the same ratios as the live fields.
//!
//! Highlighting compares amounts at cent precision: a cell is current when it
//! rounds to the same cents as the live total expressed in that cell's
//! denomination. Exact equality would miss matches whenever a division
//! leaves a repeating remainder.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculations::common::round_half_up;
use crate::calculations::conversion::from_total;
use crate::format::AmountFormatter;
use crate::{Denomination, GiftLevel, PledgeTerm, WidgetConfig};

/// One denomination of one gift level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceCell {
    pub denomination: Denomination,
    /// Unrounded amount; round only for display.
    pub value: Decimal,
    pub is_current: bool,
}

/// All five denominations of one gift level, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceRow {
    pub gift_level: GiftLevel,
    pub cells: [ReferenceCell; 5],
    pub is_current_row: bool,
}

impl ReferenceRow {
    pub fn cell(
        &self,
        denomination: Denomination,
    ) -> &ReferenceCell {
        &self.cells[denomination.index()]
    }

    /// Formats every cell with `formatter`, in column order.
    pub fn formatted<F: AmountFormatter>(
        &self,
        formatter: &F,
    ) -> [String; 5] {
        self.cells.map(|cell| formatter.format(cell.value))
    }
}

/// Builds reference rows for a fixed set of gift levels.
#[derive(Debug, Clone)]
pub struct ReferenceTable<'a> {
    term: PledgeTerm,
    gift_levels: &'a [GiftLevel],
}

impl<'a> ReferenceTable<'a> {
    pub fn new(config: &'a WidgetConfig) -> Self {
        Self {
            term: config.term,
            gift_levels: &config.gift_levels,
        }
    }

    /// Produces one row per gift level, in configured order.
    ///
    /// `current_total` is the live canonical total; `None` highlights nothing.
    pub fn rows(
        &self,
        current_total: Option<Decimal>,
    ) -> Vec<ReferenceRow> {
        self.gift_levels
            .iter()
            .map(|&level| self.row(level, current_total))
            .collect()
    }

    fn row(
        &self,
        level: GiftLevel,
        current_total: Option<Decimal>,
    ) -> ReferenceRow {
        let cells = Denomination::ALL.map(|denomination| {
            let value = from_total(level.total(), denomination, self.term);
            let is_current = current_total.is_some_and(|current| {
                same_cents(value, from_total(current, denomination, self.term))
            });
            ReferenceCell {
                denomination,
                value,
                is_current,
            }
        });

        ReferenceRow {
            gift_level: level,
            cells,
            is_current_row: current_total.is_some_and(|current| same_cents(level.total(), current)),
        }
    }
}

fn same_cents(
    a: Decimal,
    b: Decimal,
) -> bool {
    round_half_up(a) == round_half_up(b)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::format::{CurrencyFormatter, PlainDecimalFormatter};

    fn config(
        years: u32,
        levels: &[Decimal],
    ) -> WidgetConfig {
        WidgetConfig {
            term: PledgeTerm::new(years).unwrap(),
            gift_levels: levels.iter().copied().map(GiftLevel::new).collect(),
        }
    }

    #[test]
    fn one_row_per_gift_level_in_order() {
        let config = WidgetConfig::default();
        let table = ReferenceTable::new(&config);

        let rows = table.rows(None);

        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].gift_level.total(), dec!(150000));
        assert_eq!(rows[9].gift_level.total(), dec!(1200));
    }

    #[test]
    fn overridden_levels_over_two_years() {
        let config = config(2, &[dec!(1000), dec!(500)]);
        let table = ReferenceTable::new(&config);

        let rows = table.rows(None);

        assert_eq!(rows.len(), 2);
        let years: Vec<String> = rows
            .iter()
            .map(|r| PlainDecimalFormatter.format(r.cell(Denomination::Year).value))
            .collect();
        assert_eq!(years, vec!["500.00", "250.00"]);
    }

    #[test]
    fn rows_render_through_currency_formatter() {
        let config = config(3, &[dec!(36000)]);
        let table = ReferenceTable::new(&config);

        let formatted = table.rows(None)[0].formatted(&CurrencyFormatter);

        assert_eq!(
            formatted,
            [
                "$32.88".to_string(),
                "$230.77".to_string(),
                "$1,000.00".to_string(),
                "$12,000.00".to_string(),
                "$36,000.00".to_string(),
            ]
        );
    }

    #[test]
    fn nothing_is_current_without_a_live_total() {
        let config = WidgetConfig::default();
        let table = ReferenceTable::new(&config);

        let rows = table.rows(None);

        assert!(rows.iter().all(|r| !r.is_current_row));
        assert!(rows.iter().flat_map(|r| r.cells).all(|c| !c.is_current));
    }

    #[test]
    fn matching_total_highlights_whole_row() {
        let config = WidgetConfig::default();
        let table = ReferenceTable::new(&config);

        let rows = table.rows(Some(dec!(25000)));

        let current: Vec<Decimal> = rows
            .iter()
            .filter(|r| r.is_current_row)
            .map(|r| r.gift_level.total())
            .collect();
        assert_eq!(current, vec![dec!(25000)]);
        let row = rows.iter().find(|r| r.is_current_row).unwrap();
        assert!(row.cells.iter().all(|c| c.is_current));
    }

    #[test]
    fn highlight_tolerates_repeating_quotients() {
        let config = config(3, &[dec!(36000)]);
        let table = ReferenceTable::new(&config);

        // 32.88 per day over three years is 36003.60, which still shows as
        // $32.88 per day but not as $36,000.00 total.
        let rows = table.rows(Some(dec!(32.88) * dec!(1095)));

        assert!(rows[0].cell(Denomination::Day).is_current);
        assert!(!rows[0].cell(Denomination::Total).is_current);
        assert!(!rows[0].is_current_row);
    }

    #[test]
    fn empty_gift_levels_produce_no_rows() {
        let config = config(3, &[]);
        let table = ReferenceTable::new(&config);

        assert!(table.rows(Some(dec!(100))).is_empty());
    }
}
