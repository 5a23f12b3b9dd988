//! CSV export of the reference table.
//!
//! ## CSV Format
//!
//! | Column       | Type    | Notes                          |
//! |--------------|---------|--------------------------------|
//! | `gift_level` | decimal | the preset total, as configured |
//! | `per_day`    | decimal | two places, no grouping        |
//! | `per_week`   | decimal |                                |
//! | `per_month`  | decimal |                                |
//! | `per_year`   | decimal |                                |
//! | `total`      | decimal |                                |
//! | `current`    | bool    | row matches the live total     |
//!
//! ```csv
//! gift_level,per_day,per_week,per_month,per_year,total,current
//! 1000,1.37,9.62,41.67,500.00,1000.00,false
//! ```

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use giving_core::Denomination;
use giving_core::calculations::ReferenceRow;
use giving_core::format::{AmountFormatter, PlainDecimalFormatter};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::app::Widget;

#[derive(Debug, Serialize)]
struct CsvRow {
    gift_level: Decimal,
    per_day: String,
    per_week: String,
    per_month: String,
    per_year: String,
    total: String,
    current: bool,
}

impl From<&ReferenceRow> for CsvRow {
    fn from(row: &ReferenceRow) -> Self {
        let cell = |d: Denomination| PlainDecimalFormatter.format(row.cell(d).value);
        Self {
            gift_level: row.gift_level.total(),
            per_day: cell(Denomination::Day),
            per_week: cell(Denomination::Week),
            per_month: cell(Denomination::Month),
            per_year: cell(Denomination::Year),
            total: cell(Denomination::Total),
            current: row.is_current_row,
        }
    }
}

/// Writes `rows` as CSV with a header line. Returns the number of data rows.
pub fn write_csv<W: Write>(
    writer: W,
    rows: &[ReferenceRow],
) -> Result<usize, csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(CsvRow::from(row))?;
    }
    csv_writer.flush()?;
    Ok(rows.len())
}

/// Writes the widget's reference table to a file, replacing it if present.
pub fn export_to_path(
    path: &Path,
    widget: &Widget,
) -> Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create: {}", path.display()))?;
    let written = write_csv(file, &widget.reference_rows())
        .with_context(|| format!("Failed to write CSV: {}", path.display()))?;

    info!(path = %path.display(), rows = written, "exported reference table");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use giving_core::WidgetConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn writes_header_and_one_line_per_level() {
        let mut widget = Widget::new(WidgetConfig::from_overrides(Some("2"), Some("1000,500")));
        widget.edit(Denomination::Total, "500").unwrap();

        let mut buffer = Vec::new();
        let written = write_csv(&mut buffer, &widget.reference_rows()).unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "\
gift_level,per_day,per_week,per_month,per_year,total,current
1000,1.37,9.62,41.67,500.00,1000.00,false
500,0.68,4.81,20.83,250.00,500.00,true
"
        );
    }

    #[test]
    fn empty_table_writes_nothing() {
        let mut buffer = Vec::new();

        let written = write_csv(&mut buffer, &[]).unwrap();

        assert_eq!(written, 0);
        assert!(buffer.is_empty());
    }
}
