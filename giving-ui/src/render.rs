//! Plain-text rendering of the calculator table.
//!
//! ```text
//!        Per Day     Per Week    Per Month     Per Year        Total
//!   ------------ ------------ ------------ ------------ ------------
//!         $32.88      $230.77     $1000.00    $12000.00       $36000
//!   ------------ ------------ ------------ ------------ ------------
//! >      $32.88*     $230.77*   $1,000.00*  $12,000.00*  $36,000.00*
//! ```
//!
//! The first body row is the editable input row (raw field text behind a `$`
//! prefix). Reference rows always go through the currency formatter; `*`
//! marks a current cell and `>` a current row.

use giving_core::calculations::ReferenceRow;
use giving_core::format::{AmountFormatter, CurrencyFormatter};
use giving_core::{AmountState, Denomination};

const MIN_COLUMN_WIDTH: usize = 12;
const UNSET: &str = "—";
const CURRENT_ROW: &str = "> ";
const OTHER_ROW: &str = "  ";

/// Renders the five input fields on their own, one per line.
pub fn render_fields(state: &AmountState) -> String {
    state
        .fields()
        .map(|(denomination, text)| format!("{:<10} {}", denomination.label(), input_cell(text)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the header, the input row and every reference row.
pub fn render_table(
    state: &AmountState,
    rows: &[ReferenceRow],
) -> String {
    let header: Vec<String> = Denomination::ALL
        .iter()
        .map(|d| d.label().to_string())
        .collect();
    let inputs: Vec<String> = state.fields().map(|(_, text)| input_cell(text)).collect();
    let body: Vec<(bool, Vec<String>)> = rows
        .iter()
        .map(|row| (row.is_current_row, reference_cells(row)))
        .collect();

    let widths: Vec<usize> = (0..Denomination::ALL.len())
        .map(|i| {
            std::iter::once(&header[i])
                .chain(std::iter::once(&inputs[i]))
                .chain(body.iter().map(|(_, cells)| &cells[i]))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut lines = vec![
        line(OTHER_ROW, &header, &widths),
        line(OTHER_ROW, &rule, &widths),
        line(OTHER_ROW, &inputs, &widths),
    ];
    if !body.is_empty() {
        lines.push(line(OTHER_ROW, &rule, &widths));
    }
    for (is_current, cells) in &body {
        let marker = if *is_current { CURRENT_ROW } else { OTHER_ROW };
        lines.push(line(marker, cells, &widths));
    }
    lines.join("\n")
}

fn input_cell(text: &str) -> String {
    if text.is_empty() {
        UNSET.to_string()
    } else {
        format!("${text}")
    }
}

fn reference_cells(row: &ReferenceRow) -> Vec<String> {
    row.cells
        .iter()
        .map(|cell| {
            let text = CurrencyFormatter.format(cell.value);
            if cell.is_current { format!("{text}*") } else { text }
        })
        .collect()
}

fn line(
    marker: &str,
    cells: &[String],
    widths: &[usize],
) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:>width$}"))
        .collect();
    format!("{marker}{}", padded.join(" ")).trim_end().to_string()
}
