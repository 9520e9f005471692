//! CSV export of the projected table.
//!
//! Export always serializes the full projected dataset, header included:
//! column visibility applies, search/filter/sort/pagination do not. The
//! quoting rule is the widget's own: only comma-containing cells are
//! wrapped in double quotes, with inner quotes doubled.

use evr_model::DisplayCell;

use crate::project::ProjectedTable;

/// Serialize the projected table to CSV.
pub fn to_csv(table: &ProjectedTable) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 1);
    lines.push(
        table
            .headers
            .iter()
            .map(|h| escape_field(h))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in &table.rows {
        let line = row
            .iter()
            .map(|cell| match cell {
                DisplayCell::Plain(cell) => escape_field(&cell.display()),
                // Link metadata, not analytics data.
                DisplayCell::Action(_) => String::new(),
            })
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }
    lines.join("\n")
}

fn escape_field(value: &str) -> String {
    if value.contains(',') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
