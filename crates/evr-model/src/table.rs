//! Result tables and cell values.

use serde::{Deserialize, Serialize};

use crate::enums::OutputType;
use crate::error::{EvrError, Result};

/// A single analytics cell: text, a number, or missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Cell {
    Text(String),
    Number(f64),
    Missing,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Textual form used for search, filtering, and export. Numbers are
    /// trimmed of trailing zeros; missing values render empty.
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => format_numeric(*n),
            Cell::Missing => String::new(),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

/// Formats a floating-point number without trailing zeros.
/// "10.50" -> "10.5", "10.0" -> "10".
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// A rectangular analytics result: a header row plus data rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ResultTable {
    /// Build a table, enforcing that every row matches the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        let expected = headers.len();
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(EvrError::RaggedRow {
                    row: idx,
                    expected,
                    found: row.len(),
                });
            }
        }
        Ok(Self { headers, rows })
    }

    /// Index of a column by exact, case-sensitive header match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Pager metadata returned alongside an analytics result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pager {
    pub page: u32,
    pub page_count: u32,
    pub total: u64,
    pub page_size: u32,
}

impl Pager {
    /// Derive pager metadata from a row count. A zero total still reports
    /// one (empty) page.
    pub fn from_total(page: u32, page_size: u32, total: u64) -> Self {
        let page_count = if total == 0 {
            1
        } else {
            total.div_ceil(u64::from(page_size.max(1))).min(u64::from(u32::MAX)) as u32
        };
        Self {
            page,
            page_count,
            total,
            page_size,
        }
    }
}

/// Identifiers carried by the synthetic trailing Action column.
///
/// These feed capture-application deep links; they are never displayable
/// analytics data and take no part in search, filter, or sort.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionCell {
    pub event: Option<String>,
    pub tracked_entity: Option<String>,
    pub enrollment: Option<String>,
    pub org_unit: Option<String>,
    pub output_type: OutputType,
}

/// A cell of the projected display table: either plain analytics data or
/// the trailing action payload. Keeping this a sum type lets the pipeline
/// match exhaustively instead of inspecting value shapes at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum DisplayCell {
    Plain(Cell),
    Action(ActionCell),
}

impl DisplayCell {
    /// Plain cell contents, `None` for the action column.
    pub fn as_plain(&self) -> Option<&Cell> {
        match self {
            DisplayCell::Plain(cell) => Some(cell),
            DisplayCell::Action(_) => None,
        }
    }

    pub fn as_action(&self) -> Option<&ActionCell> {
        match self {
            DisplayCell::Plain(_) => None,
            DisplayCell::Action(action) => Some(action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_numeric_trims_trailing_zeros() {
        assert_eq!(format_numeric(10.0), "10");
        assert_eq!(format_numeric(10.5), "10.5");
        assert_eq!(format_numeric(0.25), "0.25");
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::text("Jane").display(), "Jane");
        assert_eq!(Cell::Number(42.0).display(), "42");
        assert_eq!(Cell::Missing.display(), "");
    }

    #[test]
    fn test_result_table_rejects_ragged_rows() {
        let headers = vec!["Event".to_string(), "Age".to_string()];
        let rows = vec![vec![Cell::text("a1")]];
        let err = ResultTable::new(headers, rows).unwrap_err();
        assert!(matches!(
            err,
            EvrError::RaggedRow {
                row: 0,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_column_index_is_case_sensitive() {
        let table =
            ResultTable::new(vec!["Event".to_string()], vec![]).unwrap();
        assert_eq!(table.column_index("Event"), Some(0));
        assert_eq!(table.column_index("event"), None);
    }

    #[test]
    fn test_pager_from_total() {
        let pager = Pager::from_total(1, 10, 25);
        assert_eq!(pager.page_count, 3);
        let empty = Pager::from_total(1, 10, 0);
        assert_eq!(empty.page_count, 1);
    }
}
