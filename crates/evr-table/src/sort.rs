//! Stable row sorting with per-comparison type fallback.
//!
//! Two cells compare numerically when both parse as finite numbers,
//! chronologically when both parse as dates, and otherwise as
//! case-insensitive strings. The fallback is decided independently per
//! comparison, which matches the observed widget behavior; for columns
//! mixing numbers, dates, and text this can yield a non-transitive order
//! (see the pipeline integration tests). Action cells are never a sort
//! key and compare equal.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use evr_model::{Cell, DisplayCell, SortDirection};

/// Sort projected rows in place. `None` keeps the fetch order; descending
/// reverses the comparator result, not the final array, so ties keep
/// their input order either way.
pub fn sort_rows(rows: &mut [Vec<DisplayCell>], sort: Option<(usize, SortDirection)>) {
    let Some((column, direction)) = sort else {
        return;
    };
    rows.sort_by(|a, b| {
        let ordering = compare_at(a, b, column);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_at(a: &[DisplayCell], b: &[DisplayCell], column: usize) -> Ordering {
    match (plain_at(a, column), plain_at(b, column)) {
        (Some(left), Some(right)) => compare_cells(left, right),
        // Action column or out-of-range index: everything ties.
        _ => Ordering::Equal,
    }
}

fn plain_at(row: &[DisplayCell], column: usize) -> Option<&Cell> {
    row.get(column).and_then(DisplayCell::as_plain)
}

/// Compare two plain cells: numeric, then date, then case-insensitive
/// string.
pub fn compare_cells(a: &Cell, b: &Cell) -> Ordering {
    if let (Some(x), Some(y)) = (numeric_value(a), numeric_value(b)) {
        return x.total_cmp(&y);
    }
    let (left, right) = (a.display(), b.display());
    if let (Some(x), Some(y)) = (parse_date(&left), parse_date(&right)) {
        return x.cmp(&y);
    }
    left.to_lowercase().cmp(&right.to_lowercase())
}

fn numeric_value(cell: &Cell) -> Option<f64> {
    let value = match cell {
        Cell::Number(n) => *n,
        Cell::Text(s) => s.trim().parse::<f64>().ok()?,
        Cell::Missing => return None,
    };
    value.is_finite().then_some(value)
}

/// Parse analytics date forms: plain dates, local timestamps with
/// optional fractional seconds, and offset timestamps.
fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime);
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.naive_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use evr_model::{ActionCell, DisplayCell};

    fn row(value: &str) -> Vec<DisplayCell> {
        vec![
            DisplayCell::Plain(Cell::text(value)),
            DisplayCell::Action(ActionCell::default()),
        ]
    }

    #[test]
    fn test_numeric_before_string_fallback() {
        let mut rows = vec![row("10"), row("2"), row("abc")];
        sort_rows(&mut rows, Some((0, SortDirection::Asc)));
        let values: Vec<String> = rows
            .iter()
            .map(|r| r[0].as_plain().unwrap().display())
            .collect();
        assert_eq!(values, vec!["2", "10", "abc"]);
    }

    #[test]
    fn test_dates_compare_chronologically() {
        let mut rows = vec![row("2024-03-01"), row("2023-12-31"), row("2024-01-15")];
        sort_rows(&mut rows, Some((0, SortDirection::Asc)));
        let values: Vec<String> = rows
            .iter()
            .map(|r| r[0].as_plain().unwrap().display())
            .collect();
        assert_eq!(values, vec!["2023-12-31", "2024-01-15", "2024-03-01"]);
    }

    #[test]
    fn test_timestamp_forms_parse() {
        assert!(parse_date("2024-01-15").is_some());
        assert!(parse_date("2024-01-15T08:30:00").is_some());
        assert!(parse_date("2024-01-15T08:30:00.250").is_some());
        assert!(parse_date("2024-01-15T08:30:00+02:00").is_some());
        assert!(parse_date("not a date").is_none());
    }

    #[test]
    fn test_string_compare_case_insensitive() {
        let mut rows = vec![row("banana"), row("Apple"), row("cherry")];
        sort_rows(&mut rows, Some((0, SortDirection::Asc)));
        let values: Vec<String> = rows
            .iter()
            .map(|r| r[0].as_plain().unwrap().display())
            .collect();
        assert_eq!(values, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_desc_reverses_comparator() {
        let mut rows = vec![row("2"), row("10")];
        sort_rows(&mut rows, Some((0, SortDirection::Desc)));
        assert_eq!(rows[0][0].as_plain().unwrap().display(), "10");
    }

    #[test]
    fn test_numbers_compare_against_numeric_text() {
        assert_eq!(
            compare_cells(&Cell::Number(5.0), &Cell::text("10")),
            Ordering::Less
        );
    }

    #[test]
    fn test_missing_falls_back_to_empty_string() {
        assert_eq!(
            compare_cells(&Cell::Missing, &Cell::text("a")),
            Ordering::Less
        );
    }

    #[test]
    fn test_action_column_never_sorts() {
        let mut rows = vec![row("b"), row("a")];
        // Column 1 is the action column; order must be untouched.
        sort_rows(&mut rows, Some((1, SortDirection::Asc)));
        assert_eq!(rows[0][0].as_plain().unwrap().display(), "b");
    }
}
