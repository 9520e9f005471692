//! Search and per-column filtering over projected rows.

use std::collections::BTreeMap;

use evr_model::DisplayCell;

/// Keep rows matching the search term and every non-empty column filter.
///
/// A row passes the search when any plain cell's display form contains the
/// term case-insensitively (an empty term matches everything), and passes
/// the filters when each targeted plain cell contains its filter value
/// case-insensitively. The action column is never examined; filters
/// addressing it, or an out-of-range index, are ignored.
pub fn filter_rows(
    rows: Vec<Vec<DisplayCell>>,
    search: &str,
    column_filters: &BTreeMap<usize, String>,
) -> Vec<Vec<DisplayCell>> {
    // Terms match as given; whitespace is part of the needle.
    let term = search.to_lowercase();
    let filters: Vec<(usize, String)> = column_filters
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(&column, value)| (column, value.to_lowercase()))
        .collect();

    if term.is_empty() && filters.is_empty() {
        return rows;
    }

    rows.into_iter()
        .filter(|row| matches_search(row, &term) && matches_filters(row, &filters))
        .collect()
}

fn matches_search(row: &[DisplayCell], term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    row.iter()
        .filter_map(DisplayCell::as_plain)
        .any(|cell| cell.display().to_lowercase().contains(term))
}

fn matches_filters(row: &[DisplayCell], filters: &[(usize, String)]) -> bool {
    filters.iter().all(|(column, value)| {
        match row.get(*column).and_then(DisplayCell::as_plain) {
            Some(cell) => cell.display().to_lowercase().contains(value),
            // Action column or out-of-range: the filter has no target.
            None => true,
        }
    })
}
