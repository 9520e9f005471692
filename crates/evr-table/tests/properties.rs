use std::collections::BTreeMap;

use proptest::prelude::*;

use evr_model::{ActionCell, Cell, DisplayCell, SortDirection};
use evr_table::{filter_rows, paginate, sort_rows};

/// A row whose first cell is the sort key and whose second cell is a
/// unique payload used to observe relative order.
fn keyed_row(key: &str, payload: usize) -> Vec<DisplayCell> {
    vec![
        DisplayCell::Plain(Cell::text(key)),
        DisplayCell::Plain(Cell::Number(payload as f64)),
        DisplayCell::Action(ActionCell::default()),
    ]
}

fn key_of(row: &[DisplayCell]) -> String {
    row[0].as_plain().unwrap().display()
}

fn payload_of(row: &[DisplayCell]) -> String {
    row[1].as_plain().unwrap().display()
}

proptest! {
    /// Tied sort keys keep their original relative order in both
    /// directions: descending reverses the comparator, not the array.
    #[test]
    fn sort_is_stable_for_tied_keys(
        keys in proptest::collection::vec(prop_oneof!["alpha", "beta", "gamma"], 0..40),
        descending in any::<bool>(),
    ) {
        let rows: Vec<Vec<DisplayCell>> = keys
            .iter()
            .enumerate()
            .map(|(idx, key)| keyed_row(key, idx))
            .collect();
        let direction = if descending { SortDirection::Desc } else { SortDirection::Asc };

        let mut sorted = rows.clone();
        sort_rows(&mut sorted, Some((0, direction)));

        for window in sorted.windows(2) {
            if key_of(&window[0]) == key_of(&window[1]) {
                let a: f64 = payload_of(&window[0]).parse().unwrap();
                let b: f64 = payload_of(&window[1]).parse().unwrap();
                prop_assert!(a < b, "tied keys must keep input order");
            }
        }
    }

    /// Sorting twice with the same view yields the same order.
    #[test]
    fn sort_is_idempotent(
        keys in proptest::collection::vec("[a-z]{1,6}", 0..30),
        descending in any::<bool>(),
    ) {
        let rows: Vec<Vec<DisplayCell>> = keys
            .iter()
            .enumerate()
            .map(|(idx, key)| keyed_row(key, idx))
            .collect();
        let direction = if descending { SortDirection::Desc } else { SortDirection::Asc };

        let mut once = rows.clone();
        sort_rows(&mut once, Some((0, direction)));
        let mut twice = once.clone();
        sort_rows(&mut twice, Some((0, direction)));
        prop_assert_eq!(once, twice);
    }

    /// Pagination never exceeds the page size, and pages beyond the data
    /// are empty rather than an error.
    #[test]
    fn pagination_bounds_hold(
        row_count in 0usize..60,
        page in 1u32..10,
        page_size in 1u32..20,
    ) {
        let rows: Vec<Vec<DisplayCell>> = (0..row_count)
            .map(|idx| keyed_row("row", idx))
            .collect();
        let slice = paginate(rows, page, page_size);
        prop_assert!(slice.len() <= page_size as usize);

        let start = (page as usize - 1) * page_size as usize;
        if start >= row_count {
            prop_assert!(slice.is_empty());
        } else {
            prop_assert_eq!(slice.len(), (row_count - start).min(page_size as usize));
        }
    }

    /// Filtering is a subset operation preserving input order.
    #[test]
    fn filter_preserves_order(
        keys in proptest::collection::vec("[a-d]{1,4}", 0..30),
        term in "[a-d]{0,2}",
    ) {
        let rows: Vec<Vec<DisplayCell>> = keys
            .iter()
            .enumerate()
            .map(|(idx, key)| keyed_row(key, idx))
            .collect();
        let kept = filter_rows(rows.clone(), &term, &BTreeMap::new());

        prop_assert!(kept.len() <= rows.len());
        let payloads: Vec<String> = kept.iter().map(|r| payload_of(r)).collect();
        let mut sorted_payloads = payloads.clone();
        sorted_payloads.sort_by(|a, b| {
            a.parse::<f64>().unwrap().total_cmp(&b.parse::<f64>().unwrap())
        });
        prop_assert_eq!(payloads, sorted_payloads, "filter must not reorder rows");
        for row in &kept {
            prop_assert!(key_of(row).contains(&term) || term.is_empty());
        }
    }
}
