//! The display pipeline: projection, sort, filter, pagination.
//!
//! The stage order is part of the contract and must not change. Every
//! stage is a pure function; the whole pipeline is recomputed from the
//! last fetched result table on each view-state change, so identical
//! inputs always reproduce identical output.

use tracing::debug;

use evr_model::{DisplayCell, OutputType, Pager, ResultTable, ViewState};

use crate::filter::filter_rows;
use crate::project::{ActionColumns, ProjectedTable, project};
use crate::sort::sort_rows;

/// One display page plus the pager the host renders beneath the table.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<DisplayCell>>,
    pub pager: Pager,
}

/// Run the full pipeline for the current view state.
pub fn run(
    table: &ResultTable,
    view: &ViewState,
    actions: &ActionColumns,
    output_type: OutputType,
) -> DisplayTable {
    let projected = project(table, &view.hidden_columns, actions, output_type);
    let mut rows = projected.rows;
    sort_rows(&mut rows, view.sort);
    let rows = filter_rows(rows, &view.search, &view.column_filters);
    let total = rows.len();
    let page = paginate(rows, view.page, view.page_size);
    debug!(
        total,
        shown = page.len(),
        page = view.page,
        "display pipeline recomputed"
    );
    DisplayTable {
        headers: projected.headers,
        rows: page,
        pager: Pager::from_total(view.page, view.page_size, total as u64),
    }
}

/// Projection only, as the CSV export consumes it.
pub fn project_only(
    table: &ResultTable,
    view: &ViewState,
    actions: &ActionColumns,
    output_type: OutputType,
) -> ProjectedTable {
    project(table, &view.hidden_columns, actions, output_type)
}

/// Slice the filtered, sorted rows to the requested page. Out-of-range
/// pages yield an empty slice, never an error.
pub fn paginate(rows: Vec<Vec<DisplayCell>>, page: u32, page_size: u32) -> Vec<Vec<DisplayCell>> {
    let page_size = page_size.max(1) as usize;
    let start = (page.max(1) as usize - 1).saturating_mul(page_size);
    if start >= rows.len() {
        return Vec::new();
    }
    rows.into_iter().skip(start).take(page_size).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use evr_model::{ActionCell, Cell};

    fn rows(count: usize) -> Vec<Vec<DisplayCell>> {
        (0..count)
            .map(|i| {
                vec![
                    DisplayCell::Plain(Cell::Number(i as f64)),
                    DisplayCell::Action(ActionCell::default()),
                ]
            })
            .collect()
    }

    #[test]
    fn test_paginate_slices() {
        let page = paginate(rows(25), 2, 10);
        assert_eq!(page.len(), 10);
        assert_eq!(page[0][0].as_plain().unwrap().display(), "10");
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let page = paginate(rows(25), 3, 10);
        assert_eq!(page.len(), 5);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        assert!(paginate(rows(25), 4, 10).is_empty());
        assert!(paginate(Vec::new(), 1, 10).is_empty());
    }
}
