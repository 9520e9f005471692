//! Client-side table pipeline for event report rendering.
//!
//! Takes the rectangular result of an analytics fetch plus the operator's
//! view preferences and produces exactly what the table widget displays:
//! visible columns with a synthetic trailing action column, sorted,
//! searched, filtered, paginated rows, pager metadata, capture-app deep
//! links, and an on-demand CSV export of the projected dataset.

pub mod csv;
pub mod filter;
pub mod links;
pub mod pipeline;
pub mod project;
pub mod sort;

pub use csv::to_csv;
pub use filter::filter_rows;
pub use links::{LinkTemplates, capture_link};
pub use pipeline::{DisplayTable, paginate, project_only, run};
pub use project::{
    ACTION_COLUMN_LABEL, ActionColumns, DEFAULT_HIDDEN_COLUMNS, ProjectedTable, project,
};
pub use sort::{compare_cells, sort_rows};
