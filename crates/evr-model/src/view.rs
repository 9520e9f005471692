//! View preferences for the displayed table.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::enums::SortDirection;
use crate::error::{EvrError, Result};

/// Default number of rows shown per display page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// The operator's current table preferences.
///
/// Owned and mutated serially by the host; the pipeline only ever reads
/// it. Persistence of the hidden-column set is an external collaborator's
/// job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewState {
    /// Header names of columns removed from display.
    pub hidden_columns: BTreeSet<String>,
    /// Case-insensitive substring matched against every visible cell.
    pub search: String,
    /// Per-column case-insensitive substring filters, keyed by visible
    /// column index.
    pub column_filters: BTreeMap<usize, String>,
    /// Sort column (visible index) and direction; `None` keeps fetch order.
    pub sort: Option<(usize, SortDirection)>,
    pub page: u32,
    pub page_size: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            hidden_columns: BTreeSet::new(),
            search: String::new(),
            column_filters: BTreeMap::new(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_hidden_columns(mut self, columns: impl IntoIterator<Item = String>) -> Self {
        self.hidden_columns = columns.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    #[must_use]
    pub fn with_column_filter(mut self, column: usize, value: impl Into<String>) -> Self {
        self.column_filters.insert(column, value.into());
        self
    }

    #[must_use]
    pub fn with_sort(mut self, column: usize, direction: SortDirection) -> Self {
        self.sort = Some((column, direction));
        self
    }

    /// Set the display page and page size.
    ///
    /// # Errors
    ///
    /// Zero values are a caller bug, not a data condition, and are
    /// rejected with [`EvrError::InvalidPaging`].
    pub fn with_paging(mut self, page: u32, page_size: u32) -> Result<Self> {
        if page == 0 {
            return Err(EvrError::InvalidPaging {
                name: "page",
                value: page,
            });
        }
        if page_size == 0 {
            return Err(EvrError::InvalidPaging {
                name: "page size",
                value: page_size,
            });
        }
        self.page = page;
        self.page_size = page_size;
        Ok(self)
    }
}
