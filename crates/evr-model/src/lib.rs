pub mod enums;
pub mod error;
pub mod report;
pub mod table;
pub mod view;

pub use enums::{OutputType, ProgramType, RelativePeriod, RelativePeriods, SortDirection};
pub use error::{EvrError, Result};
pub use report::{AttributeDimension, DataElementDimension, Program, Ref, ReportDefinition};
pub use table::{ActionCell, Cell, DisplayCell, Pager, ResultTable, format_numeric};
pub use view::{DEFAULT_PAGE_SIZE, ViewState};
