//! Column projection and Action column synthesis.
//!
//! Projection is the first pipeline stage: hidden columns are removed
//! (original order preserved) and every data row gains a trailing action
//! cell built from identifier columns looked up in the *unprojected*
//! header. The later stages all operate on the projected table.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use evr_model::{ActionCell, Cell, DisplayCell, OutputType, ResultTable};

/// Label of the synthetic trailing column.
pub const ACTION_COLUMN_LABEL: &str = "Action";

/// Identifier columns hidden from display by default. They still feed the
/// action cell; hosts request this constant instead of re-declaring it.
pub const DEFAULT_HIDDEN_COLUMNS: &[&str] = &[
    "Event",
    "Tracked entity instance",
    "Enrollment",
    "Organisation unit",
];

/// Header names the action cell is assembled from. Lookups are exact and
/// case-sensitive; an absent column leaves its field `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionColumns {
    pub event: String,
    pub tracked_entity: String,
    pub enrollment: String,
    pub org_unit: String,
}

impl Default for ActionColumns {
    fn default() -> Self {
        Self {
            event: "Event".to_string(),
            tracked_entity: "Tracked entity instance".to_string(),
            enrollment: "Enrollment".to_string(),
            org_unit: "Organisation unit".to_string(),
        }
    }
}

/// The table after projection: visible headers plus the Action label, and
/// rows of display cells ending in the action payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<DisplayCell>>,
}

impl ProjectedTable {
    /// Number of plain (non-action) columns.
    pub fn plain_width(&self) -> usize {
        self.headers.len().saturating_sub(1)
    }
}

/// Project a result table through the hidden-column set and append the
/// action column.
pub fn project(
    table: &ResultTable,
    hidden: &BTreeSet<String>,
    actions: &ActionColumns,
    output_type: OutputType,
) -> ProjectedTable {
    let kept: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(_, name)| !hidden.contains(*name))
        .map(|(idx, _)| idx)
        .collect();
    debug!(
        kept = kept.len(),
        hidden = table.headers.len() - kept.len(),
        "projected result table"
    );

    let mut headers: Vec<String> = kept.iter().map(|&idx| table.headers[idx].clone()).collect();
    headers.push(ACTION_COLUMN_LABEL.to_string());

    let event_idx = table.column_index(&actions.event);
    let tracked_idx = table.column_index(&actions.tracked_entity);
    let enrollment_idx = table.column_index(&actions.enrollment);
    let org_unit_idx = table.column_index(&actions.org_unit);

    let rows = table
        .rows
        .iter()
        .map(|row| {
            // The table's fields are public, so a ragged row can arrive
            // despite the constructor check; short rows pad as missing.
            let mut cells: Vec<DisplayCell> = kept
                .iter()
                .map(|&idx| DisplayCell::Plain(row.get(idx).cloned().unwrap_or(Cell::Missing)))
                .collect();
            cells.push(DisplayCell::Action(ActionCell {
                event: id_at(row, event_idx),
                tracked_entity: id_at(row, tracked_idx),
                enrollment: id_at(row, enrollment_idx),
                org_unit: id_at(row, org_unit_idx),
                output_type,
            }));
            cells
        })
        .collect();

    ProjectedTable { headers, rows }
}

/// Non-empty display form of the cell at `idx`, if the column exists.
fn id_at(row: &[Cell], idx: Option<usize>) -> Option<String> {
    let cell = idx.and_then(|i| row.get(i))?;
    let text = cell.display();
    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ResultTable {
        ResultTable::new(
            vec![
                "Event".to_string(),
                "First Name".to_string(),
                "Age".to_string(),
            ],
            vec![
                vec![Cell::text("V1CerIi3sdL"), Cell::text("Jane"), Cell::Number(34.0)],
                vec![Cell::Missing, Cell::text("John"), Cell::Number(41.0)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_projected_header_appends_action() {
        let hidden: BTreeSet<String> = ["Event".to_string()].into_iter().collect();
        let projected = project(&table(), &hidden, &ActionColumns::default(), OutputType::Event);
        assert_eq!(projected.headers, vec!["First Name", "Age", "Action"]);
        assert_eq!(projected.plain_width(), 2);
    }

    #[test]
    fn test_action_cell_built_from_hidden_column() {
        let hidden: BTreeSet<String> = ["Event".to_string()].into_iter().collect();
        let projected = project(&table(), &hidden, &ActionColumns::default(), OutputType::Event);
        let action = projected.rows[0].last().unwrap().as_action().unwrap();
        assert_eq!(action.event.as_deref(), Some("V1CerIi3sdL"));
        assert_eq!(action.tracked_entity, None);
        assert_eq!(action.output_type, OutputType::Event);
    }

    #[test]
    fn test_missing_identifier_cell_is_none() {
        let hidden = BTreeSet::new();
        let projected = project(&table(), &hidden, &ActionColumns::default(), OutputType::Event);
        let action = projected.rows[1].last().unwrap().as_action().unwrap();
        assert_eq!(action.event, None);
    }

    #[test]
    fn test_column_order_preserved() {
        let hidden: BTreeSet<String> = ["First Name".to_string()].into_iter().collect();
        let projected = project(&table(), &hidden, &ActionColumns::default(), OutputType::Event);
        assert_eq!(projected.headers, vec!["Event", "Age", "Action"]);
    }

    #[test]
    fn test_short_row_pads_as_missing() {
        // Public fields let a ragged table skip the constructor.
        let table = ResultTable {
            headers: vec!["Event".to_string(), "Age".to_string()],
            rows: vec![vec![Cell::text("V1CerIi3sdL")]],
        };
        let projected = project(
            &table,
            &BTreeSet::new(),
            &ActionColumns::default(),
            OutputType::Event,
        );
        assert_eq!(projected.rows[0][0].as_plain(), Some(&Cell::text("V1CerIi3sdL")));
        assert_eq!(projected.rows[0][1].as_plain(), Some(&Cell::Missing));
    }

    #[test]
    fn test_default_hidden_columns_match_action_lookups() {
        let actions = ActionColumns::default();
        assert!(DEFAULT_HIDDEN_COLUMNS.contains(&actions.event.as_str()));
        assert!(DEFAULT_HIDDEN_COLUMNS.contains(&actions.tracked_entity.as_str()));
        assert!(DEFAULT_HIDDEN_COLUMNS.contains(&actions.enrollment.as_str()));
        assert!(DEFAULT_HIDDEN_COLUMNS.contains(&actions.org_unit.as_str()));
    }
}
