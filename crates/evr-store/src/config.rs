//! The persisted configuration blob and its view-state seeding.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use evr_model::{DEFAULT_PAGE_SIZE, RelativePeriod, ViewState};

/// Per-dashboard widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    /// The mapped report definition, when the operator has picked one.
    pub report_id: Option<String>,
    pub hidden_columns: BTreeSet<String>,
    pub page_size: u32,
    /// Period override; `None` defers to the report definition.
    pub period: Option<RelativePeriod>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            report_id: None,
            hidden_columns: BTreeSet::new(),
            page_size: DEFAULT_PAGE_SIZE,
            period: None,
        }
    }
}

impl DashboardConfig {
    /// Seed the session-start view state. A persisted zero page size is
    /// treated as absent rather than propagated into the pipeline.
    pub fn seed_view_state(&self) -> ViewState {
        let mut view = ViewState::new();
        view.hidden_columns = self.hidden_columns.clone();
        if self.page_size > 0 {
            view.page_size = self.page_size;
        }
        view
    }

    /// Capture the blob written back when the operator changes columns.
    pub fn from_view_state(
        report_id: Option<String>,
        view: &ViewState,
        period: Option<RelativePeriod>,
    ) -> Self {
        Self {
            report_id,
            hidden_columns: view.hidden_columns.clone(),
            page_size: view.page_size,
            period,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_view_state() {
        let config = DashboardConfig {
            report_id: Some("yL7kSI3hkSG".to_string()),
            hidden_columns: ["Event".to_string()].into_iter().collect(),
            page_size: 25,
            period: Some(RelativePeriod::ThisYear),
        };
        let view = config.seed_view_state();
        assert!(view.hidden_columns.contains("Event"));
        assert_eq!(view.page_size, 25);
        assert_eq!(view.page, 1);
    }

    #[test]
    fn test_zero_page_size_not_propagated() {
        let config = DashboardConfig {
            page_size: 0,
            ..Default::default()
        };
        assert_eq!(config.seed_view_state().page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_round_trip_through_view_state() {
        let view = ViewState::new()
            .with_hidden_columns(["Age".to_string()])
            .with_paging(1, 50)
            .unwrap();
        let config = DashboardConfig::from_view_state(
            Some("yL7kSI3hkSG".to_string()),
            &view,
            None,
        );
        assert_eq!(config.page_size, 50);
        assert!(config.hidden_columns.contains("Age"));
        assert_eq!(config.seed_view_state().hidden_columns, view.hidden_columns);
    }
}
