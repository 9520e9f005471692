//! Analytics query parameters and their wire encoding.

use serde::{Deserialize, Serialize};

use evr_model::OutputType;

/// Sentinel org unit meaning "the requesting user's organisation unit".
pub const USER_ORG_UNIT: &str = "USER_ORGUNIT";

/// Default fetch page size for analytics queries.
pub const DEFAULT_QUERY_PAGE_SIZE: u32 = 100;

/// Derived parameters for a row-oriented analytics query.
///
/// Invariants: `dimensions` never contains the raw `pe` or `ou` tokens
/// (those travel as `period` and `org_unit`), and every data-element token
/// is stage-qualified as `<stageId>.<dataElementId>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsQueryParams {
    pub program: String,
    pub stage: Option<String>,
    pub org_unit: String,
    pub period: String,
    pub dimensions: Vec<String>,
    pub page_size: u32,
    pub page: u32,
}

impl AnalyticsQueryParams {
    /// Override the fetch page. Zero is clamped to the first page.
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Override the fetch page size. Zero is clamped to one row.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Resource path for the analytics endpoint serving the given output
    /// type: events and enrollments live under separate query resources.
    pub fn resource_path(&self, output_type: OutputType) -> String {
        match output_type {
            OutputType::Event => format!("analytics/events/query/{}", self.program),
            OutputType::Enrollment => format!("analytics/enrollments/query/{}", self.program),
        }
    }

    /// Ordered key/value pairs for the fetch collaborator's query string.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.dimensions.len() + 5);
        pairs.push(("dimension".to_string(), format!("pe:{}", self.period)));
        pairs.push(("dimension".to_string(), format!("ou:{}", self.org_unit)));
        for token in &self.dimensions {
            pairs.push(("dimension".to_string(), token.clone()));
        }
        if let Some(stage) = &self.stage {
            pairs.push(("stage".to_string(), stage.clone()));
        }
        pairs.push(("pageSize".to_string(), self.page_size.to_string()));
        pairs.push(("page".to_string(), self.page.to_string()));
        pairs
    }
}
