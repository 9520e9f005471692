//! Derives analytics query parameters from a report definition.
//!
//! Dimension construction follows a strict precedence: the typed attribute
//! and data-element dimension lists (concatenated, attributes first) win
//! whenever either is non-empty; the raw column-dimension tokens are a
//! fallback consulted only when both typed lists produced nothing.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use evr_model::ReportDefinition;

use crate::params::{AnalyticsQueryParams, DEFAULT_QUERY_PAGE_SIZE, USER_ORG_UNIT};

/// Derive analytics query parameters from a report definition.
///
/// Returns `None` when the report has no usable program id; the caller
/// must treat that as "cannot query" and show an empty state.
pub fn derive(report: &ReportDefinition) -> Option<AnalyticsQueryParams> {
    derive_with_attributes(report, &BTreeSet::new())
}

/// Like [`derive`], with a set of known tracked-entity attribute ids used
/// to classify raw column-dimension tokens on the fallback path.
pub fn derive_with_attributes(
    report: &ReportDefinition,
    known_attributes: &BTreeSet<String>,
) -> Option<AnalyticsQueryParams> {
    let Some(program_id) = report.program_id() else {
        warn!(report = %report.id, "report has no program id, cannot derive query");
        return None;
    };

    let org_unit = report
        .organisation_units
        .first()
        .map(|ou| ou.id.clone())
        .unwrap_or_else(|| USER_ORG_UNIT.to_string());

    let period = report.relative_periods.selected().code().to_string();

    let mut dimensions = typed_dimensions(report);
    if dimensions.is_empty() {
        dimensions = fallback_dimensions(report, known_attributes);
    }
    debug!(
        report = %report.id,
        dimension_count = dimensions.len(),
        %org_unit,
        %period,
        "derived analytics query"
    );

    Some(AnalyticsQueryParams {
        program: program_id.to_string(),
        stage: report.stage_id().map(String::from),
        org_unit,
        period,
        dimensions,
        page_size: DEFAULT_QUERY_PAGE_SIZE,
        page: 1,
    })
}

/// Attribute tokens (bare ids, input order) followed by stage-qualified
/// data-element tokens.
fn typed_dimensions(report: &ReportDefinition) -> Vec<String> {
    let mut tokens = Vec::new();
    for dim in &report.attribute_dimensions {
        tokens.push(dim.attribute.id.clone());
    }
    for dim in &report.data_element_dimensions {
        let stage = dim
            .program_stage
            .as_ref()
            .map(|s| s.id.as_str())
            .or_else(|| report.stage_id());
        match stage {
            Some(stage) => tokens.push(format!("{stage}.{}", dim.data_element.id)),
            None => {
                // The stage-qualified invariant cannot hold for this entry.
                warn!(
                    report = %report.id,
                    data_element = %dim.data_element.id,
                    "dropping data element dimension with no stage"
                );
            }
        }
    }
    tokens
}

/// Raw column-dimension tokens, consulted only when the typed lists are
/// empty: period/org-unit axes are dropped, dotted tokens pass through,
/// known attribute ids stay bare, everything else is assumed to be a data
/// element and gets stage-qualified.
fn fallback_dimensions(
    report: &ReportDefinition,
    known_attributes: &BTreeSet<String>,
) -> Vec<String> {
    let stage = report.stage_id();
    let mut tokens = Vec::new();
    for raw in &report.column_dimensions {
        let token = raw.trim();
        if token.is_empty() || token == "pe" || token == "ou" {
            continue;
        }
        if token.contains('.') {
            tokens.push(token.to_string());
        } else if known_attributes.contains(token) {
            tokens.push(token.to_string());
        } else if let Some(stage) = stage {
            tokens.push(format!("{stage}.{token}"));
        }
        // Unqualifiable data-element tokens are dropped silently.
    }
    tokens
}
