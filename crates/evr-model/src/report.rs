//! Report definitions as supplied by the report catalog.
//!
//! A [`ReportDefinition`] is a read-only analytics query template: it names
//! the program and stage to query, which dimensions become table columns,
//! the organisation unit scope, and the relative reporting period. The core
//! never mutates a definition.

use serde::{Deserialize, Serialize};

use crate::enums::{OutputType, ProgramType, RelativePeriods};

/// A bare object reference, as the catalog nests them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ref {
    pub id: String,
}

impl Ref {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// The program a report queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub program_type: ProgramType,
}

/// A tracked-entity attribute used as a table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDimension {
    pub attribute: Ref,
}

/// A data element used as a table column.
///
/// The stage is optional; entries without one inherit the report's
/// program stage when the query is derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataElementDimension {
    pub data_element: Ref,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_stage: Option<Ref>,
}

/// An analytics query template from the report catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportDefinition {
    pub id: String,
    pub name: String,
    /// Absent program is a fatal precondition: no query can be derived.
    pub program: Option<Program>,
    pub program_stage: Option<Ref>,
    pub output_type: OutputType,
    pub attribute_dimensions: Vec<AttributeDimension>,
    pub data_element_dimensions: Vec<DataElementDimension>,
    /// Raw dimension tokens, consulted only when both typed dimension
    /// lists are empty.
    pub column_dimensions: Vec<String>,
    pub organisation_units: Vec<Ref>,
    pub relative_periods: RelativePeriods,
}

impl Default for ReportDefinition {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            program: None,
            program_stage: None,
            output_type: OutputType::default(),
            attribute_dimensions: Vec::new(),
            data_element_dimensions: Vec::new(),
            column_dimensions: Vec::new(),
            organisation_units: Vec::new(),
            relative_periods: RelativePeriods::default(),
        }
    }
}

impl ReportDefinition {
    /// Program id when present and non-blank.
    pub fn program_id(&self) -> Option<&str> {
        self.program
            .as_ref()
            .map(|p| p.id.trim())
            .filter(|id| !id.is_empty())
    }

    /// Program type, defaulting to event-style when the program is absent.
    pub fn program_type(&self) -> ProgramType {
        self.program
            .as_ref()
            .map(|p| p.program_type)
            .unwrap_or(ProgramType::WithoutRegistration)
    }

    /// Stage id of the report-level program stage, if any.
    pub fn stage_id(&self) -> Option<&str> {
        self.program_stage.as_ref().map(|r| r.id.as_str())
    }
}
