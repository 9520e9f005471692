//! Deep links from table rows into the capture applications.

use serde::{Deserialize, Serialize};

use evr_model::{ActionCell, OutputType, ProgramType};

/// URL templates for the two capture applications.
///
/// Placeholders: `{program}`, `{orgUnit}`, `{trackedEntity}` in the
/// tracker template and `{program}`, `{orgUnit}`, `{event}` in the event
/// template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkTemplates {
    pub tracker_capture: String,
    pub event_capture: String,
}

impl Default for LinkTemplates {
    fn default() -> Self {
        Self {
            tracker_capture:
                "/dhis-web-tracker-capture/index.html#/dashboard?tei={trackedEntity}&program={program}&ou={orgUnit}"
                    .to_string(),
            event_capture:
                "/dhis-web-capture/index.html#/viewEvent?viewEvent={event}&program={program}&ou={orgUnit}"
                    .to_string(),
        }
    }
}

/// Build the capture-application link for one row.
///
/// Registration-based programs and enrollment output prefer the tracker
/// template when the row carries a tracked entity id; otherwise the event
/// template is used when an event id is present. Rows with neither id get
/// no link.
pub fn capture_link(
    action: &ActionCell,
    program: &str,
    program_type: ProgramType,
    templates: &LinkTemplates,
) -> Option<String> {
    let org_unit = action.org_unit.as_deref().unwrap_or("");
    let prefers_tracker =
        program_type.has_registration() || action.output_type == OutputType::Enrollment;

    if prefers_tracker {
        if let Some(tracked_entity) = action.tracked_entity.as_deref() {
            return Some(
                templates
                    .tracker_capture
                    .replace("{trackedEntity}", tracked_entity)
                    .replace("{program}", program)
                    .replace("{orgUnit}", org_unit),
            );
        }
    }
    action.event.as_deref().map(|event| {
        templates
            .event_capture
            .replace("{event}", event)
            .replace("{program}", program)
            .replace("{orgUnit}", org_unit)
    })
}
