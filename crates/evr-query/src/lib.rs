//! Analytics query parameter derivation for event reports.
//!
//! Translates a report definition's dimension, attribute, and data-element
//! metadata into the query parameters the analytics endpoint expects, and
//! defines the trait seams to the report catalog and fetch service.

pub mod derive;
pub mod params;
pub mod service;

pub use derive::{derive, derive_with_attributes};
pub use params::{AnalyticsQueryParams, DEFAULT_QUERY_PAGE_SIZE, USER_ORG_UNIT};
pub use service::{AnalyticsResponse, AnalyticsService, ReportCatalog};
