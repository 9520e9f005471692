//! Interfaces to the external report catalog and analytics fetch service.
//!
//! The core owns no network code; both collaborators are trait seams the
//! host application implements against its own transport.

use serde::{Deserialize, Serialize};

use evr_model::{OutputType, Pager, Result, ResultTable};

use crate::params::AnalyticsQueryParams;

/// Read-only lookup of report definitions by id.
pub trait ReportCatalog {
    /// Fetch a report definition. `Ok(None)` means not found, which the
    /// caller surfaces as an empty state rather than an error.
    fn report(&self, id: &str) -> Result<Option<evr_model::ReportDefinition>>;
}

/// A page of analytics rows plus pager metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub table: ResultTable,
    pub pager: Pager,
}

/// Row-oriented analytics fetch service.
pub trait AnalyticsService {
    /// Execute a query against the resource selected by `output_type`,
    /// requesting the given page.
    fn query(
        &self,
        params: &AnalyticsQueryParams,
        output_type: OutputType,
        page: u32,
    ) -> Result<AnalyticsResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use evr_model::{Cell, EvrError, ReportDefinition};
    use std::collections::BTreeMap;

    struct MapCatalog(BTreeMap<String, ReportDefinition>);

    impl ReportCatalog for MapCatalog {
        fn report(&self, id: &str) -> Result<Option<ReportDefinition>> {
            Ok(self.0.get(id).cloned())
        }
    }

    struct FixedService(AnalyticsResponse);

    impl AnalyticsService for FixedService {
        fn query(
            &self,
            _params: &AnalyticsQueryParams,
            _output_type: OutputType,
            page: u32,
        ) -> Result<AnalyticsResponse> {
            if page == 0 {
                return Err(EvrError::InvalidPaging {
                    name: "page",
                    value: page,
                });
            }
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_catalog_not_found_is_ok_none() {
        let catalog = MapCatalog(BTreeMap::new());
        assert!(catalog.report("missing").unwrap().is_none());
    }

    #[test]
    fn test_service_returns_table_and_pager() {
        let table = ResultTable::new(
            vec!["Event".to_string()],
            vec![vec![Cell::text("V1CerIi3sdL")]],
        )
        .unwrap();
        let response = AnalyticsResponse {
            table,
            pager: Pager::from_total(1, 100, 1),
        };
        let service = FixedService(response.clone());
        let params = AnalyticsQueryParams {
            program: "eBAyeGv0exc".to_string(),
            stage: None,
            org_unit: "USER_ORGUNIT".to_string(),
            period: "LAST_12_MONTHS".to_string(),
            dimensions: vec![],
            page_size: 100,
            page: 1,
        };
        let got = service.query(&params, OutputType::Event, 1).unwrap();
        assert_eq!(got, response);
    }
}
