//! Case Endpoints
//!
//! Paginated portfolio listing and single-case lookup.

use studio_core::config::AppConfig;
use studio_core::models::{CasePage, DesignCase};
use studio_core::query::CaseQuery;

use super::{get_json, ApiError};

/// One page of cases for the given page/filter
pub async fn list_cases(config: &AppConfig, query: &CaseQuery) -> Result<CasePage, ApiError> {
    let url = format!("{}?{}", config.endpoint("cases"), query.to_query_string());
    get_json(&url).await
}

pub async fn get_case(config: &AppConfig, id: u32) -> Result<DesignCase, ApiError> {
    get_json(&config.endpoint(&format!("cases/{id}"))).await
}
