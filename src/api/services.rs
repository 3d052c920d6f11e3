//! Service Endpoints

use studio_core::config::AppConfig;
use studio_core::models::Service;

use super::{get_json, ApiError};

pub async fn list_services(config: &AppConfig) -> Result<Vec<Service>, ApiError> {
    get_json(&config.endpoint("services")).await
}
