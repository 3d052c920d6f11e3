//! Designer Endpoints

use studio_core::config::AppConfig;
use studio_core::models::Designer;

use super::{get_json, ApiError};

pub async fn list_designers(config: &AppConfig) -> Result<Vec<Designer>, ApiError> {
    get_json(&config.endpoint("designers")).await
}

/// Full profile including portfolio images
pub async fn get_designer(config: &AppConfig, id: u32) -> Result<Designer, ApiError> {
    get_json(&config.endpoint(&format!("designers/{id}"))).await
}
