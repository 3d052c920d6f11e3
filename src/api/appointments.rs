//! Appointment Endpoint

use studio_core::config::AppConfig;
use studio_core::models::AppointmentRequest;

use super::{post_json, ApiError};

/// Submit a booking request. Any 2xx counts as accepted.
pub async fn create_appointment(
    config: &AppConfig,
    request: &AppointmentRequest,
) -> Result<(), ApiError> {
    post_json(&config.endpoint("appointments"), request).await
}
