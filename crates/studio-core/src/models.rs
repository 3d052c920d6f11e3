//! API Models
//!
//! Records exchanged with the studio backend. Anything the page can render
//! without is optional; fallbacks live in `display`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Service offering (`GET /services`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub price_range: Option<String>,
    pub duration: Option<String>,
    pub icon: Option<String>,
}

/// Portfolio case. The list endpoint and `GET /cases/{id}` share this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignCase {
    pub id: u32,
    pub title: String,
    pub description: Option<String>,
    pub style: Option<String>,
    pub area: Option<f64>,
    pub budget: Option<f64>,
    /// Construction time in days
    pub duration: Option<u32>,
    pub location: Option<String>,
    pub cover_image: Option<String>,
    pub images: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub status: Option<String>,
}

/// One page of `GET /cases`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CasePage {
    #[serde(default)]
    pub cases: Vec<DesignCase>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default = "first_page")]
    pub current_page: u32,
}

fn first_page() -> u32 {
    1
}

impl CasePage {
    /// Whether another page exists after this one
    pub fn has_more(&self) -> bool {
        self.current_page < self.pages
    }
}

/// Account fields nested in a designer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignerUser {
    pub full_name: Option<String>,
}

/// Designer profile (`GET /designers`, `GET /designers/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Designer {
    pub id: u32,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub experience_years: Option<u32>,
    pub specialization: Option<Vec<String>>,
    /// 0-5, half-star steps
    pub rating: Option<f64>,
    pub portfolio_images: Option<Vec<String>>,
    pub user: Option<DesignerUser>,
}

/// Body of `POST /appointments`. Unset optionals are left out of the JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentRequest {
    pub client_name: String,
    pub client_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error payload the backend sends with non-2xx responses
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<String>,
}
