//! App Configuration
//!
//! Compile-time defaults plus optional runtime overrides.

use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_CASES_PER_PAGE: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend API root, e.g. `https://studio.example.com/api`
    pub api_base_url: String,
    pub cases_per_page: u32,
}

impl Default for AppConfig {
    /// Base URL comes from `DECOR_STUDIO_API_BASE` at build time when set
    fn default() -> Self {
        Self {
            api_base_url: option_env!("DECOR_STUDIO_API_BASE")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            cases_per_page: DEFAULT_CASES_PER_PAGE,
        }
    }
}

/// Fields a page may override at runtime (camelCase, as written in JS)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub cases_per_page: Option<u32>,
}

impl AppConfig {
    /// Apply overrides; blank URLs and a zero page size are ignored.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.api_base_url.filter(|url| !url.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(per_page) = overrides.cases_per_page.filter(|n| *n > 0) {
            self.cases_per_page = per_page;
        }
        self
    }

    /// Absolute URL for an API path
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
