//! Appointment Form
//!
//! Raw field values as typed by the visitor, validated into the request
//! body the backend accepts.

use chrono::NaiveDate;
use thiserror::Error;

use crate::copy;
use crate::models::AppointmentRequest;

/// Format of the `preferred_date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Select options: (value, label)
pub const SERVICE_TYPES: &[(&str, &str)] = &[
    ("", "请选择服务类型"),
    ("全案设计", "全案设计"),
    ("硬装设计", "硬装设计"),
    ("软装搭配", "软装搭配"),
    ("旧房翻新", "旧房翻新"),
];

pub const PROJECT_TYPES: &[(&str, &str)] = &[
    ("", "请选择项目类型"),
    ("住宅", "住宅"),
    ("别墅", "别墅"),
    ("商业空间", "商业空间"),
    ("办公空间", "办公空间"),
];

pub const BUDGET_RANGES: &[(&str, &str)] = &[
    ("", "预算范围（可选）"),
    ("10万以下", "10万以下"),
    ("10-30万", "10-30万"),
    ("30-50万", "30-50万"),
    ("50万以上", "50万以上"),
];

pub const PREFERRED_TIMES: &[(&str, &str)] = &[
    ("", "期望时段（可选）"),
    ("上午", "上午"),
    ("下午", "下午"),
    ("晚上", "晚上"),
];

/// Form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ClientName,
    ClientPhone,
    ClientEmail,
    ServiceType,
    ProjectType,
    BudgetRange,
    PreferredDate,
    PreferredTime,
    Message,
}

/// Current contents of the appointment form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentForm {
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
    pub service_type: String,
    pub project_type: String,
    pub budget_range: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("请填写您的姓名")]
    MissingName,
    #[error("请填写联系电话")]
    MissingPhone,
    #[error("日期格式应为 YYYY-MM-DD: {0}")]
    InvalidDate(String),
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Free text goes out as typed; only an all-blank value is dropped
fn verbatim(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}

impl AppointmentForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::ClientName => &self.client_name,
            FormField::ClientPhone => &self.client_phone,
            FormField::ClientEmail => &self.client_email,
            FormField::ServiceType => &self.service_type,
            FormField::ProjectType => &self.project_type,
            FormField::BudgetRange => &self.budget_range,
            FormField::PreferredDate => &self.preferred_date,
            FormField::PreferredTime => &self.preferred_time,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::ClientName => &mut self.client_name,
            FormField::ClientPhone => &mut self.client_phone,
            FormField::ClientEmail => &mut self.client_email,
            FormField::ServiceType => &mut self.service_type,
            FormField::ProjectType => &mut self.project_type,
            FormField::BudgetRange => &mut self.budget_range,
            FormField::PreferredDate => &mut self.preferred_date,
            FormField::PreferredTime => &mut self.preferred_time,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Validate the way the backend does: name and phone required, date
    /// (when present) in `YYYY-MM-DD`. Blank optionals are dropped.
    pub fn to_request(&self) -> Result<AppointmentRequest, FormError> {
        let client_name = optional(&self.client_name).ok_or(FormError::MissingName)?;
        let client_phone = optional(&self.client_phone).ok_or(FormError::MissingPhone)?;
        let preferred_date = optional(&self.preferred_date)
            .map(|raw| {
                NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|_| FormError::InvalidDate(raw))
            })
            .transpose()?;

        Ok(AppointmentRequest {
            client_name,
            client_phone,
            client_email: optional(&self.client_email),
            service_type: optional(&self.service_type),
            project_type: optional(&self.project_type),
            budget_range: optional(&self.budget_range),
            preferred_date,
            preferred_time: optional(&self.preferred_time),
            message: verbatim(&self.message),
        })
    }
}

/// Why a submission did not go through, as shown to the visitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailure {
    /// Caught before sending
    Invalid(FormError),
    /// Backend answered non-2xx, with its `error` message if it sent one
    Rejected(Option<String>),
    /// Request never got an answer
    Network,
}

impl SubmitFailure {
    pub fn alert_text(&self) -> String {
        match self {
            SubmitFailure::Invalid(err) => copy::submit_failed(&err.to_string()),
            SubmitFailure::Rejected(Some(message)) if !message.trim().is_empty() => {
                copy::submit_failed(message)
            }
            SubmitFailure::Rejected(_) => copy::submit_failed(copy::SUBMIT_RETRY_LATER),
            SubmitFailure::Network => copy::SUBMIT_NETWORK_FAILED.to_string(),
        }
    }
}
