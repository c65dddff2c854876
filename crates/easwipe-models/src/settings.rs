//! Administrator-editable organisation settings.
//!
//! Each section is replaced whole through its own endpoint. The defaults are
//! the demo tenant's values.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct AppConfig {
    #[validate(length(min = 1, max = 120, message = "Organisation name is required"))]
    pub org_name: String,
    pub logo_url: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub timezone: String,
    #[validate(length(min = 1, max = 32))]
    pub date_format: String,
    /// ISO weekday numbers, Monday = 1.
    #[validate(custom(function = "validate_working_days"))]
    pub working_days: Vec<u8>,
}

fn validate_working_days(days: &[u8]) -> Result<(), validator::ValidationError> {
    if days.iter().any(|day| !(1..=7).contains(day)) {
        return Err(validator::ValidationError::new("working_days"));
    }
    Ok(())
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            org_name: "eaSwipe Academy".to_string(),
            logo_url: None,
            timezone: "UTC+5:30".to_string(),
            date_format: "DD/MM/YYYY".to_string(),
            working_days: vec![1, 2, 3, 4, 5],
        }
    }
}

/// Outgoing mail settings. Stored only; nothing is ever sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct EmailConfig {
    #[validate(length(min = 1, max = 255))]
    pub smtp_host: String,
    #[validate(range(min = 1, max = 65535))]
    pub smtp_port: u32,
    pub smtp_user: String,
    #[validate(email)]
    pub from_address: String,
    pub notifications_enabled: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "smtp.easwipe.com".to_string(),
            smtp_port: 587,
            smtp_user: "notifications@easwipe.com".to_string(),
            from_address: "no-reply@easwipe.com".to_string(),
            notifications_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct SecurityConfig {
    #[validate(range(min = 4, max = 128))]
    pub password_min_length: u32,
    #[validate(range(min = 1, max = 1440))]
    pub session_timeout_minutes: u32,
    pub require_mfa: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            password_min_length: 8,
            session_timeout_minutes: 60,
            require_mfa: false,
        }
    }
}

/// Which optional fields the public ID card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IdFieldConfig {
    pub show_department: bool,
    pub show_blood_group: bool,
    pub show_emergency_contact: bool,
    pub show_id_number: bool,
}

impl Default for IdFieldConfig {
    fn default() -> Self {
        Self {
            show_department: true,
            show_blood_group: true,
            show_emergency_contact: true,
            show_id_number: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct Settings {
    pub app: AppConfig,
    pub email: EmailConfig,
    pub security: SecurityConfig,
    pub id_card: IdFieldConfig,
}
