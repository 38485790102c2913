//! Contact inquiry model and validation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Inquiry priority; drives the promised response window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl Priority {
    /// Response-time SLA window. High priority promises the tighter window.
    pub fn response_window(&self) -> &'static str {
        match self {
            Priority::High => "12-24 hours",
            _ => "24-48 hours",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }
}

/// Contact form submission.
///
/// Length rules live on the derive; the email shape rule (must contain both
/// `@` and `.`) is checked alongside so the caller receives every violation
/// in one list.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SubmitInquiry {
    #[validate(length(min = 2, message = "Full name must be at least 2 characters."))]
    pub name: String,
    pub email: String,
    #[validate(length(min = 1, message = "Please select an inquiry type."))]
    pub inquiry_type: String,
    #[serde(default)]
    pub priority: Priority,
    #[validate(length(min = 15, message = "Message must be at least 15 characters long."))]
    pub message: String,
}

impl SubmitInquiry {
    /// Collect every violated rule. Never short-circuits: the caller can
    /// display all problems at once.
    pub fn field_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if let Err(validation) = self.validate() {
            for (_, field_errors) in validation.field_errors() {
                for error in field_errors {
                    if let Some(ref message) = error.message {
                        errors.push(message.to_string());
                    }
                }
            }
        }

        if !self.email.contains('@') || !self.email.contains('.') {
            errors.push("Please enter a valid email address.".to_string());
        }

        errors
    }
}

/// A received inquiry with assigned id and response-time promise
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InquiryRecord {
    /// Monotonically increasing
    pub id: u64,
    pub name: String,
    pub email: String,
    pub inquiry_type: String,
    pub priority: Priority,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Username of the submitting session, or the anonymous marker
    pub submitted_by: String,
    pub status: String,
    /// Promised response window derived from priority
    pub response_time: String,
}
