//! Activity event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Actor marker for events not attributable to a directory account.
///
/// Invariant: every `ActivityEvent.actor` is either this marker or a key
/// present in the user directory. Attempted usernames from failed logins go
/// into `details`, never into `actor`.
pub const ANONYMOUS: &str = "anonymous";

/// Observable action tags recorded in the activity log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    HomepageVisit,
    LoginAttempt,
    SuccessfulLogin,
    FailedLogin,
    Logout,
    DashboardAccess,
    AdminDashboardAccess,
    CatalogSearch,
    ContactFormSubmission,
    AboutPageVisit,
    ProfileAccess,
    PageNotFound,
    InternalError,
}

impl ActivityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::HomepageVisit => "homepage_visit",
            ActivityAction::LoginAttempt => "login_attempt",
            ActivityAction::SuccessfulLogin => "successful_login",
            ActivityAction::FailedLogin => "failed_login",
            ActivityAction::Logout => "logout",
            ActivityAction::DashboardAccess => "dashboard_access",
            ActivityAction::AdminDashboardAccess => "admin_dashboard_access",
            ActivityAction::CatalogSearch => "catalog_search",
            ActivityAction::ContactFormSubmission => "contact_form_submission",
            ActivityAction::AboutPageVisit => "about_page_visit",
            ActivityAction::ProfileAccess => "profile_access",
            ActivityAction::PageNotFound => "page_not_found",
            ActivityAction::InternalError => "internal_error",
        }
    }
}

impl std::fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable record of one observable action
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ActivityEvent {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub action: ActivityAction,
    /// Directory key of the acting user, or [`ANONYMOUS`]
    pub actor: String,
    /// Contextual payload (searched query, attempted username, failing URL)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
    /// Client origin address
    pub origin: String,
}

impl ActivityEvent {
    pub fn new(
        action: ActivityAction,
        actor: Option<&str>,
        details: Option<serde_json::Value>,
        origin: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            action,
            actor: actor.unwrap_or(ANONYMOUS).to_string(),
            details,
            origin: origin.to_string(),
        }
    }
}
