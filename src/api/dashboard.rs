//! Dashboard endpoints

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        activity::{ActivityAction, ActivityEvent},
        book::BookRecord,
        user::AccessLevel,
    },
    store::counters::CountersSnapshot,
};

use super::{AuthenticatedUser, ClientAddr, ElevatedUser};

/// Per-user dashboard aggregate
#[derive(Serialize, ToSchema)]
pub struct DashboardView {
    pub username: String,
    pub total_books: usize,
    pub available_books: usize,
    pub borrowed_books: usize,
    pub total_members: usize,
    /// Number of distinct categories
    pub categories: usize,
    pub user_role: String,
    pub access_level: AccessLevel,
    pub login_time: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub user_activity_count: usize,
    pub recent_books: Vec<BookRecord>,
}

/// Administrative dashboard aggregate
#[derive(Serialize, ToSchema)]
pub struct AdminDashboardView {
    pub total_activities: usize,
    /// Last ten events, oldest first
    pub recent_activities: Vec<ActivityEvent>,
    pub system_health: String,
    /// Accounts that have logged in at least once
    pub active_sessions: usize,
    pub system_stats: CountersSnapshot,
}

/// Standard user dashboard
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard data", body = DashboardView),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn dashboard(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ClientAddr(origin): ClientAddr,
) -> AppResult<Json<DashboardView>> {
    let view = state.services.stats.dashboard(&claims)?;
    state.stores.activity.record(ActivityEvent::new(
        ActivityAction::DashboardAccess,
        Some(&claims.sub),
        None,
        &origin,
    ));
    Ok(Json(view))
}

/// Administrative dashboard, gated on the elevated set {full, high}
#[utoipa::path(
    get,
    path = "/admin-dashboard",
    tag = "dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Administrative dashboard data", body = AdminDashboardView),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Access level outside the elevated set")
    )
)]
pub async fn admin_dashboard(
    State(state): State<crate::AppState>,
    ElevatedUser(claims): ElevatedUser,
    ClientAddr(origin): ClientAddr,
) -> Json<AdminDashboardView> {
    let view = state.services.stats.admin_dashboard();
    state.stores.activity.record(ActivityEvent::new(
        ActivityAction::AdminDashboardAccess,
        Some(&claims.sub),
        None,
        &origin,
    ));
    Json(view)
}
