//! Landing, about and profile endpoints

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        activity::{ActivityAction, ActivityEvent},
        user::UserPublic,
    },
    store::counters::CountersSnapshot,
};

use super::{AuthenticatedUser, ClientAddr};

/// Landing page aggregates
#[derive(Serialize, ToSchema)]
pub struct HomeSummary {
    pub total_books: usize,
    pub available_books: usize,
    pub total_categories: usize,
    pub total_users: usize,
    pub system_stats: CountersSnapshot,
}

#[derive(Serialize, ToSchema)]
pub struct SystemInfo {
    pub version: String,
    pub build_date: &'static str,
    pub supported_formats: Vec<&'static str>,
    pub security_level: &'static str,
}

/// Per-user activity summary for the profile page
#[derive(Serialize, ToSchema)]
pub struct ProfileStats {
    pub total_activities: usize,
    pub login_count: usize,
    pub search_count: usize,
    pub last_activity: Option<DateTime<Utc>>,
}

#[derive(Serialize, ToSchema)]
pub struct ProfileView {
    pub user: UserPublic,
    pub stats: ProfileStats,
}

/// Landing page; every visit counts
#[utoipa::path(
    get,
    path = "/",
    tag = "pages",
    responses(
        (status = 200, description = "Landing page aggregates", body = HomeSummary)
    )
)]
pub async fn home(
    State(state): State<crate::AppState>,
    session: Option<AuthenticatedUser>,
    ClientAddr(origin): ClientAddr,
) -> Json<HomeSummary> {
    state.stores.counters.record_visit();
    state.stores.activity.record(ActivityEvent::new(
        ActivityAction::HomepageVisit,
        session.as_ref().map(|s| s.0.sub.as_str()),
        None,
        &origin,
    ));
    Json(state.services.stats.home())
}

/// System information page
#[utoipa::path(
    get,
    path = "/about",
    tag = "pages",
    responses(
        (status = 200, description = "System information", body = SystemInfo)
    )
)]
pub async fn about(
    State(state): State<crate::AppState>,
    session: Option<AuthenticatedUser>,
    ClientAddr(origin): ClientAddr,
) -> Json<SystemInfo> {
    state.stores.activity.record(ActivityEvent::new(
        ActivityAction::AboutPageVisit,
        session.as_ref().map(|s| s.0.sub.as_str()),
        None,
        &origin,
    ));
    Json(SystemInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        build_date: "2025-10-15",
        supported_formats: vec!["PDF", "EPUB", "MOBI", "HTML"],
        security_level: "Enterprise Grade",
    })
}

/// Session-scoped profile with activity summary
#[utoipa::path(
    get,
    path = "/profile",
    tag = "pages",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile and activity summary", body = ProfileView),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn profile(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ClientAddr(origin): ClientAddr,
) -> AppResult<Json<ProfileView>> {
    let user = state.services.auth.current_user(&claims)?;
    let stats = state.services.stats.profile(&claims.sub);
    state.stores.activity.record(ActivityEvent::new(
        ActivityAction::ProfileAccess,
        Some(&claims.sub),
        None,
        &origin,
    ));
    Ok(Json(ProfileView { user, stats }))
}
