//! Dashboard and status aggregation service
//!
//! Everything here is recomputed from the live stores on each request; no
//! caching, no staleness. Scans are linear and fine at this catalog size.

use chrono::Utc;

use crate::{
    api::{
        dashboard::{AdminDashboardView, DashboardView},
        pages::{HomeSummary, ProfileStats},
        system::{BooksResponse, CatalogStatus, DirectoryStatus, SystemStatusResponse},
    },
    error::AppResult,
    models::{activity::ActivityAction, user::SessionClaims},
    store::Stores,
};

#[derive(Clone)]
pub struct StatsService {
    stores: Stores,
}

impl StatsService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    /// Landing page aggregates
    pub fn home(&self) -> HomeSummary {
        HomeSummary {
            total_books: self.stores.catalog.len(),
            available_books: self.stores.catalog.available_count(),
            total_categories: self.stores.catalog.categories().len(),
            total_users: self.stores.directory.len(),
            system_stats: self.stores.counters.snapshot(),
        }
    }

    /// Per-user dashboard
    pub fn dashboard(&self, claims: &SessionClaims) -> AppResult<DashboardView> {
        let account = self.stores.directory.get(&claims.sub);
        let catalog = &self.stores.catalog;
        Ok(DashboardView {
            username: claims.sub.clone(),
            total_books: catalog.len(),
            available_books: catalog.available_count(),
            borrowed_books: catalog.len() - catalog.available_count(),
            total_members: self.stores.directory.len(),
            categories: catalog.categories().len(),
            user_role: claims.role.clone(),
            access_level: claims.access_level,
            login_time: claims.login_time,
            last_login: account.and_then(|a| a.last_login),
            user_activity_count: self.stores.activity.count_for(&claims.sub),
            recent_books: catalog.first(4),
        })
    }

    /// Administrative dashboard for elevated sessions
    pub fn admin_dashboard(&self) -> AdminDashboardView {
        AdminDashboardView {
            total_activities: self.stores.activity.len(),
            recent_activities: self.stores.activity.recent(10),
            system_health: "optimal".to_string(),
            active_sessions: self.stores.directory.active_count(),
            system_stats: self.stores.counters.snapshot(),
        }
    }

    /// Activity summary shown on the profile page
    pub fn profile(&self, username: &str) -> ProfileStats {
        ProfileStats {
            total_activities: self.stores.activity.count_for(username),
            login_count: self
                .stores
                .activity
                .count_by_action(username, ActivityAction::SuccessfulLogin),
            search_count: self
                .stores
                .activity
                .count_by_action(username, ActivityAction::CatalogSearch),
            last_activity: self.stores.activity.last_activity_for(username),
        }
    }

    /// JSON system-status aggregate
    pub fn system_status(&self) -> SystemStatusResponse {
        SystemStatusResponse {
            status: "operational".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            system_health: "optimal".to_string(),
            database: CatalogStatus {
                total_books: self.stores.catalog.len(),
                available_books: self.stores.catalog.available_count(),
                total_categories: self.stores.catalog.categories().len(),
            },
            users: DirectoryStatus {
                total_members: self.stores.directory.len(),
                active_members: self.stores.directory.active_count(),
                access_levels: self.stores.directory.access_levels(),
            },
            activity: self.stores.counters.snapshot(),
        }
    }

    /// JSON catalog dump
    pub fn books(&self) -> BooksResponse {
        BooksResponse {
            books: self.stores.catalog.all(),
            total_count: self.stores.catalog.len(),
            available_count: self.stores.catalog.available_count(),
            categories: self.stores.catalog.categories(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ActivityConfig;
    use crate::models::activity::ActivityEvent;
    use crate::models::user::AccessLevel;

    fn service() -> (StatsService, Stores) {
        let stores = Stores::new(&ActivityConfig { capacity: 64 }).unwrap();
        (StatsService::new(stores.clone()), stores)
    }

    fn claims_for(stores: &Stores, username: &str) -> SessionClaims {
        let account = stores.directory.get(username).unwrap();
        let now = Utc::now();
        SessionClaims {
            sub: account.username,
            name: account.name,
            role: account.role,
            access_level: account.access_level,
            login_time: now,
            extended: false,
            iat: now.timestamp(),
            exp: now.timestamp() + 3600,
        }
    }

    #[test]
    fn home_summary_reflects_seed_data() {
        let (stats, _) = service();
        let home = stats.home();
        assert_eq!(home.total_books, 8);
        assert_eq!(home.available_books, 5);
        assert_eq!(home.total_categories, 8);
        assert_eq!(home.total_users, 5);
    }

    #[test]
    fn dashboard_counts_only_the_callers_activity() {
        let (stats, stores) = service();
        stores.activity.record(ActivityEvent::new(
            ActivityAction::CatalogSearch,
            Some("student"),
            None,
            "127.0.0.1",
        ));
        stores.activity.record(ActivityEvent::new(
            ActivityAction::CatalogSearch,
            Some("faculty"),
            None,
            "127.0.0.1",
        ));

        let view = stats.dashboard(&claims_for(&stores, "student")).unwrap();
        assert_eq!(view.user_activity_count, 1);
        assert_eq!(view.borrowed_books, 3);
        assert_eq!(view.recent_books.len(), 4);
        assert_eq!(view.access_level, AccessLevel::Standard);
    }

    #[test]
    fn admin_dashboard_shows_the_event_tail() {
        let (stats, stores) = service();
        for _ in 0..12 {
            stores.activity.record(ActivityEvent::new(
                ActivityAction::HomepageVisit,
                None,
                None,
                "127.0.0.1",
            ));
        }
        let view = stats.admin_dashboard();
        assert_eq!(view.total_activities, 12);
        assert_eq!(view.recent_activities.len(), 10);
        assert_eq!(view.system_health, "optimal");
    }

    #[test]
    fn profile_breaks_activity_down_by_action() {
        let (stats, stores) = service();
        stores.activity.record(ActivityEvent::new(
            ActivityAction::SuccessfulLogin,
            Some("faculty"),
            None,
            "127.0.0.1",
        ));
        stores.activity.record(ActivityEvent::new(
            ActivityAction::CatalogSearch,
            Some("faculty"),
            None,
            "127.0.0.1",
        ));

        let profile = stats.profile("faculty");
        assert_eq!(profile.total_activities, 2);
        assert_eq!(profile.login_count, 1);
        assert_eq!(profile.search_count, 1);
        assert!(profile.last_activity.is_some());

        let empty = stats.profile("librarian");
        assert_eq!(empty.total_activities, 0);
        assert!(empty.last_activity.is_none());
    }

    #[test]
    fn system_status_lists_every_access_level() {
        let (stats, _) = service();
        let status = stats.system_status();
        assert_eq!(status.status, "operational");
        assert_eq!(status.users.total_members, 5);
        assert_eq!(status.users.access_levels.len(), 5);
        assert_eq!(status.database.total_books, 8);
    }
}
