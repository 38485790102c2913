//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, catalog, contact, dashboard, health, pages, system};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Atheneum API",
        version = "2.0.0",
        description = "Library Management System API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Pages
        pages::home,
        pages::about,
        pages::profile,
        // Auth
        auth::login,
        auth::logout,
        // Catalog
        catalog::list_catalog,
        catalog::search_catalog,
        // Contact
        contact::contact_form,
        contact::submit_contact,
        // Dashboards
        dashboard::dashboard,
        dashboard::admin_dashboard,
        // System
        system::system_status,
        system::books,
        // Health
        health::health_check,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::LogoutResponse,
            crate::models::user::UserPublic,
            crate::models::user::AccessLevel,
            // Catalog
            crate::models::book::BookRecord,
            crate::models::book::CatalogFilter,
            crate::models::book::Availability,
            catalog::CatalogView,
            // Contact
            crate::models::inquiry::SubmitInquiry,
            crate::models::inquiry::InquiryRecord,
            crate::models::inquiry::Priority,
            contact::ContactFormView,
            contact::InquiryResponse,
            // Activity
            crate::models::activity::ActivityEvent,
            crate::models::activity::ActivityAction,
            // Dashboards
            dashboard::DashboardView,
            dashboard::AdminDashboardView,
            // Pages
            pages::HomeSummary,
            pages::SystemInfo,
            pages::ProfileStats,
            pages::ProfileView,
            // System
            system::CatalogStatus,
            system::DirectoryStatus,
            system::SystemStatusResponse,
            system::BooksResponse,
            crate::store::counters::CountersSnapshot,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "pages", description = "Landing and informational pages"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "catalog", description = "Book catalog"),
        (name = "contact", description = "Contact inquiries"),
        (name = "dashboard", description = "User and administrative dashboards"),
        (name = "system", description = "JSON status endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
