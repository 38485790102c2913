//! Atheneum Server - Library Management System
//!
//! A modern Rust web server for a demonstration library management system.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atheneum_server::{api, config::AppConfig, services::Services, store::Stores, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("atheneum_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Atheneum Server v{}", env!("CARGO_PKG_VERSION"));

    // Seed the in-memory stores
    let stores = Stores::new(&config.activity).expect("Failed to seed stores");
    tracing::info!(
        "Seeded in-memory stores: {} accounts, {} catalog records",
        stores.directory.len(),
        stores.catalog.len()
    );
    tracing::info!("Demo accounts: admin, librarian, student, faculty, researcher");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create services
    let services = Services::new(stores.clone(), config.auth.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
        stores,
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Per-client rate limit on credential submission
    let governor_conf = Box::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Invalid rate limiter configuration"),
    );
    let login = Router::new()
        .route("/login", post(api::auth::login))
        .layer(GovernorLayer {
            config: Box::leak(governor_conf),
        });

    Router::new()
        .route("/", get(api::pages::home))
        .route("/logout", get(api::auth::logout))
        .route("/dashboard", get(api::dashboard::dashboard))
        .route("/admin-dashboard", get(api::dashboard::admin_dashboard))
        .route(
            "/catalog",
            get(api::catalog::list_catalog).post(api::catalog::search_catalog),
        )
        .route(
            "/contact",
            get(api::contact::contact_form).post(api::contact::submit_contact),
        )
        .route("/about", get(api::pages::about))
        .route("/profile", get(api::pages::profile))
        .route("/api/system-status", get(api::system::system_status))
        .route("/api/books", get(api::system::books))
        .route("/api/health", get(api::health::health_check))
        .merge(login)
        .fallback(api::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::track_internal_faults,
        ))
        .with_state(state)
        .merge(api::openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
