//! Atheneum Library Management System
//!
//! A Rust implementation of the Atheneum library management server: login,
//! a filterable book catalog, contact-inquiry intake, dashboards and JSON
//! status endpoints, backed entirely by explicit in-memory stores.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub stores: store::Stores,
}
