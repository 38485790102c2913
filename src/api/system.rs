//! JSON status endpoints

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    models::{book::BookRecord, user::AccessLevel},
    store::counters::CountersSnapshot,
};

#[derive(Serialize, ToSchema)]
pub struct CatalogStatus {
    pub total_books: usize,
    pub available_books: usize,
    pub total_categories: usize,
}

#[derive(Serialize, ToSchema)]
pub struct DirectoryStatus {
    pub total_members: usize,
    /// Members that have logged in at least once
    pub active_members: usize,
    pub access_levels: Vec<AccessLevel>,
}

#[derive(Serialize, ToSchema)]
pub struct SystemStatusResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub system_health: String,
    pub database: CatalogStatus,
    pub users: DirectoryStatus,
    pub activity: CountersSnapshot,
}

#[derive(Serialize, ToSchema)]
pub struct BooksResponse {
    pub books: Vec<BookRecord>,
    pub total_count: usize,
    pub available_count: usize,
    pub categories: Vec<String>,
}

/// Comprehensive system status
#[utoipa::path(
    get,
    path = "/api/system-status",
    tag = "system",
    responses(
        (status = 200, description = "System status", body = SystemStatusResponse)
    )
)]
pub async fn system_status(State(state): State<crate::AppState>) -> Json<SystemStatusResponse> {
    Json(state.services.stats.system_status())
}

/// Catalog dump for API consumers; does not count as a search query
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "system",
    responses(
        (status = 200, description = "Book data", body = BooksResponse)
    )
)]
pub async fn books(State(state): State<crate::AppState>) -> Json<BooksResponse> {
    Json(state.services.stats.books())
}
