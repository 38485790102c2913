//! Catalog endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::book::{BookRecord, CatalogFilter};

use super::{AuthenticatedUser, ClientAddr};

/// Catalog listing with the filter vocabulary and the applied filter echoed
/// back for the caller's form state.
#[derive(Serialize, ToSchema)]
pub struct CatalogView {
    pub books: Vec<BookRecord>,
    pub total: usize,
    /// Sorted distinct category labels
    pub categories: Vec<String>,
    pub search_query: String,
    pub selected_category: String,
}

fn view(books: Vec<BookRecord>, categories: Vec<String>, filter: &CatalogFilter) -> CatalogView {
    CatalogView {
        total: books.len(),
        books,
        categories,
        search_query: filter.search.clone().unwrap_or_default(),
        selected_category: filter.category.clone().unwrap_or_default(),
    }
}

/// Browse the catalog. Direct access: filters from the query string apply
/// but do not count as a search query.
#[utoipa::path(
    get,
    path = "/catalog",
    tag = "catalog",
    params(CatalogFilter),
    responses(
        (status = 200, description = "Catalog listing", body = CatalogView)
    )
)]
pub async fn list_catalog(
    State(state): State<crate::AppState>,
    Query(filter): Query<CatalogFilter>,
) -> Json<CatalogView> {
    let books = state.services.catalog.search(&filter);
    Json(view(books, state.services.catalog.categories(), &filter))
}

/// Search the catalog through the search form: bumps the search counter and
/// records a `catalog_search` event.
#[utoipa::path(
    post,
    path = "/catalog",
    tag = "catalog",
    request_body = CatalogFilter,
    responses(
        (status = 200, description = "Filtered catalog listing", body = CatalogView)
    )
)]
pub async fn search_catalog(
    State(state): State<crate::AppState>,
    session: Option<AuthenticatedUser>,
    ClientAddr(origin): ClientAddr,
    Json(filter): Json<CatalogFilter>,
) -> Json<CatalogView> {
    let actor = session.as_ref().map(|s| s.0.sub.as_str());
    let books = state.services.catalog.search_form(&filter, actor, &origin);
    Json(view(books, state.services.catalog.categories(), &filter))
}
