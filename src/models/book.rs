//! Book record model and catalog filters

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A catalog entry. Seed data is static; availability is never mutated
/// (there is no checkout/return flow).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookRecord {
    /// Unique, stable across the process lifetime
    pub id: u32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available: bool,
    pub category: String,
}

impl BookRecord {
    /// Case-insensitive substring match across title, author and category
    pub fn matches_query(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.author.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
    }
}

/// Tri-state availability filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[default]
    Any,
    Available,
    Unavailable,
}

impl Availability {
    /// Whether a record passes this filter
    pub fn accepts(&self, available: bool) -> bool {
        match self {
            Availability::Any => true,
            Availability::Available => available,
            Availability::Unavailable => !available,
        }
    }
}

/// Catalog search filter: substring query, exact category, availability
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
pub struct CatalogFilter {
    /// Case-insensitive substring matched against title, author and category
    #[serde(default)]
    pub search: Option<String>,
    /// Exact category label
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub availability: Availability,
}

impl CatalogFilter {
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.category.as_deref().map_or(true, |c| c.is_empty())
            && self.availability == Availability::Any
    }
}
