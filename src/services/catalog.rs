//! Catalog query service

use serde_json::json;

use crate::{
    models::{
        activity::{ActivityAction, ActivityEvent},
        book::{BookRecord, CatalogFilter},
    },
    store::Stores,
};

#[derive(Clone)]
pub struct CatalogService {
    stores: Stores,
}

impl CatalogService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    /// Pure, read-only filtered view of the catalog
    pub fn search(&self, filter: &CatalogFilter) -> Vec<BookRecord> {
        self.stores.catalog.search(filter)
    }

    /// Search invoked through the search form: counts as a search query and
    /// records a `catalog_search` event. Direct listing and API access go
    /// through [`Self::search`] and are not counted.
    pub fn search_form(
        &self,
        filter: &CatalogFilter,
        actor: Option<&str>,
        origin: &str,
    ) -> Vec<BookRecord> {
        self.stores.counters.record_search();
        self.stores.activity.record(ActivityEvent::new(
            ActivityAction::CatalogSearch,
            actor,
            Some(json!({
                "query": filter.search.as_deref().unwrap_or(""),
                "category": filter.category.as_deref().unwrap_or(""),
            })),
            origin,
        ));
        self.search(filter)
    }

    /// Sorted distinct category labels, for the filter vocabulary
    pub fn categories(&self) -> Vec<String> {
        self.stores.catalog.categories()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ActivityConfig;

    fn service() -> (CatalogService, Stores) {
        let stores = Stores::new(&ActivityConfig { capacity: 64 }).unwrap();
        (CatalogService::new(stores.clone()), stores)
    }

    #[test]
    fn python_query_finds_the_ramalho_record() {
        let (catalog, _) = service();
        let hits = catalog.search(&CatalogFilter {
            search: Some("python".to_string()),
            ..Default::default()
        });
        assert!(hits
            .iter()
            .any(|b| b.title == "Advanced Python Programming" && b.author == "Luciano Ramalho"));
    }

    #[test]
    fn form_search_counts_and_logs_while_direct_search_does_not() {
        let (catalog, stores) = service();
        let filter = CatalogFilter {
            search: Some("cloud".to_string()),
            ..Default::default()
        };

        catalog.search(&filter);
        assert_eq!(stores.counters.snapshot().search_queries, 0);
        assert!(stores.activity.is_empty());

        catalog.search_form(&filter, Some("student"), "127.0.0.1");
        assert_eq!(stores.counters.snapshot().search_queries, 1);
        assert_eq!(
            stores
                .activity
                .count_by_action("student", ActivityAction::CatalogSearch),
            1
        );
    }
}
