//! Static book catalog

use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::models::book::{BookRecord, CatalogFilter};

static SEED_CATALOG: Lazy<Vec<BookRecord>> = Lazy::new(|| {
    let seed = [
        (1, "Advanced Python Programming", "Luciano Ramalho", "978-1492051282", true, "Programming"),
        (2, "Software Engineering Best Practices", "Robert Martin", "978-0134494166", false, "Engineering"),
        (3, "Modern Web Development", "Ethan Brown", "978-1491949308", true, "Web Development"),
        (4, "Machine Learning Fundamentals", "Andreas Müller", "978-1449369415", true, "AI/ML"),
        (5, "Cloud Computing Architecture", "Thomas Erl", "978-0133387520", false, "Cloud"),
        (6, "Data Science with Python", "Wes McKinney", "978-1491957660", true, "Data Science"),
        (7, "Cybersecurity Fundamentals", "Charles Brooks", "978-1119362395", true, "Security"),
        (8, "DevOps Engineering", "Gene Kim", "978-1942788003", false, "DevOps"),
    ];
    seed.into_iter()
        .map(|(id, title, author, isbn, available, category)| BookRecord {
            id,
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            available,
            category: category.to_string(),
        })
        .collect()
});

/// The book catalog. Immutable after seeding; ordering is storage order.
#[derive(Clone)]
pub struct CatalogStore {
    books: Arc<Vec<BookRecord>>,
}

impl CatalogStore {
    pub fn seeded() -> Self {
        Self {
            books: Arc::new(SEED_CATALOG.clone()),
        }
    }

    /// All records in storage order
    pub fn all(&self) -> Vec<BookRecord> {
        self.books.as_ref().clone()
    }

    /// Filtered view: substring query, exact category, tri-state availability.
    /// Pure and read-only; preserves storage order; no pagination.
    pub fn search(&self, filter: &CatalogFilter) -> Vec<BookRecord> {
        self.books
            .iter()
            .filter(|book| {
                filter
                    .search
                    .as_deref()
                    .map(str::trim)
                    .filter(|q| !q.is_empty())
                    .map_or(true, |q| book.matches_query(q))
            })
            .filter(|book| {
                filter
                    .category
                    .as_deref()
                    .filter(|c| !c.is_empty())
                    .map_or(true, |c| book.category == c)
            })
            .filter(|book| filter.availability.accepts(book.available))
            .cloned()
            .collect()
    }

    /// Sorted distinct category labels
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .books
            .iter()
            .map(|book| book.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn available_count(&self) -> usize {
        self.books.iter().filter(|book| book.available).count()
    }

    /// First `n` records, for the dashboard's recent shelf
    pub fn first(&self, n: usize) -> Vec<BookRecord> {
        self.books.iter().take(n).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::Availability;

    #[test]
    fn substring_query_is_case_insensitive_across_fields() {
        let catalog = CatalogStore::seeded();
        let filter = CatalogFilter {
            search: Some("python".to_string()),
            ..Default::default()
        };
        let hits = catalog.search(&filter);
        assert!(hits
            .iter()
            .any(|b| b.title == "Advanced Python Programming" && b.author == "Luciano Ramalho"));
        // "Data Science with Python" matches on title as well
        assert!(hits.len() >= 2);

        // author match
        let filter = CatalogFilter {
            search: Some("mckinney".to_string()),
            ..Default::default()
        };
        assert_eq!(catalog.search(&filter).len(), 1);
    }

    #[test]
    fn category_filter_is_exact() {
        let catalog = CatalogStore::seeded();
        let filter = CatalogFilter {
            category: Some("Programming".to_string()),
            ..Default::default()
        };
        let hits = catalog.search(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        // substring of a category label does not match exactly
        let filter = CatalogFilter {
            category: Some("Program".to_string()),
            ..Default::default()
        };
        assert!(catalog.search(&filter).is_empty());
    }

    #[test]
    fn availability_filter_is_tri_state() {
        let catalog = CatalogStore::seeded();
        let available = catalog.search(&CatalogFilter {
            availability: Availability::Available,
            ..Default::default()
        });
        let unavailable = catalog.search(&CatalogFilter {
            availability: Availability::Unavailable,
            ..Default::default()
        });
        assert_eq!(available.len(), 5);
        assert_eq!(unavailable.len(), 3);
        assert_eq!(available.len() + unavailable.len(), catalog.len());
        assert!(available.iter().all(|b| b.available));
        assert!(unavailable.iter().all(|b| !b.available));
    }

    #[test]
    fn search_preserves_storage_order() {
        let catalog = CatalogStore::seeded();
        let all = catalog.search(&CatalogFilter::default());
        let ids: Vec<u32> = all.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn categories_are_sorted_and_distinct() {
        let catalog = CatalogStore::seeded();
        let categories = catalog.categories();
        assert_eq!(categories.len(), 8);
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
    }
}
