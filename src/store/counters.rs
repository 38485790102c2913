//! Process-wide system counters

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use utoipa::ToSchema;

/// Mutable aggregate counters, atomic so concurrent increments are not lost
#[derive(Clone, Default)]
pub struct SystemCounters {
    inner: Arc<CountersInner>,
}

#[derive(Default)]
struct CountersInner {
    total_visits: AtomicU64,
    successful_logins: AtomicU64,
    search_queries: AtomicU64,
    form_submissions: AtomicU64,
}

/// Point-in-time view of the counters
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CountersSnapshot {
    pub total_visits: u64,
    pub successful_logins: u64,
    pub search_queries: u64,
    pub form_submissions: u64,
}

impl SystemCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_visit(&self) {
        self.inner.total_visits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_login(&self) {
        self.inner.successful_logins.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_search(&self) {
        self.inner.search_queries.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission(&self) {
        self.inner.form_submissions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CountersSnapshot {
        CountersSnapshot {
            total_visits: self.inner.total_visits.load(Ordering::Relaxed),
            successful_logins: self.inner.successful_logins.load(Ordering::Relaxed),
            search_queries: self.inner.search_queries.load(Ordering::Relaxed),
            form_submissions: self.inner.form_submissions.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_are_reflected_in_snapshot() {
        let counters = SystemCounters::new();
        counters.record_visit();
        counters.record_visit();
        counters.record_login();
        counters.record_search();

        let snapshot = counters.snapshot();
        assert_eq!(snapshot.total_visits, 2);
        assert_eq!(snapshot.successful_logins, 1);
        assert_eq!(snapshot.search_queries, 1);
        assert_eq!(snapshot.form_submissions, 0);
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        let counters = SystemCounters::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counters = counters.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        counters.record_visit();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(counters.snapshot().total_visits, 8000);
    }
}
