//! In-memory data stores.
//!
//! The process owns all state: a seeded user directory, a static catalog, a
//! bounded activity log, the inquiry log and the system counters. Stores are
//! explicit values injected through [`crate::AppState`] rather than ambient
//! globals; each guards its own data with a primitive suited to its access
//! pattern, so concurrent increments and appends are never lost.
//!
//! Everything is volatile and resets on process restart.

pub mod activity;
pub mod catalog;
pub mod counters;
pub mod directory;
pub mod inquiries;

pub use activity::ActivityLog;
pub use catalog::CatalogStore;
pub use counters::SystemCounters;
pub use directory::UserDirectory;
pub use inquiries::InquiryLog;

use crate::config::ActivityConfig;
use crate::error::AppResult;

/// Container for all stores; cheap to clone (each store is internally shared)
#[derive(Clone)]
pub struct Stores {
    pub directory: UserDirectory,
    pub catalog: CatalogStore,
    pub activity: ActivityLog,
    pub inquiries: InquiryLog,
    pub counters: SystemCounters,
}

impl Stores {
    /// Build all stores with their seed data
    pub fn new(activity_config: &ActivityConfig) -> AppResult<Self> {
        Ok(Self {
            directory: UserDirectory::seeded()?,
            catalog: CatalogStore::seeded(),
            activity: ActivityLog::with_capacity(activity_config.capacity),
            inquiries: InquiryLog::new(),
            counters: SystemCounters::new(),
        })
    }
}
