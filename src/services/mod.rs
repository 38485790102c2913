//! Business logic services

pub mod auth;
pub mod catalog;
pub mod contact;
pub mod stats;

use crate::{config::AuthConfig, store::Stores};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub contact: contact::ContactService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over the given stores
    pub fn new(stores: Stores, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(stores.clone(), auth_config),
            catalog: catalog::CatalogService::new(stores.clone()),
            contact: contact::ContactService::new(stores.clone()),
            stats: stats::StatsService::new(stores),
        }
    }
}
