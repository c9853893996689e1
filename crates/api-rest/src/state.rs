use std::sync::Arc;

use healthassist_core::repositories::memory::{InMemoryClaimRepository, InMemoryUserRepository};
use healthassist_core::repositories::{ClaimRepository, UserRepository};
use healthassist_core::{AccountService, ClaimService, CoreConfig, DashboardService, PortalResult};

/// Application state shared across REST API handlers.
///
/// Cloned per request; every service shares its store through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub claims: ClaimService,
    pub accounts: AccountService,
    pub dashboard: DashboardService,
}

impl AppState {
    /// Build the services over in-memory stores, seeded with demo data when the config asks for it.
    pub fn from_config(cfg: &CoreConfig) -> PortalResult<Self> {
        let claims: Arc<dyn ClaimRepository> = if cfg.seed_demo_data() {
            Arc::new(InMemoryClaimRepository::seeded())
        } else {
            Arc::new(InMemoryClaimRepository::empty())
        };
        let users: Arc<dyn UserRepository> = if cfg.seed_demo_data() {
            Arc::new(InMemoryUserRepository::seeded()?)
        } else {
            Arc::new(InMemoryUserRepository::empty())
        };
        let dashboard = if cfg.seed_demo_data() {
            DashboardService::seeded()
        } else {
            DashboardService::empty()
        };

        Ok(Self {
            claims: ClaimService::new(claims),
            accounts: AccountService::new(users),
            dashboard,
        })
    }
}
