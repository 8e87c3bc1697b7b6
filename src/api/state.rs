//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, SessionStore};
use crate::services::{AuthService, ClickService, ProfileService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Profile service
    pub profile_service: Arc<dyn ProfileService>,
    /// Click recorder
    pub click_service: Arc<dyn ClickService>,
    /// Session store
    pub sessions: Arc<dyn SessionStore>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from infrastructure and config.
    ///
    /// This is the recommended way to create AppState: services are wired
    /// through the container over a shared Unit of Work.
    pub fn from_config(
        database: Arc<Database>,
        sessions: Arc<dyn SessionStore>,
        config: Config,
    ) -> Self {
        let container = Services::from_connection(
            database.get_connection(),
            sessions.clone(),
            config,
        );

        Self {
            auth_service: container.auth(),
            profile_service: container.profiles(),
            click_service: container.clicks(),
            sessions,
            database,
        }
    }

    /// Create application state with manually injected services (tests).
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        profile_service: Arc<dyn ProfileService>,
        click_service: Arc<dyn ClickService>,
        sessions: Arc<dyn SessionStore>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            profile_service,
            click_service,
            sessions,
            database,
        }
    }
}
