//! Service Container - Centralized service access.
//!
//! Wires the concrete services over one Unit of Work and hands them out
//! as trait objects for dependency injection.

use std::sync::Arc;

use super::{AuthService, ClickService, ProfileService};
use crate::config::Config;
use crate::infra::{Persistence, SessionStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get profile service
    fn profiles(&self) -> Arc<dyn ProfileService>;

    /// Get click recorder
    fn clicks(&self) -> Arc<dyn ClickService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    profile_service: Arc<dyn ProfileService>,
    click_service: Arc<dyn ClickService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        profile_service: Arc<dyn ProfileService>,
        click_service: Arc<dyn ClickService>,
    ) -> Self {
        Self {
            auth_service,
            profile_service,
            click_service,
        }
    }

    /// Create service container from a database connection, session store,
    /// and config
    pub fn from_connection(
        db: sea_orm::DatabaseConnection,
        sessions: Arc<dyn SessionStore>,
        config: Config,
    ) -> Self {
        use super::{Authenticator, ClickRecorder, ProfileManager};

        let uow = Arc::new(Persistence::new(db));
        let auth_service = Arc::new(Authenticator::new(uow.clone(), sessions, config));
        let profile_service = Arc::new(ProfileManager::new(uow.clone()));
        let click_service = Arc::new(ClickRecorder::new(uow));

        Self {
            auth_service,
            profile_service,
            click_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn profiles(&self) -> Arc<dyn ProfileService> {
        self.profile_service.clone()
    }

    fn clicks(&self) -> Arc<dyn ClickService> {
        self.click_service.clone()
    }
}
