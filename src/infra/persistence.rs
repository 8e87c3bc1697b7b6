//! Unit of Work - centralized repository access.
//!
//! Services depend on this trait instead of individual stores so tests
//! can swap in mock repositories. Concurrent edits to the same row are
//! not ordered here; last write wins at the storage layer.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{
    ClickRepository, ClickStore, InterestRepository, InterestStore, UserRepository, UserStore,
};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get interest repository
    fn interests(&self) -> Arc<dyn InterestRepository>;

    /// Get click repository
    fn clicks(&self) -> Arc<dyn ClickRepository>;
}

/// Concrete implementation of UnitOfWork backed by SeaORM stores.
pub struct Persistence {
    user_repo: Arc<UserStore>,
    interest_repo: Arc<InterestStore>,
    click_repo: Arc<ClickStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance over a database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            interest_repo: Arc::new(InterestStore::new(db.clone())),
            click_repo: Arc::new(ClickStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn interests(&self) -> Arc<dyn InterestRepository> {
        self.interest_repo.clone()
    }

    fn clicks(&self) -> Arc<dyn ClickRepository> {
        self.click_repo.clone()
    }
}
