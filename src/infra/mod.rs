//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections, repositories, and migrations
//! - The server-side session store (Redis)

pub mod db;
pub mod persistence;
pub mod repositories;
pub mod sessions;

pub use db::{Database, Migrator};
pub use persistence::{Persistence, UnitOfWork};
pub use repositories::{
    ClickRepository, ClickStore, InterestRepository, InterestStore, UserRepository, UserStore,
};
pub use sessions::{RedisSessions, SessionStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockClickRepository, MockInterestRepository, MockUserRepository};
#[cfg(any(test, feature = "test-utils"))]
pub use sessions::MockSessionStore;
