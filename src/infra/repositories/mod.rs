//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod click_repository;
pub(crate) mod entities;
mod interest_repository;
mod user_repository;

pub use click_repository::{ClickRepository, ClickStore};
pub use interest_repository::{InterestRepository, InterestStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use click_repository::MockClickRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use interest_repository::MockInterestRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
