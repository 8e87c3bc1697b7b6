//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, with repository access through the Unit of Work.

mod auth_service;
mod click_service;
pub mod container;
mod profile_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Claims, SessionToken};
pub use click_service::{ClickRecorder, ClickService};
pub use profile_service::{ProfileManager, ProfileService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
