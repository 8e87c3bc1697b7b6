//! Domain layer - Core business entities and logic
//!
//! Contains the entities of the identity and personalization subsystem,
//! independent of storage and transport concerns.

pub mod click;
pub mod interest;
pub mod password;
pub mod user;

pub use click::{Click, ClickResponse};
pub use interest::{Interest, InterestResponse};
pub use password::Password;
pub use user::{ProfileView, UpdateProfile, User, UserResponse, UserRole};
