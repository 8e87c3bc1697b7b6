//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::config::{ROLE_MANAGER, ROLE_READER};
use crate::domain::click::ClickResponse;

/// User roles enumeration.
///
/// Exactly one role applies to a user at any time; there is no operation
/// that promotes a reader to manager after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Reader,
    Manager,
}

impl UserRole {
    /// Check if this role has manager privileges
    pub fn is_manager(&self) -> bool {
        matches!(self, UserRole::Manager)
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_MANAGER => UserRole::Manager,
            _ => UserRole::Reader,
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Manager => write!(f, "{}", ROLE_MANAGER),
            UserRole::Reader => write!(f, "{}", ROLE_READER),
        }
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user has the manager role
    pub fn is_manager(&self) -> bool {
        self.role.is_manager()
    }
}

/// Partial profile update.
///
/// Names only the mutable, allow-listed fields; unknown fields in the
/// payload are rejected at deserialization instead of silently accepted.
/// Omitted fields keep their prior values.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfile {
    /// New display name
    #[validate(length(min = 1, message = "Name must not be empty"))]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    /// New email address (must remain unique)
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
}

impl UpdateProfile {
    /// True when no field is present, i.e. the update is a no-op.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// User role
    #[schema(example = "reader")]
    pub role: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role.to_string(),
            created_at: user.created_at,
        }
    }
}

/// Read-only profile projection: identity, interests, and click history.
///
/// Click history is ordered by creation time, most recent last.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileView {
    pub id: Uuid,
    #[schema(example = "user@example.com")]
    pub email: String,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "reader")]
    pub role: String,
    /// Names of the interests the user opted into
    #[schema(example = json!(["Sports", "Tech"]))]
    pub interests: Vec<String>,
    /// Full click history, oldest first
    pub clicks: Vec<ClickResponse>,
}
