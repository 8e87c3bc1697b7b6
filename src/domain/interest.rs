//! Interest domain entity.
//!
//! Interests are an administered vocabulary readers opt into; they are
//! seeded at startup and never created through user-facing flows.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Interest domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    pub id: Uuid,
    pub name: String,
}

/// Interest response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InterestResponse {
    pub id: Uuid,
    /// Unique interest label
    #[schema(example = "Sports")]
    pub name: String,
}

impl From<Interest> for InterestResponse {
    fn from(interest: Interest) -> Self {
        Self {
            id: interest.id,
            name: interest.name,
        }
    }
}
