//! Click event domain entity.
//!
//! A click is an immutable record of a reader opening an article. Clicks
//! are append-only: they are never updated or removed on their own, and
//! repeated clicks on the same article each produce a new record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Click event domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Click {
    pub id: Uuid,
    pub user_id: Uuid,
    pub article_title: String,
    pub article_url: String,
    /// Server-assigned creation time, immutable after insert
    pub created_at: DateTime<Utc>,
}

/// Click response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClickResponse {
    pub id: Uuid,
    /// Title of the opened article
    #[schema(example = "Rust 2.0 announced")]
    pub article_title: String,
    /// URL of the opened article
    #[schema(example = "https://news.example.com/rust-2-0")]
    pub article_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Click> for ClickResponse {
    fn from(click: Click) -> Self {
        Self {
            id: click.id,
            article_title: click.article_title,
            article_url: click.article_url,
            created_at: click.created_at,
        }
    }
}
