//! Click recorder service.
//!
//! Appends an immutable event each time a user opens an article. There is
//! no deduplication: the click history is a raw event log, not a set.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::MAX_ARTICLE_TITLE_LENGTH;
use crate::domain::Click;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Click recorder trait for dependency injection.
#[async_trait]
pub trait ClickService: Send + Sync {
    /// Record a single article-open event with the current server time
    async fn record_click(
        &self,
        user_id: Uuid,
        article_title: String,
        article_url: String,
    ) -> AppResult<Click>;
}

/// Concrete implementation of ClickService.
pub struct ClickRecorder<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ClickRecorder<U> {
    /// Create new click recorder instance
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ClickService for ClickRecorder<U> {
    async fn record_click(
        &self,
        user_id: Uuid,
        article_title: String,
        article_url: String,
    ) -> AppResult<Click> {
        if article_title.chars().count() > MAX_ARTICLE_TITLE_LENGTH {
            return Err(AppError::validation(format!(
                "Article title must be at most {} characters",
                MAX_ARTICLE_TITLE_LENGTH
            )));
        }

        // Clicks are owned by exactly one user; reject orphan events
        self.uow
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_not_found()?;

        self.uow
            .clicks()
            .create(user_id, article_title, article_url)
            .await
    }
}
