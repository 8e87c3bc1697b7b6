//! Click repository implementation.
//!
//! The click table is a raw event log: inserts only, no updates, no
//! per-row deletes. History reads come back oldest first so the most
//! recent click is last.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::user_click::{self, ActiveModel, Entity as ClickEntity};
use crate::domain::Click;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Click repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Append a click event with a server-assigned timestamp
    async fn create(
        &self,
        user_id: Uuid,
        article_title: String,
        article_url: String,
    ) -> AppResult<Click>;

    /// Full click history for a user, ordered by creation time ascending
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Click>>;
}

/// Concrete implementation of ClickRepository
pub struct ClickStore {
    db: DatabaseConnection,
}

impl ClickStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClickRepository for ClickStore {
    async fn create(
        &self,
        user_id: Uuid,
        article_title: String,
        article_url: String,
    ) -> AppResult<Click> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            article_title: Set(article_title),
            article_url: Set(article_url),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Click::from(model))
    }

    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Click>> {
        let models = ClickEntity::find()
            .filter(user_click::Column::UserId.eq(user_id))
            .order_by_asc(user_click::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Click::from).collect())
    }
}
