//! Interest repository implementation.
//!
//! Covers both the administered vocabulary and per-user membership in it.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use super::entities::{interest, user, user_interest};
use crate::domain::Interest;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Interest repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait InterestRepository: Send + Sync {
    /// List the whole interest vocabulary, ordered by name
    async fn list(&self) -> AppResult<Vec<Interest>>;

    /// Resolve interests matching the given names; unknown names are
    /// simply absent from the result
    async fn find_by_names(&self, names: Vec<String>) -> AppResult<Vec<Interest>>;

    /// Insert a vocabulary entry unless it already exists
    async fn create_if_absent(&self, name: String) -> AppResult<()>;

    /// Interests the given user opted into
    async fn for_user(&self, user_id: Uuid) -> AppResult<Vec<Interest>>;

    /// Replace the user's entire interest set with the given interests
    async fn replace_for_user(&self, user_id: Uuid, interest_ids: Vec<Uuid>) -> AppResult<()>;
}

/// Concrete implementation of InterestRepository
pub struct InterestStore {
    db: DatabaseConnection,
}

impl InterestStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InterestRepository for InterestStore {
    async fn list(&self) -> AppResult<Vec<Interest>> {
        let models = interest::Entity::find()
            .order_by_asc(interest::Column::Name)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Interest::from).collect())
    }

    async fn find_by_names(&self, names: Vec<String>) -> AppResult<Vec<Interest>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let models = interest::Entity::find()
            .filter(interest::Column::Name.is_in(names))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Interest::from).collect())
    }

    async fn create_if_absent(&self, name: String) -> AppResult<()> {
        let existing = interest::Entity::find()
            .filter(interest::Column::Name.eq(name.as_str()))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        if existing.is_some() {
            return Ok(());
        }

        let result = interest::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
        }
        .insert(&self.db)
        .await
        .map_err(AppError::from);

        match result {
            Ok(_) => Ok(()),
            // A concurrent seed may have inserted the same name first; the
            // unique constraint makes that outcome equivalent to ours.
            Err(e) if e.is_unique_violation() => Ok(()),
            Err(e) => Err(e),
        }
    }

    async fn for_user(&self, user_id: Uuid) -> AppResult<Vec<Interest>> {
        let user = user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .ok_or(AppError::NotFound)?;

        let models = user
            .find_related(interest::Entity)
            .order_by_asc(interest::Column::Name)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Interest::from).collect())
    }

    async fn replace_for_user(&self, user_id: Uuid, interest_ids: Vec<Uuid>) -> AppResult<()> {
        // Delete + insert in one transaction so a half-replaced set is
        // never observable.
        let txn = self.db.begin().await.map_err(AppError::from)?;

        user_interest::Entity::delete_many()
            .filter(user_interest::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(AppError::from)?;

        if !interest_ids.is_empty() {
            let links: Vec<user_interest::ActiveModel> = interest_ids
                .into_iter()
                .map(|interest_id| user_interest::ActiveModel {
                    user_id: Set(user_id),
                    interest_id: Set(interest_id),
                })
                .collect();

            user_interest::Entity::insert_many(links)
                .exec(&txn)
                .await
                .map_err(AppError::from)?;
        }

        txn.commit().await.map_err(AppError::from)?;
        Ok(())
    }
}
