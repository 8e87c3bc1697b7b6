//! Profile service.
//!
//! Reads and updates a user's editable attributes and interest set.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;
use validator::ValidateEmail;

use crate::config::DEFAULT_INTERESTS;
use crate::domain::{Interest, ProfileView, UpdateProfile, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Profile service trait for dependency injection.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Read-only profile projection: identity, interests, click history
    async fn get_profile(&self, user_id: Uuid) -> AppResult<ProfileView>;

    /// Partial profile update; only fields present in `update` change
    async fn edit_profile(&self, user_id: Uuid, update: UpdateProfile) -> AppResult<User>;

    /// Replace the user's entire interest set with the interests matching
    /// the given names. Unknown names are silently ignored: the vocabulary
    /// is administered, so an unmatched name is stale client data, not an
    /// error.
    async fn set_interests(&self, user_id: Uuid, names: Vec<String>) -> AppResult<Vec<Interest>>;

    /// The administered interest vocabulary
    async fn list_interests(&self) -> AppResult<Vec<Interest>>;

    /// Idempotent seeding of the default interest vocabulary
    async fn ensure_interest_seed(&self) -> AppResult<()>;
}

/// Concrete implementation of ProfileService.
pub struct ProfileManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProfileManager<U> {
    /// Create new profile service instance
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ProfileService for ProfileManager<U> {
    async fn get_profile(&self, user_id: Uuid) -> AppResult<ProfileView> {
        let user = self
            .uow
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_not_found()?;

        let interests = self.uow.interests().for_user(user_id).await?;
        let clicks = self.uow.clicks().list_for_user(user_id).await?;

        Ok(ProfileView {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role.to_string(),
            interests: interests.into_iter().map(|i| i.name).collect(),
            clicks: clicks.into_iter().map(Into::into).collect(),
        })
    }

    async fn edit_profile(&self, user_id: Uuid, update: UpdateProfile) -> AppResult<User> {
        if update.is_empty() {
            // Nothing to change; still report NotFound for a missing user
            return self
                .uow
                .users()
                .find_by_id(user_id)
                .await?
                .ok_or_not_found();
        }

        if let Some(name) = update.name.as_deref() {
            if name.trim().is_empty() {
                return Err(AppError::validation("Name must not be empty"));
            }
        }

        if let Some(email) = update.email.as_deref() {
            if !email.validate_email() {
                return Err(AppError::validation("Invalid email format"));
            }

            // The new email must stay unique across all other users
            if let Some(existing) = self.uow.users().find_by_email(email).await? {
                if existing.id != user_id {
                    return Err(AppError::conflict("User"));
                }
            }
        }

        self.uow
            .users()
            .update_profile(user_id, update.name, update.email)
            .await
    }

    async fn set_interests(&self, user_id: Uuid, names: Vec<String>) -> AppResult<Vec<Interest>> {
        // Reported before touching membership so an unknown user is a
        // NotFound, not an empty replacement
        self.uow
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_not_found()?;

        let resolved = self.uow.interests().find_by_names(names).await?;
        let ids = resolved.iter().map(|i| i.id).collect();
        self.uow.interests().replace_for_user(user_id, ids).await?;

        Ok(resolved)
    }

    async fn list_interests(&self) -> AppResult<Vec<Interest>> {
        self.uow.interests().list().await
    }

    async fn ensure_interest_seed(&self) -> AppResult<()> {
        for name in DEFAULT_INTERESTS {
            self.uow
                .interests()
                .create_if_absent(name.to_string())
                .await?;
        }

        Ok(())
    }
}
