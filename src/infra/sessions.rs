//! Server-side session store.
//!
//! Login writes a session key for the token's `jti`; logout deletes it.
//! A token whose key is gone no longer authenticates, which is what makes
//! logout an actual session destruction rather than a client-side discard.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client};
use uuid::Uuid;

use crate::config::{Config, SESSION_KEY_PREFIX};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Session store trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Record an active session for a user; expires with the token
    async fn put(&self, session_id: Uuid, user_id: Uuid, ttl_seconds: u64) -> AppResult<()>;

    /// Whether the session is still active
    async fn exists(&self, session_id: Uuid) -> AppResult<bool>;

    /// Destroy a session; deleting an absent session is a no-op
    async fn delete(&self, session_id: Uuid) -> AppResult<()>;

    /// Connectivity check for health reporting
    async fn ping(&self) -> AppResult<()>;
}

/// Redis-backed session store.
#[derive(Clone)]
pub struct RedisSessions {
    connection: ConnectionManager,
}

impl RedisSessions {
    /// Connect to Redis.
    ///
    /// # Panics
    /// Panics if the connection fails.
    pub async fn connect(config: &Config) -> Self {
        let client =
            Client::open(config.redis_url.as_str()).expect("Failed to create Redis client");

        let connection = ConnectionManager::new(client)
            .await
            .expect("Failed to connect to Redis");

        tracing::info!("Session store connected");

        Self { connection }
    }

    fn key(session_id: Uuid) -> String {
        format!("{}{}", SESSION_KEY_PREFIX, session_id)
    }
}

#[async_trait]
impl SessionStore for RedisSessions {
    async fn put(&self, session_id: Uuid, user_id: Uuid, ttl_seconds: u64) -> AppResult<()> {
        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(Self::key(session_id), user_id.to_string(), ttl_seconds)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn exists(&self, session_id: Uuid) -> AppResult<bool> {
        let mut conn = self.connection.clone();
        let exists: bool = conn
            .exists(Self::key(session_id))
            .await
            .map_err(AppError::from)?;
        Ok(exists)
    }

    async fn delete(&self, session_id: Uuid) -> AppResult<()> {
        let mut conn = self.connection.clone();
        let _: () = conn
            .del(Self::key(session_id))
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        let mut conn = self.connection.clone();
        redis::cmd("PING")
            .query_async::<()>(&mut conn)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}
