//! Authentication service.
//!
//! Verifies credentials, establishes and destroys sessions, and runs the
//! one-time manager bootstrap. Sessions are JWT bearer tokens whose `jti`
//! is mirrored in the server-side session store, so logout genuinely
//! invalidates the token instead of relying on the client to discard it.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{
    Config, MANAGER_SEED_EMAIL, MANAGER_SEED_NAME, MANAGER_SEED_PASSWORD, SECONDS_PER_HOUR,
    TOKEN_TYPE_BEARER,
};
use crate::domain::{Password, User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::{SessionStore, UnitOfWork};

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    /// Session id; the session store keys active sessions by this value
    pub jti: Uuid,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionToken {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new reader account
    async fn register(&self, email: String, name: String, password: String) -> AppResult<User>;

    /// Verify credentials and establish a session
    async fn login(&self, email: String, password: String) -> AppResult<SessionToken>;

    /// Verify credentials, then gate on the manager role.
    ///
    /// The role check is a second gate after identity verification, not
    /// folded into the password check: an authenticated non-manager fails
    /// with `Forbidden`, which callers report as a generic credential
    /// failure so role information never leaks.
    async fn login_manager(&self, email: String, password: String) -> AppResult<SessionToken>;

    /// Destroy the session carried by the token. Idempotent: an invalid
    /// token or an already-destroyed session is a no-op.
    async fn logout(&self, token: &str) -> AppResult<()>;

    /// Verify a bearer token and confirm its session is still active
    async fn authorize(&self, token: &str) -> AppResult<Claims>;

    /// Idempotent bootstrap of the well-known manager account.
    ///
    /// Safe to invoke on every process start: creates the account only if
    /// absent, and tolerates a concurrent start winning the insert.
    async fn ensure_manager_seed(&self) -> AppResult<()>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    sessions: Arc<dyn SessionStore>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance
    pub fn new(uow: Arc<U>, sessions: Arc<dyn SessionStore>, config: Config) -> Self {
        Self {
            uow,
            sessions,
            config,
        }
    }

    /// Verify credentials, returning the user on success and `None` on
    /// any mismatch. Unknown email and wrong password are deliberately
    /// indistinguishable to prevent account enumeration.
    async fn authenticate(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        let user_result = self.uow.users().find_by_email(email).await?;

        // Perform password verification even if the user doesn't exist so
        // response timing cannot enumerate valid emails. The dummy hash
        // always fails verification.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let password_hash = match &user_result {
            Some(user) => user.password_hash.as_str(),
            None => dummy_hash,
        };

        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(password);

        match user_result {
            Some(user) if password_valid => Ok(Some(user)),
            _ => Ok(None),
        }
    }

    /// Issue a session token and record the session server-side.
    async fn establish_session(&self, user: &User) -> AppResult<SessionToken> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.session_expiration_hours);
        let session_id = Uuid::new_v4();

        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role.to_string(),
            jti: session_id,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret_bytes()),
        )?;

        let expires_in = self.config.session_expiration_hours * SECONDS_PER_HOUR;
        self.sessions
            .put(session_id, user.id, expires_in as u64)
            .await?;

        Ok(SessionToken {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in,
        })
    }

    fn decode_claims(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, email: String, name: String, password: String) -> AppResult<User> {
        // Email format is validated by the handler's ValidatedJson extractor
        if self.uow.users().find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&password)?.into_string();
        let result = self
            .uow
            .users()
            .create(email, password_hash, name, UserRole::Reader)
            .await;

        match result {
            // A concurrent registration can slip past the existence check;
            // the unique email constraint catches it, and the loser gets
            // the same conflict as if the check had seen the row.
            Err(e) if e.is_unique_violation() => Err(AppError::conflict("User")),
            other => other,
        }
    }

    async fn login(&self, email: String, password: String) -> AppResult<SessionToken> {
        let user = self
            .authenticate(&email, &password)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        self.establish_session(&user).await
    }

    async fn login_manager(&self, email: String, password: String) -> AppResult<SessionToken> {
        let user = self
            .authenticate(&email, &password)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !user.is_manager() {
            tracing::warn!(email = %user.email, "manager login attempt by non-manager account");
            return Err(AppError::Forbidden);
        }

        self.establish_session(&user).await
    }

    async fn logout(&self, token: &str) -> AppResult<()> {
        // An unparseable or expired token carries no session to destroy
        let claims = match self.decode_claims(token) {
            Ok(claims) => claims,
            Err(_) => return Ok(()),
        };

        self.sessions.delete(claims.jti).await
    }

    async fn authorize(&self, token: &str) -> AppResult<Claims> {
        let claims = self.decode_claims(token)?;

        if !self.sessions.exists(claims.jti).await? {
            return Err(AppError::Unauthorized);
        }

        Ok(claims)
    }

    async fn ensure_manager_seed(&self) -> AppResult<()> {
        if self
            .uow
            .users()
            .find_by_email(MANAGER_SEED_EMAIL)
            .await?
            .is_some()
        {
            return Ok(());
        }

        let password_hash = Password::new(MANAGER_SEED_PASSWORD)?.into_string();
        let result = self
            .uow
            .users()
            .create(
                MANAGER_SEED_EMAIL.to_string(),
                password_hash,
                MANAGER_SEED_NAME.to_string(),
                UserRole::Manager,
            )
            .await;

        match result {
            Ok(_) => {
                tracing::info!(email = MANAGER_SEED_EMAIL, "seeded manager account");
                Ok(())
            }
            // Another process start won the insert; the unique email
            // constraint guarantees at-most-one manager row either way.
            Err(e) if e.is_unique_violation() => Ok(()),
            Err(e) => Err(e),
        }
    }
}
