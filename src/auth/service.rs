//! Registration, login and token verification.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::OnceCell;

use super::jwt::{issue_token, validate_token, JwtConfig};
use super::password::{hash_password, verify_password};
use super::AuthError;
use crate::models::{User, UserProfile};
use crate::store::UserStore;

/// Password checked against [`AuthService::dummy_hash`] when no user matches.
const DUMMY_PASSWORD: &str = "content-studio-unknown-user";

pub struct AuthService {
    users: Arc<UserStore>,
    jwt: JwtConfig,
    dummy: OnceCell<Option<String>>,
}

impl AuthService {
    pub fn new(users: Arc<UserStore>, jwt: JwtConfig) -> Self {
        Self {
            users,
            jwt,
            dummy: OnceCell::new(),
        }
    }

    /// Hash with the same parameters as real users, built on first use.
    async fn dummy_hash(&self) -> Option<&str> {
        self.dummy
            .get_or_init(|| async { hash_password(DUMMY_PASSWORD).ok() })
            .await
            .as_deref()
    }

    /// Register a new user. Emails are unique.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        if self.users.find_by_email(email).await.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let hashed = hash_password(password).map_err(|e| AuthError::Hashing(e.to_string()))?;
        let now = Utc::now();
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password: hashed,
            created_at: now,
            updated_at: now,
        };

        // Re-checked under the store's lock in case of a concurrent registration.
        if !self.users.insert_unique_email(user.clone()).await {
            return Err(AuthError::EmailTaken);
        }

        tracing::info!(user_id = %user.id, "Registered user");
        Ok(user)
    }

    /// Check credentials and issue a bearer token.
    ///
    /// Unknown email and wrong password fail identically, and both pay for one
    /// password verification.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let Some(user) = self.users.find_by_email(email).await else {
            if let Some(dummy) = self.dummy_hash().await {
                let _ = verify_password(password, dummy);
            }
            tracing::info!("Login failed: no user for email {}", email);
            return Err(AuthError::InvalidCredentials);
        };

        let valid =
            verify_password(password, &user.password).map_err(|e| AuthError::Hashing(e.to_string()))?;
        if !valid {
            tracing::info!("Login failed: wrong password for {}", email);
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.id, "Login successful");
        Ok(issue_token(&user.id, &self.jwt)?)
    }

    /// Verify a bearer token and return the user id it carries.
    pub fn verify_token(&self, token: &str) -> Result<String, AuthError> {
        validate_token(token, &self.jwt)
            .map(|claims| claims.user_id)
            .map_err(|e| {
                tracing::debug!("Token rejected: {}", e);
                AuthError::InvalidToken
            })
    }

    pub async fn get_user(&self, id: &str) -> Option<UserProfile> {
        self.users.find_by_id(id).await.as_ref().map(UserProfile::from)
    }
}
