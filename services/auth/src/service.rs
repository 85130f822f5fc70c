//! Credential Service: register, authenticate, list, health

use common::error::DatabaseError;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    config::AppConfig,
    models::{Credentials, User, UserSummary},
    password::PasswordScheme,
    repositories::{StoreError, UserStore},
};

/// Failure outcomes of the Credential Service
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Username already exists")]
    DuplicateUsername,

    /// Unknown username and wrong password are reported identically
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    #[error("User store failure: {0}")]
    Store(#[from] DatabaseError),
}

impl From<StoreError> for CredentialError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateUsername(_) => CredentialError::DuplicateUsername,
            StoreError::Database(e) => CredentialError::Store(e),
        }
    }
}

/// Liveness report returned by `/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: Option<String>,
}

/// Health of the process itself. The User Store is not consulted.
pub fn health(config: &AppConfig) -> HealthStatus {
    HealthStatus {
        status: "healthy",
        version: config.app_version.clone(),
    }
}

/// Password sealed at startup and verified against for unknown usernames
const DECOY_PASSWORD: &str = "decoy-password-never-matches";

/// Registration and login over a [`UserStore`]
#[derive(Clone)]
pub struct CredentialService {
    store: Arc<dyn UserStore>,
    scheme: PasswordScheme,
    decoy: Arc<str>,
}

impl CredentialService {
    pub fn new(store: Arc<dyn UserStore>, scheme: PasswordScheme) -> Self {
        let decoy = scheme.seal(DECOY_PASSWORD).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to seal decoy password");
            String::new()
        });

        Self {
            store,
            scheme,
            decoy: decoy.into(),
        }
    }

    /// Stored secret to verify a login against. Unknown usernames get the
    /// decoy so both outcomes cost one verification under the active scheme.
    fn stored_secret<'a>(&'a self, user: Option<&'a User>) -> &'a str {
        user.map_or(&*self.decoy, |user| user.password.as_str())
    }

    /// Create a user unless the username is already taken
    pub async fn register(&self, credentials: &Credentials) -> Result<User, CredentialError> {
        let sealed = self
            .scheme
            .seal(&credentials.password)
            .map_err(|e| CredentialError::PasswordHash(e.to_string()))?;

        match self.store.insert_new(&credentials.username, &sealed).await {
            Ok(user) => {
                info!(user_id = user.id, username = ?user.username, "New user registered");
                Ok(user)
            }
            Err(StoreError::DuplicateUsername(username)) => {
                warn!(username = ?username, "Attempted registration with existing username");
                Err(CredentialError::DuplicateUsername)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Succeed only when a user with exactly this username and password exists
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<User, CredentialError> {
        let user = self.store.find_by_username(&credentials.username).await?;
        let matches = self
            .scheme
            .verify(self.stored_secret(user.as_ref()), &credentials.password);

        match user {
            Some(user) if matches => {
                info!(
                    user_id = user.id,
                    username = ?user.username,
                    "User logged in successfully"
                );
                Ok(user)
            }
            _ => {
                warn!(username = ?credentials.username, "Invalid login attempt");
                Err(CredentialError::InvalidCredentials)
            }
        }
    }

    /// Every registered user as `(id, username)`
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, CredentialError> {
        Ok(self.store.list().await?)
    }

    /// Whether the User Store answers
    pub async fn store_ready(&self) -> bool {
        self.store.ping().await
    }
}
