//! User Store: the persistence seam of the service

use async_trait::async_trait;
use common::error::DatabaseError;
use thiserror::Error;

use crate::models::{User, UserSummary};

pub mod memory;
pub mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

/// Errors raised by a User Store
#[derive(Error, Debug)]
pub enum StoreError {
    /// A user with this username already exists
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    /// The backing database failed
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations over user rows
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user, failing with [`StoreError::DuplicateUsername`] if the
    /// username is taken. Check and insert are a single atomic step.
    async fn insert_new(&self, username: &str, password: &str) -> StoreResult<User>;

    /// Find a user by exact username
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// All users, ordered by id, without passwords
    async fn list(&self) -> StoreResult<Vec<UserSummary>>;

    /// Whether the store can currently serve requests
    async fn ping(&self) -> bool;
}
