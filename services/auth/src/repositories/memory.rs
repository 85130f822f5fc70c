//! In-process User Store for local runs and tests

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{StoreError, StoreResult, UserStore};
use crate::models::{User, UserSummary};

#[derive(Debug, Default)]
struct UserTable {
    rows: Vec<User>,
    last_id: i64,
}

/// User Store kept in memory behind a mutex
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    table: Arc<Mutex<UserTable>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently stored
    pub async fn len(&self) -> usize {
        self.table.lock().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert_new(&self, username: &str, password: &str) -> StoreResult<User> {
        let mut table = self.table.lock().await;

        if table.rows.iter().any(|row| row.username == username) {
            return Err(StoreError::DuplicateUsername(username.to_string()));
        }

        table.last_id += 1;
        let user = User {
            id: table.last_id,
            username: username.to_string(),
            password: password.to_string(),
        };
        table.rows.push(user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let table = self.table.lock().await;
        Ok(table.rows.iter().find(|row| row.username == username).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<UserSummary>> {
        let table = self.table.lock().await;
        Ok(table.rows.iter().map(UserSummary::from).collect())
    }

    async fn ping(&self) -> bool {
        true
    }
}
