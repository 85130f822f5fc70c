//! PostgreSQL-backed User Store

use async_trait::async_trait;
use common::error::DatabaseError;
use sqlx::PgPool;
use tracing::info;

use super::{StoreError, StoreResult, UserStore};
use crate::models::{User, UserSummary};

/// User repository over the `"user"` table
///
/// The table name and the `INTEGER` id column match what the original Flask
/// deployment created, so its rows stay readable. Ids are widened to
/// `BIGINT` in every projection, and rows the Flask service stored with a
/// NULL username or password are skipped.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `"user"` table if missing and make sure `username` is unique.
    ///
    /// Tables left by the Flask deployment have no unique constraint on
    /// `username`; the index is created separately so they gain one. Index
    /// creation fails if such a table already holds duplicate usernames.
    pub async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        info!("Ensuring user table exists");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS "user" (
                id SERIAL PRIMARY KEY,
                username TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::Migration)?;

        sqlx::query(r#"CREATE UNIQUE INDEX IF NOT EXISTS user_username_key ON "user" (username)"#)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::Migration)?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert_new(&self, username: &str, password: &str) -> StoreResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO "user" (username, password)
            VALUES ($1, $2)
            ON CONFLICT (username) DO NOTHING
            RETURNING id::BIGINT AS id, username, password
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        user.ok_or_else(|| StoreError::DuplicateUsername(username.to_string()))
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id::BIGINT AS id, username, password
            FROM "user"
            WHERE username = $1 AND password IS NOT NULL
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(user)
    }

    async fn list(&self) -> StoreResult<Vec<UserSummary>> {
        let users = sqlx::query_as::<_, UserSummary>(
            r#"
            SELECT id::BIGINT AS id, username
            FROM "user"
            WHERE username IS NOT NULL
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(users)
    }

    async fn ping(&self) -> bool {
        common::database::health_check(&self.pool).await
    }
}
