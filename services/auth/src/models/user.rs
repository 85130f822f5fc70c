//! User model and related functionality

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// User entity
///
/// Not `Serialize`: the stored password never reaches a response body.
/// Listings go through [`UserSummary`].
#[derive(Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Public projection of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

/// Username/password pair submitted to register or login
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_password() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            password: "secret".to_string(),
        };

        let rendered = format!("{:?}", user);
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("secret"));

        let rendered = format!("{:?}", Credentials::new("alice", "secret"));
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn summary_serializes_without_password() {
        let user = User {
            id: 7,
            username: "bob".to_string(),
            password: "pw1".to_string(),
        };

        let value = serde_json::to_value(UserSummary::from(&user)).unwrap();
        assert_eq!(value, serde_json::json!({"id": 7, "username": "bob"}));
    }

    #[test]
    fn credentials_require_both_fields() {
        let missing = serde_json::from_str::<Credentials>(r#"{"username": "bob"}"#);
        assert!(missing.is_err());

        let null = serde_json::from_str::<Credentials>(r#"{"username": null, "password": "x"}"#);
        assert!(null.is_err());

        let empty = serde_json::from_str::<Credentials>(r#"{"username": "", "password": ""}"#);
        assert!(empty.is_ok());
    }
}
