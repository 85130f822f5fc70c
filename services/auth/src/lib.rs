//! User registration and login service
//!
//! Accounts are kept in a [`repositories::UserStore`]; the
//! [`service::CredentialService`] registers and authenticates against it and
//! [`routes::create_router`] exposes both over HTTP.

pub mod config;
pub mod error;
pub mod models;
pub mod password;
pub mod repositories;
pub mod routes;
pub mod service;

use std::sync::Arc;

use crate::{config::AppConfig, repositories::UserStore, service::CredentialService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub credentials: CredentialService,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn UserStore>) -> Self {
        let credentials = CredentialService::new(store, config.password_scheme);
        Self {
            config: Arc::new(config),
            credentials,
        }
    }
}
