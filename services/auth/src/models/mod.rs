//! Authentication service models

pub mod user;

pub use user::{Credentials, User, UserSummary};
