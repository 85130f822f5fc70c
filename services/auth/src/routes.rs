//! Authentication service routes

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{AppState, error::ApiResult, models::Credentials, service};

const REGISTER_PAGE: &str = include_str!("../templates/register.html");

/// Create the router for the authentication service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/users", get(list_users))
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Registration form
pub async fn index() -> Html<&'static str> {
    Html(REGISTER_PAGE)
}

/// User registration endpoint
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(credentials) = payload?;

    state.credentials.register(&credentials).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "User registered successfully!"})),
    ))
}

/// User login endpoint
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(credentials) = payload?;

    state.credentials.authenticate(&credentials).await?;

    Ok((StatusCode::OK, Json(json!({"message": "Login successful!"}))))
}

/// List every registered user as `{id, username}`
pub async fn list_users(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let users = state.credentials.list_users().await?;
    Ok(Json(users))
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(service::health(&state.config))
}

/// Readiness endpoint, probes the User Store
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if state.credentials.store_ready().await {
        (StatusCode::OK, Json(json!({"status": "ready"})))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"status": "unavailable"})),
        )
    }
}
