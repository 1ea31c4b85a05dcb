// Registration and login HTTP routes

use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;
use watchpost_core::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use watchpost_storage::Database;

use crate::auth::TokenService;
use crate::common::{ApiError, ValidJson};
use crate::services::AuthService;

/// App state for auth routes
#[derive(Clone)]
pub struct AuthState {
    pub service: Arc<AuthService>,
}

impl AuthState {
    pub fn new(db: Arc<Database>, tokens: Arc<TokenService>) -> Self {
        Self {
            service: Arc::new(AuthService::new(db, tokens)),
        }
    }
}

/// Create auth routes
pub fn routes(state: AuthState) -> Router {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .with_state(state)
}

/// POST /auth/register - Create an organization with its first admin user
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Organization and admin user created", body = RegisterResponse),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AuthState>,
    ValidJson(req): ValidJson<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let response = state.service.register(req).await?;
    Ok(Json(response))
}

/// POST /auth/login - Authenticate with email and password
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 400, description = "Missing email or password"),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AuthState>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let response = state.service.login(req).await?;
    Ok(Json(response))
}
