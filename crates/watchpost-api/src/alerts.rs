// Alert rule HTTP routes (tenant-scoped)

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;
use watchpost_core::{AlertListResponse, AlertResponse, CreateAlertRequest};
use watchpost_storage::Database;

use crate::auth::{authorize_org, AuthUser};
use crate::common::{ApiError, ValidJson};
use crate::services::AlertService;

/// App state for alert routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AlertService>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            service: Arc::new(AlertService::new(db)),
        }
    }
}

/// Create alert routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/organizations/:org_id/alerts",
            get(list_alerts).post(create_alert),
        )
        .with_state(state)
}

/// GET /v1/organizations/{org_id}/alerts - List the organization's alert rules
#[utoipa::path(
    get,
    path = "/v1/organizations/{org_id}/alerts",
    params(
        ("org_id" = Uuid, Path, description = "Organization ID")
    ),
    responses(
        (status = 200, description = "Alert rules, newest first", body = AlertListResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Cross-tenant access"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = [])),
    tag = "alerts"
)]
pub async fn list_alerts(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(org_id): Path<Uuid>,
) -> Result<Json<AlertListResponse>, ApiError> {
    authorize_org(&claims, org_id)?;

    let alerts = state.service.list(org_id).await?;
    Ok(Json(AlertListResponse { alerts }))
}

/// POST /v1/organizations/{org_id}/alerts - Create an alert rule
#[utoipa::path(
    post,
    path = "/v1/organizations/{org_id}/alerts",
    params(
        ("org_id" = Uuid, Path, description = "Organization ID")
    ),
    request_body = CreateAlertRequest,
    responses(
        (status = 200, description = "Alert rule created", body = AlertResponse),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Cross-tenant access"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = [])),
    tag = "alerts"
)]
pub async fn create_alert(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(org_id): Path<Uuid>,
    ValidJson(req): ValidJson<CreateAlertRequest>,
) -> Result<Json<AlertResponse>, ApiError> {
    authorize_org(&claims, org_id)?;

    let alert = state.service.create(org_id, claims.sub, req).await?;
    Ok(Json(AlertResponse { alert }))
}
