// Dashboard HTTP routes (tenant-scoped)

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;
use watchpost_core::{CreateDashboardRequest, DashboardListResponse, DashboardResponse};
use watchpost_storage::Database;

use crate::auth::{authorize_org, AuthUser};
use crate::common::{ApiError, ValidJson};
use crate::services::DashboardService;

/// App state for dashboard routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DashboardService>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            service: Arc::new(DashboardService::new(db)),
        }
    }
}

/// Create dashboard routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/organizations/:org_id/dashboards",
            get(list_dashboards).post(create_dashboard),
        )
        .with_state(state)
}

/// GET /v1/organizations/{org_id}/dashboards - List the organization's dashboards
#[utoipa::path(
    get,
    path = "/v1/organizations/{org_id}/dashboards",
    params(
        ("org_id" = Uuid, Path, description = "Organization ID")
    ),
    responses(
        (status = 200, description = "Dashboards, newest first", body = DashboardListResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Cross-tenant access"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = [])),
    tag = "dashboards"
)]
pub async fn list_dashboards(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(org_id): Path<Uuid>,
) -> Result<Json<DashboardListResponse>, ApiError> {
    authorize_org(&claims, org_id)?;

    let dashboards = state.service.list(org_id).await?;
    Ok(Json(DashboardListResponse { dashboards }))
}

/// POST /v1/organizations/{org_id}/dashboards - Create a dashboard
#[utoipa::path(
    post,
    path = "/v1/organizations/{org_id}/dashboards",
    params(
        ("org_id" = Uuid, Path, description = "Organization ID")
    ),
    request_body = CreateDashboardRequest,
    responses(
        (status = 200, description = "Dashboard created", body = DashboardResponse),
        (status = 400, description = "Missing dashboard name"),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Cross-tenant access"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = [])),
    tag = "dashboards"
)]
pub async fn create_dashboard(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(org_id): Path<Uuid>,
    ValidJson(req): ValidJson<CreateDashboardRequest>,
) -> Result<Json<DashboardResponse>, ApiError> {
    authorize_org(&claims, org_id)?;

    let dashboard = state.service.create(org_id, claims.sub, req).await?;
    Ok(Json(DashboardResponse { dashboard }))
}
