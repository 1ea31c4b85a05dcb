// Metric ingestion and query HTTP routes
//
// Ingestion authenticates with the X-Org-Key header (service-ingest boundary);
// queries authenticate with a bearer token (user-session boundary) and are
// always scoped to the caller's own organization — there is no org path
// parameter to get wrong.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use watchpost_core::{
    IngestMetricsRequest, IngestMetricsResponse, MetricListResponse, MetricsQuery,
};
use watchpost_storage::Database;

use crate::auth::AuthUser;
use crate::common::{ApiError, ValidJson};
use crate::services::MetricService;

/// Ingest key header for service-to-service metric submission
pub const ORG_KEY_HEADER: &str = "x-org-key";

/// App state for metric routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<MetricService>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            service: Arc::new(MetricService::new(db)),
        }
    }
}

/// Create metric routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/metrics", post(ingest_metrics).get(query_metrics))
        .with_state(state)
}

/// POST /v1/metrics - Ingest a metric batch (service-to-service)
#[utoipa::path(
    post,
    path = "/v1/metrics",
    request_body = IngestMetricsRequest,
    params(
        ("X-Org-Key" = String, Header, description = "Raw organization ingest key")
    ),
    responses(
        (status = 200, description = "Batch accepted", body = IngestMetricsResponse),
        (status = 400, description = "Malformed payload"),
        (status = 401, description = "Missing or invalid ingest key"),
        (status = 500, description = "Internal server error")
    ),
    tag = "metrics"
)]
pub async fn ingest_metrics(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(req): ValidJson<IngestMetricsRequest>,
) -> Result<Json<IngestMetricsResponse>, ApiError> {
    let raw_key = headers
        .get(ORG_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    let response = state.service.ingest(raw_key, req).await?;
    Ok(Json(response))
}

/// GET /v1/metrics - Query recent metrics for the caller's organization
#[utoipa::path(
    get,
    path = "/v1/metrics",
    params(
        ("metric_name" = Option<String>, Query, description = "Filter by metric name"),
        ("service_name" = Option<String>, Query, description = "Filter by service name")
    ),
    responses(
        (status = 200, description = "Most recent rows, capped at 1000", body = MetricListResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_token" = [])),
    tag = "metrics"
)]
pub async fn query_metrics(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Query(query): Query<MetricsQuery>,
) -> Result<Json<MetricListResponse>, ApiError> {
    let response = state.service.query(claims.org, query).await?;
    Ok(Json(response))
}
