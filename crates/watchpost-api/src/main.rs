// Watchpost API server
// Multi-tenant telemetry backend: metric ingestion per organization plus
// authenticated dashboard and alert-rule APIs.

mod alerts;
mod auth;
mod common;
mod dashboards;
mod metrics;
mod services;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Extension, Json, Router};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;
use watchpost_core::*;
use watchpost_storage::Database;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Registers the bearer security scheme referenced by the route annotations
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::routes::register,
        auth::routes::login,
        dashboards::list_dashboards,
        dashboards::create_dashboard,
        alerts::list_alerts,
        alerts::create_alert,
        metrics::ingest_metrics,
        metrics::query_metrics,
    ),
    components(
        schemas(
            RegisterRequest, RegisterResponse,
            LoginRequest, LoginResponse,
            Dashboard, CreateDashboardRequest, DashboardResponse, DashboardListResponse,
            Alert, CreateAlertRequest, AlertResponse, AlertListResponse,
            Metric, MetricEntry, IngestMetricsRequest, IngestMetricsResponse,
            MetricsQuery, MetricListResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login endpoints"),
        (name = "dashboards", description = "Dashboard management endpoints"),
        (name = "alerts", description = "Alert rule management endpoints"),
        (name = "metrics", description = "Metric ingestion and query endpoints")
    ),
    info(
        title = "Watchpost API",
        version = "0.1.0",
        description = "Multi-tenant telemetry backend with per-organization isolation",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "watchpost_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("watchpost-api starting...");

    // Initialize database
    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL environment variable required")?;
    let db = Database::from_url(&database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("../watchpost-storage/migrations")
        .run(db.pool())
        .await
        .context("Failed to run migrations")?;

    // Authentication configuration, loaded once and injected into constructors
    let auth_config = auth::AuthConfig::from_env();
    tracing::info!(
        token_lifetime_secs = auth_config.token_lifetime.as_secs(),
        "Authentication configured"
    );

    let db = Arc::new(db);
    let tokens = Arc::new(auth::TokenService::new(
        &auth_config.jwt_secret,
        auth_config.token_lifetime,
    ));

    // Create module-specific states
    let auth_state = auth::AuthState::new(db.clone(), tokens.clone());
    let dashboards_state = dashboards::AppState::new(db.clone());
    let alerts_state = alerts::AppState::new(db.clone());
    let metrics_state = metrics::AppState::new(db.clone());

    // Load CORS allowed origins from environment (optional)
    // Example: CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
    let cors_origins: Vec<HeaderValue> = std::env::var("CORS_ALLOWED_ORIGINS")
        .ok()
        .filter(|s| !s.is_empty())
        .map(|s| s.split(',').filter_map(|s| s.trim().parse().ok()).collect())
        .unwrap_or_default();

    if cors_origins.is_empty() {
        tracing::info!("CORS not configured (same-origin requests only)");
    } else {
        tracing::info!(origins = ?cors_origins, "CORS origins configured");
    }

    // Build main router
    let app = Router::new()
        .route("/health", get(health))
        .merge(auth::routes(auth_state))
        .merge(dashboards::routes(dashboards_state))
        .merge(alerts::routes(alerts_state))
        .merge(metrics::routes(metrics_state))
        .layer(Extension(tokens));

    // Add Swagger UI
    let app =
        app.merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()));

    // Add CORS layer only if origins are configured
    let app = if !cors_origins.is_empty() {
        app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(cors_origins))
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]),
        )
    } else {
        app
    };

    // Add tracing
    let app = app.layer(TraceLayer::new_for_http());

    // Start server
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
