// Database models (internal, may differ from public DTOs)

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

// ============================================
// Tenant models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct OrganizationRow {
    pub id: Uuid,
    pub name: String,
    pub ingest_key_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Inputs for the atomic org-plus-admin registration write
#[derive(Debug, Clone)]
pub struct RegisterOrg {
    pub org_name: String,
    pub ingest_key_hash: String,
    pub email: String,
    pub password_hash: String,
}

// ============================================
// Dashboard models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct DashboardRow {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub created_by_user_id: Uuid,
    pub name: String,
    pub config: sqlx::types::JsonValue,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateDashboard {
    pub organization_id: Uuid,
    pub created_by_user_id: Uuid,
    pub name: String,
    pub config: serde_json::Value,
}

// ============================================
// Alert models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct AlertRow {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub created_by_user_id: Uuid,
    pub metric_name: String,
    pub service_name: Option<String>,
    pub threshold: f64,
    pub condition: String,
    pub duration_seconds: i32,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateAlert {
    pub organization_id: Uuid,
    pub created_by_user_id: Uuid,
    pub metric_name: String,
    pub service_name: Option<String>,
    pub threshold: f64,
    pub condition: String,
    pub duration_seconds: i32,
}

// ============================================
// Metric models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct MetricRow {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub service_name: String,
    pub environment: String,
    pub metric_name: String,
    pub value: f64,
    pub ts: DateTime<Utc>,
}

/// One entry of an ingestion batch (org and service context carried separately)
#[derive(Debug, Clone)]
pub struct InsertMetric {
    pub metric_name: String,
    pub value: f64,
    pub ts: DateTime<Utc>,
}

/// Optional filters for metric queries; the org filter is always applied
#[derive(Debug, Clone, Default)]
pub struct MetricFilter {
    pub metric_name: Option<String>,
    pub service_name: Option<String>,
}
