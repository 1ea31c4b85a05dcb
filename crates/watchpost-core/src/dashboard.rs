// Dashboard DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Dashboard owned by an organization
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Dashboard {
    pub id: Uuid,
    pub name: String,
    /// Panel layout and widget configuration, opaque to the backend
    pub config: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Request to create a dashboard
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDashboardRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}

/// Response wrapper for dashboard listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardListResponse {
    pub dashboards: Vec<Dashboard>,
}

/// Response to dashboard creation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub dashboard: Dashboard,
}
