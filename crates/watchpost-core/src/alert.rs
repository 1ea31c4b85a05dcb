// Alert rule DTOs
// Alerts are stored configuration only; evaluation happens elsewhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Alert rule owned by an organization
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Alert {
    pub id: Uuid,
    pub metric_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    pub threshold: f64,
    /// Comparison operator, e.g. "gt" or "lt"
    pub condition: String,
    pub duration_seconds: i32,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

/// Request to create an alert rule
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAlertRequest {
    pub metric_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    pub threshold: f64,
    pub condition: String,
    /// Defaults to 300 seconds when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i32>,
}

/// Response wrapper for alert listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlertListResponse {
    pub alerts: Vec<Alert>,
}

/// Response to alert creation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlertResponse {
    pub alert: Alert,
}
