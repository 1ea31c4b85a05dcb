// Metric ingestion and query DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Stored metric row (append-only)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Metric {
    pub id: Uuid,
    pub service_name: String,
    pub environment: String,
    pub metric_name: String,
    pub value: f64,
    pub ts: DateTime<Utc>,
}

/// One metric entry in an ingestion batch
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MetricEntry {
    #[schema(example = "latency_ms")]
    pub name: String,
    #[schema(example = 42.0)]
    pub value: f64,
    pub ts: DateTime<Utc>,
}

/// Service-to-service ingestion payload (authenticated by `X-Org-Key`)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IngestMetricsRequest {
    #[schema(example = "api")]
    pub service_name: String,
    /// Defaults to "prod" when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    pub metrics: Vec<MetricEntry>,
}

/// Ingestion acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IngestMetricsResponse {
    #[schema(example = "accepted")]
    pub status: String,
    pub metric_count: usize,
}

/// Optional filters for the metrics query endpoint.
/// The caller's organization filter is always applied and never optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MetricsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
}

/// Response wrapper for metric queries
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MetricListResponse {
    pub metrics: Vec<Metric>,
}
