// Metric ingestion and query service
//
// Ingestion sits on the service-ingest trust boundary: a raw ingest key
// proves an organization and nothing else, so stored rows carry no user
// attribution. Queries sit on the user-session boundary and are always
// filtered by the caller's organization.

use std::sync::Arc;
use uuid::Uuid;
use watchpost_core::{
    IngestMetricsRequest, IngestMetricsResponse, Metric, MetricListResponse, MetricsQuery,
};
use watchpost_storage::{
    hash_ingest_key,
    models::{InsertMetric, MetricFilter},
    Database, MetricRow,
};

use crate::common::ApiError;

const DEFAULT_ENVIRONMENT: &str = "prod";

/// Absent, empty, and whitespace-only environments all fall back to "prod"
fn resolve_environment(environment: Option<&str>) -> &str {
    match environment.map(str::trim) {
        Some(env) if !env.is_empty() => env,
        _ => DEFAULT_ENVIRONMENT,
    }
}

pub struct MetricService {
    db: Arc<Database>,
}

impl MetricService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Ingest a metric batch authenticated by a raw ingest key.
    /// A non-matching key is a 401, indistinguishable from a missing one.
    pub async fn ingest(
        &self,
        raw_key: &str,
        req: IngestMetricsRequest,
    ) -> Result<IngestMetricsResponse, ApiError> {
        let org = self
            .db
            .find_org_by_ingest_key_hash(&hash_ingest_key(raw_key))
            .await?
            .ok_or(ApiError::Unauthorized)?;

        if req.service_name.trim().is_empty() {
            return Err(ApiError::validation("Missing service_name"));
        }

        let environment = resolve_environment(req.environment.as_deref());
        let entries: Vec<InsertMetric> = req
            .metrics
            .into_iter()
            .map(|m| InsertMetric {
                metric_name: m.name,
                value: m.value,
                ts: m.ts,
            })
            .collect();

        let count = self
            .db
            .insert_metrics(org.id, &req.service_name, environment, &entries)
            .await?;

        tracing::debug!(org_id = %org.id, count, "Metrics accepted");

        Ok(IngestMetricsResponse {
            status: "accepted".to_string(),
            metric_count: count,
        })
    }

    pub async fn query(
        &self,
        org_id: Uuid,
        query: MetricsQuery,
    ) -> Result<MetricListResponse, ApiError> {
        let rows = self
            .db
            .query_metrics(
                org_id,
                &MetricFilter {
                    metric_name: query.metric_name,
                    service_name: query.service_name,
                },
            )
            .await?;

        Ok(MetricListResponse {
            metrics: rows.into_iter().map(Self::row_to_metric).collect(),
        })
    }

    fn row_to_metric(row: MetricRow) -> Metric {
        Metric {
            id: row.id,
            service_name: row.service_name,
            environment: row.environment,
            metric_name: row.metric_name,
            value: row.value,
            ts: row.ts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_prod() {
        assert_eq!(resolve_environment(None), "prod");
        assert_eq!(resolve_environment(Some("")), "prod");
        assert_eq!(resolve_environment(Some("   ")), "prod");
    }

    #[test]
    fn test_explicit_environment_is_kept() {
        assert_eq!(resolve_environment(Some("staging")), "staging");
        assert_eq!(resolve_environment(Some(" staging ")), "staging");
    }
}
