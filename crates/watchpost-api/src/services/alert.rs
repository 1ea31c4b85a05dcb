// Alert rule service for business logic
// Rules are stored configuration only; nothing here evaluates them.

use std::sync::Arc;
use uuid::Uuid;
use watchpost_core::{Alert, CreateAlertRequest};
use watchpost_storage::{models::CreateAlert, AlertRow, Database};

use crate::common::ApiError;

const DEFAULT_DURATION_SECONDS: i32 = 300;

pub struct AlertService {
    db: Arc<Database>,
}

impl AlertService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        org_id: Uuid,
        user_id: Uuid,
        req: CreateAlertRequest,
    ) -> Result<Alert, ApiError> {
        if req.metric_name.trim().is_empty() || req.condition.trim().is_empty() {
            return Err(ApiError::validation("Missing required fields"));
        }

        let row = self
            .db
            .create_alert(CreateAlert {
                organization_id: org_id,
                created_by_user_id: user_id,
                metric_name: req.metric_name,
                service_name: req.service_name,
                threshold: req.threshold,
                condition: req.condition,
                duration_seconds: req.duration_seconds.unwrap_or(DEFAULT_DURATION_SECONDS),
            })
            .await?;

        Ok(Self::row_to_alert(row))
    }

    pub async fn list(&self, org_id: Uuid) -> Result<Vec<Alert>, ApiError> {
        let rows = self.db.list_alerts(org_id).await?;
        Ok(rows.into_iter().map(Self::row_to_alert).collect())
    }

    fn row_to_alert(row: AlertRow) -> Alert {
        Alert {
            id: row.id,
            metric_name: row.metric_name,
            service_name: row.service_name,
            threshold: row.threshold,
            condition: row.condition,
            duration_seconds: row.duration_seconds,
            enabled: row.enabled,
            created_at: row.created_at,
        }
    }
}
