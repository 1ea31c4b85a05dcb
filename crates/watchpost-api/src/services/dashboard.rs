// Dashboard service for business logic

use std::sync::Arc;
use uuid::Uuid;
use watchpost_core::{CreateDashboardRequest, Dashboard};
use watchpost_storage::{models::CreateDashboard, Database, DashboardRow};

use crate::common::ApiError;

pub struct DashboardService {
    db: Arc<Database>,
}

impl DashboardService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        org_id: Uuid,
        user_id: Uuid,
        req: CreateDashboardRequest,
    ) -> Result<Dashboard, ApiError> {
        if req.name.trim().is_empty() {
            return Err(ApiError::validation("Missing dashboard name"));
        }

        let row = self
            .db
            .create_dashboard(CreateDashboard {
                organization_id: org_id,
                created_by_user_id: user_id,
                name: req.name,
                config: req.config.unwrap_or_else(|| serde_json::json!({})),
            })
            .await?;

        Ok(Self::row_to_dashboard(row))
    }

    pub async fn list(&self, org_id: Uuid) -> Result<Vec<Dashboard>, ApiError> {
        let rows = self.db.list_dashboards(org_id).await?;
        Ok(rows.into_iter().map(Self::row_to_dashboard).collect())
    }

    fn row_to_dashboard(row: DashboardRow) -> Dashboard {
        Dashboard {
            id: row.id,
            name: row.name,
            config: row.config,
            created_at: row.created_at,
        }
    }
}
