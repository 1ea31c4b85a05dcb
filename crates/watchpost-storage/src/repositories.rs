// Repository layer for database operations
//
// Every org-scoped statement runs inside a transaction that first sets the
// `app.org_id` session variable on the same connection, so row-level security
// policies can enforce tenant isolation independent of query correctness.
// This is defense in depth; the authorization gate in the API layer remains
// the primary check.

use anyhow::Result;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::*;

const METRICS_QUERY_LIMIT: i64 = 1000;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Begin a transaction with the tenant context set for row-level policies
    async fn begin_org_tx(&self, org_id: Uuid) -> Result<Transaction<'static, Postgres>> {
        let mut tx = self.pool.begin().await?;
        // set_config with is_local = true scopes the setting to this transaction
        sqlx::query("SELECT set_config('app.org_id', $1, true)")
            .bind(org_id.to_string())
            .execute(&mut *tx)
            .await?;
        Ok(tx)
    }

    // ============================================
    // Organizations and users
    // ============================================

    /// Create an organization and its first admin user atomically.
    /// Both inserts succeed or both roll back; registration must never leave
    /// an orphaned organization with no user.
    pub async fn register_org_with_admin(&self, input: RegisterOrg) -> Result<(Uuid, UserRow)> {
        let mut tx = self.pool.begin().await?;

        let org_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO organizations (name, ingest_key_hash)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&input.org_name)
        .bind(&input.ingest_key_hash)
        .fetch_one(&mut *tx)
        .await?;

        let user = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (organization_id, email, password_hash, role)
            VALUES ($1, $2, $3, 'admin')
            RETURNING id, organization_id, email, password_hash, role, created_at
            "#,
        )
        .bind(org_id)
        .bind(&input.email)
        .bind(&input.password_hash)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((org_id, user))
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, organization_id, email, password_hash, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Content-addressed ingest key lookup. A non-matching digest is a normal
    /// `None`, never an error.
    pub async fn find_org_by_ingest_key_hash(
        &self,
        key_hash: &str,
    ) -> Result<Option<OrganizationRow>> {
        let row = sqlx::query_as::<_, OrganizationRow>(
            r#"
            SELECT id, name, ingest_key_hash, created_at
            FROM organizations
            WHERE ingest_key_hash = $1
            "#,
        )
        .bind(key_hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    // ============================================
    // Dashboards
    // ============================================

    pub async fn create_dashboard(&self, input: CreateDashboard) -> Result<DashboardRow> {
        let mut tx = self.begin_org_tx(input.organization_id).await?;

        let row = sqlx::query_as::<_, DashboardRow>(
            r#"
            INSERT INTO dashboards (organization_id, created_by_user_id, name, config)
            VALUES ($1, $2, $3, $4)
            RETURNING id, organization_id, created_by_user_id, name, config, created_at
            "#,
        )
        .bind(input.organization_id)
        .bind(input.created_by_user_id)
        .bind(&input.name)
        .bind(&input.config)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row)
    }

    pub async fn list_dashboards(&self, org_id: Uuid) -> Result<Vec<DashboardRow>> {
        let mut tx = self.begin_org_tx(org_id).await?;

        let rows = sqlx::query_as::<_, DashboardRow>(
            r#"
            SELECT id, organization_id, created_by_user_id, name, config, created_at
            FROM dashboards
            WHERE organization_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(org_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(rows)
    }

    // ============================================
    // Alerts (stored configuration, never evaluated here)
    // ============================================

    pub async fn create_alert(&self, input: CreateAlert) -> Result<AlertRow> {
        let mut tx = self.begin_org_tx(input.organization_id).await?;

        let row = sqlx::query_as::<_, AlertRow>(
            r#"
            INSERT INTO alerts (organization_id, created_by_user_id, metric_name, service_name, threshold, condition, duration_seconds)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, organization_id, created_by_user_id, metric_name, service_name, threshold, condition, duration_seconds, enabled, created_at
            "#,
        )
        .bind(input.organization_id)
        .bind(input.created_by_user_id)
        .bind(&input.metric_name)
        .bind(&input.service_name)
        .bind(input.threshold)
        .bind(&input.condition)
        .bind(input.duration_seconds)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row)
    }

    pub async fn list_alerts(&self, org_id: Uuid) -> Result<Vec<AlertRow>> {
        let mut tx = self.begin_org_tx(org_id).await?;

        let rows = sqlx::query_as::<_, AlertRow>(
            r#"
            SELECT id, organization_id, created_by_user_id, metric_name, service_name, threshold, condition, duration_seconds, enabled, created_at
            FROM alerts
            WHERE organization_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(org_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(rows)
    }

    // ============================================
    // Metrics (append-only)
    // ============================================

    /// Insert one row per batch entry, all within a single transaction
    pub async fn insert_metrics(
        &self,
        org_id: Uuid,
        service_name: &str,
        environment: &str,
        entries: &[InsertMetric],
    ) -> Result<usize> {
        let mut tx = self.begin_org_tx(org_id).await?;

        for entry in entries {
            sqlx::query(
                r#"
                INSERT INTO metrics (organization_id, service_name, environment, metric_name, value, ts)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(org_id)
            .bind(service_name)
            .bind(environment)
            .bind(&entry.metric_name)
            .bind(entry.value)
            .bind(entry.ts)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(entries.len())
    }

    /// Most-recent rows for the organization, optionally filtered, capped at 1000
    pub async fn query_metrics(
        &self,
        org_id: Uuid,
        filter: &MetricFilter,
    ) -> Result<Vec<MetricRow>> {
        let mut tx = self.begin_org_tx(org_id).await?;

        let rows = sqlx::query_as::<_, MetricRow>(
            r#"
            SELECT id, organization_id, service_name, environment, metric_name, value, ts
            FROM metrics
            WHERE organization_id = $1
              AND ($2::text IS NULL OR service_name = $2)
              AND ($3::text IS NULL OR metric_name = $3)
            ORDER BY ts DESC
            LIMIT $4
            "#,
        )
        .bind(org_id)
        .bind(&filter.service_name)
        .bind(&filter.metric_name)
        .bind(METRICS_QUERY_LIMIT)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(rows)
    }
}
