// Registration and login orchestration
//
// Registration is a single transaction in the storage layer: organization and
// admin user both land or neither does. The generated ingest key crosses the
// wire exactly once, in the registration response; only its hash is stored.

use std::sync::Arc;
use watchpost_core::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, Role};
use watchpost_storage::{
    generate_ingest_key, hash_password, models::RegisterOrg, verify_password, Database,
};

use crate::auth::TokenService;
use crate::common::ApiError;

pub struct AuthService {
    db: Arc<Database>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(db: Arc<Database>, tokens: Arc<TokenService>) -> Self {
        Self { db, tokens }
    }

    pub async fn register(&self, req: RegisterRequest) -> Result<RegisterResponse, ApiError> {
        if req.email.is_empty() || req.password.is_empty() || req.org_name.is_empty() {
            return Err(ApiError::validation("Missing required fields"));
        }

        // Argon2 is CPU-bound by design; keep it off the async executor
        let password = req.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(anyhow::Error::from)??;

        let ingest_key = generate_ingest_key();
        let key_hint = ingest_key.display_hint();

        let (org_id, user) = self
            .db
            .register_org_with_admin(RegisterOrg {
                org_name: req.org_name,
                ingest_key_hash: ingest_key.key_hash,
                email: req.email,
                password_hash,
            })
            .await?;

        tracing::info!(
            org_id = %org_id,
            user_id = %user.id,
            ingest_key = %key_hint,
            "Organization registered"
        );

        let token = self
            .tokens
            .issue(user.id, org_id, Role::from(user.role.as_str()))?;

        Ok(RegisterResponse {
            user_id: user.id,
            org_id,
            token,
            ingest_key: ingest_key.key,
        })
    }

    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse, ApiError> {
        if req.email.is_empty() || req.password.is_empty() {
            return Err(ApiError::validation("Missing email or password"));
        }

        // Unknown email and wrong password must be indistinguishable to the
        // caller: both fall through to the same 401.
        let user = self
            .db
            .get_user_by_email(&req.email)
            .await?
            .ok_or(ApiError::Unauthorized)?;

        let password = req.password.clone();
        let hash = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(anyhow::Error::from)?;

        if !valid {
            return Err(ApiError::Unauthorized);
        }

        let token = self.tokens.issue(
            user.id,
            user.organization_id,
            Role::from(user.role.as_str()),
        )?;

        Ok(LoginResponse {
            user_id: user.id,
            org_id: user.organization_id,
            token,
        })
    }
}
