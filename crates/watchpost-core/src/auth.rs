// Registration and login DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request to register a new organization with its first admin user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "a@acme.com")]
    pub email: String,
    pub password: String,
    #[schema(example = "Acme")]
    pub org_name: String,
}

/// Response to a successful registration.
/// The raw ingest key is returned exactly once here; only its hash is stored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub user_id: Uuid,
    pub org_id: Uuid,
    pub token: String,
    pub ingest_key: String,
}

/// Request to log in with email and password
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response to a successful login
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub user_id: Uuid,
    pub org_id: Uuid,
    pub token: String,
}
