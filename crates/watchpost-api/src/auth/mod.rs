// Authentication module
// Decision: two trust boundaries, never conflated:
// - bearer tokens (human-facing, prove user + org + role) -> jwt, middleware
// - ingest keys (service-to-service, prove org only) -> metrics ingestion

pub mod config;
pub mod jwt;
pub mod middleware;
pub mod routes;

pub use config::AuthConfig;
pub use jwt::TokenService;
pub use middleware::{authorize_org, AuthUser};
pub use routes::{routes, AuthState};
