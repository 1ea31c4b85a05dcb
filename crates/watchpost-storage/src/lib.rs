// Postgres storage layer with sqlx
//
// This crate provides:
// - Database: repository wrapper over PgPool, all queries org-scoped
// - password: argon2 hashing for user credentials
// - ingest_key: SHA-256 content-addressed hashing for service ingest keys

pub mod ingest_key;
pub mod models;
pub mod password;
pub mod repositories;

pub use ingest_key::{generate_ingest_key, hash_ingest_key, GeneratedIngestKey};
pub use models::*;
pub use password::{hash_password, verify_password};
pub use repositories::Database;
