// Public contracts for the Watchpost API
// This crate defines DTOs shared between the HTTP layer and the storage layer,
// plus the session claims type consumed by the authorization gate.

pub mod alert;
pub mod auth;
pub mod claims;
pub mod dashboard;
pub mod metric;

pub use alert::*;
pub use auth::*;
pub use claims::*;
pub use dashboard::*;
pub use metric::*;
