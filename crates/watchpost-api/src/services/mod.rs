// Service layer for business logic

pub mod alert;
pub mod auth;
pub mod dashboard;
pub mod metric;

pub use alert::AlertService;
pub use auth::AuthService;
pub use dashboard::DashboardService;
pub use metric::MetricService;
