pub mod auth;
pub mod dashboard;

pub use auth::AdminAuth;
pub use dashboard::DashboardSummary;
