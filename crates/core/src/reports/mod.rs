//! Reports module - dashboard aggregates over the organization ledger.

mod reports_model;
mod reports_service;

// Re-export the public interface
pub use reports_model::{DashboardSummary, MonthlyGiving, RiskBreakdown, TopDonor};
pub use reports_service::{build_dashboard_summary, ReportsService, ReportsServiceTrait};
