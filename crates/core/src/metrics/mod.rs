//! Donor metrics module - ledger aggregation, retention-risk
//! classification, and the synchronizer that keeps the cached donor
//! fields consistent with the donation ledger.

mod metrics_aggregator;
mod metrics_model;
mod metrics_service;
mod metrics_traits;
mod retention;


// Re-export the public interface
pub use metrics_aggregator::aggregate_donations;
pub use metrics_model::{DonorMetrics, DonorMetricsUpdate, RetentionRisk};
pub use metrics_service::DonorMetricsService;
pub use metrics_traits::DonorMetricsServiceTrait;
pub use retention::{classify_retention_risk, live_retention_risk};
