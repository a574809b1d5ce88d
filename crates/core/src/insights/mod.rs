//! Insights module - interface to the external text-generation service.

mod insights_model;
mod insights_service;
mod insights_traits;

// Re-export the public interface
pub use insights_model::Insight;
pub use insights_service::{build_dashboard_prompt, InsightsService};
pub use insights_traits::{InsightsProviderTrait, InsightsServiceTrait};
