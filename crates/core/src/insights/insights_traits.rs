//! Insights provider and service traits.
//!
//! The text-generation service itself is an external collaborator. The
//! core only owns the prompt contract and the seam it is called through.

use async_trait::async_trait;

use super::insights_model::Insight;
use crate::errors::Result;

/// Contract for the external text-generation service.
#[async_trait]
pub trait InsightsProviderTrait: Send + Sync {
    /// Sends one prompt and returns the generated text.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Contract for producing dashboard insights.
#[async_trait]
pub trait InsightsServiceTrait: Send + Sync {
    /// Renders the fixed dashboard prompt for the organization and runs it
    /// through the provider.
    async fn dashboard_insights(&self, organization_id: &str) -> Result<Insight>;
}
