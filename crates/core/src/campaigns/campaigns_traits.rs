//! Campaign repository and service traits.

use async_trait::async_trait;

use super::campaigns_model::{Campaign, CampaignProgress, CampaignUpdate, NewCampaign};
use crate::errors::Result;

/// Trait defining the contract for Campaign repository operations.
#[async_trait]
pub trait CampaignRepositoryTrait: Send + Sync {
    /// Creates a new campaign.
    async fn create(&self, organization_id: &str, new_campaign: NewCampaign) -> Result<Campaign>;

    /// Updates an existing campaign.
    async fn update(
        &self,
        organization_id: &str,
        campaign_update: CampaignUpdate,
    ) -> Result<Campaign>;

    /// Deletes a campaign by its ID. Donations keep their campaign
    /// reference cleared by the storage layer.
    async fn delete(&self, organization_id: &str, campaign_id: &str) -> Result<usize>;

    /// Retrieves a campaign by its ID.
    fn get_by_id(&self, organization_id: &str, campaign_id: &str) -> Result<Campaign>;

    /// Lists the organization's campaigns.
    fn list(&self, organization_id: &str) -> Result<Vec<Campaign>>;
}

/// Trait defining the contract for Campaign service operations.
#[async_trait]
pub trait CampaignServiceTrait: Send + Sync {
    /// Creates a new campaign with business validation.
    async fn create_campaign(
        &self,
        organization_id: &str,
        new_campaign: NewCampaign,
    ) -> Result<Campaign>;

    /// Updates an existing campaign with business validation.
    async fn update_campaign(
        &self,
        organization_id: &str,
        campaign_update: CampaignUpdate,
    ) -> Result<Campaign>;

    /// Deletes a campaign.
    async fn delete_campaign(&self, organization_id: &str, campaign_id: &str) -> Result<()>;

    /// Retrieves a campaign by ID.
    fn get_campaign(&self, organization_id: &str, campaign_id: &str) -> Result<Campaign>;

    /// Lists the organization's campaigns.
    fn list_campaigns(&self, organization_id: &str) -> Result<Vec<Campaign>>;

    /// Computes the campaign's raised-to-date progress from the ledger.
    fn get_campaign_progress(
        &self,
        organization_id: &str,
        campaign_id: &str,
    ) -> Result<CampaignProgress>;
}
