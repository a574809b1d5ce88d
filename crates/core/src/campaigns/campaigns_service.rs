use std::sync::Arc;

use super::campaigns_model::{
    campaign_progress, Campaign, CampaignProgress, CampaignUpdate, NewCampaign,
};
use super::campaigns_traits::{CampaignRepositoryTrait, CampaignServiceTrait};
use crate::donations::DonationRepositoryTrait;
use crate::errors::Result;

/// Service for managing campaigns
pub struct CampaignService {
    repository: Arc<dyn CampaignRepositoryTrait>,
    donation_repository: Arc<dyn DonationRepositoryTrait>,
}

impl CampaignService {
    /// Creates a new CampaignService instance
    pub fn new(
        repository: Arc<dyn CampaignRepositoryTrait>,
        donation_repository: Arc<dyn DonationRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            donation_repository,
        }
    }
}

#[async_trait::async_trait]
impl CampaignServiceTrait for CampaignService {
    async fn create_campaign(
        &self,
        organization_id: &str,
        new_campaign: NewCampaign,
    ) -> Result<Campaign> {
        new_campaign.validate()?;
        self.repository.create(organization_id, new_campaign).await
    }

    async fn update_campaign(
        &self,
        organization_id: &str,
        campaign_update: CampaignUpdate,
    ) -> Result<Campaign> {
        campaign_update.validate()?;
        self.repository
            .update(organization_id, campaign_update)
            .await
    }

    async fn delete_campaign(&self, organization_id: &str, campaign_id: &str) -> Result<()> {
        self.repository.delete(organization_id, campaign_id).await?;
        Ok(())
    }

    fn get_campaign(&self, organization_id: &str, campaign_id: &str) -> Result<Campaign> {
        self.repository.get_by_id(organization_id, campaign_id)
    }

    fn list_campaigns(&self, organization_id: &str) -> Result<Vec<Campaign>> {
        self.repository.list(organization_id)
    }

    fn get_campaign_progress(
        &self,
        organization_id: &str,
        campaign_id: &str,
    ) -> Result<CampaignProgress> {
        let campaign = self.repository.get_by_id(organization_id, campaign_id)?;
        let donations = self
            .donation_repository
            .list_by_campaign(organization_id, campaign_id)?;
        Ok(campaign_progress(&campaign, &donations))
    }
}
