//! Campaigns module - fundraising campaigns and their progress.

mod campaigns_model;
mod campaigns_service;
mod campaigns_traits;

// Re-export the public interface
pub use campaigns_model::{
    campaign_progress, Campaign, CampaignProgress, CampaignStatus, CampaignUpdate, NewCampaign,
};
pub use campaigns_service::CampaignService;
pub use campaigns_traits::{CampaignRepositoryTrait, CampaignServiceTrait};
