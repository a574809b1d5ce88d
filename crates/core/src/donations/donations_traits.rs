//! Donation repository and service traits.

use async_trait::async_trait;

use super::donations_model::{Donation, DonationUpdate, NewDonation};
use crate::errors::Result;

/// Trait defining the contract for Donation repository operations.
///
/// The ledger is append-only from the metrics engine's point of view;
/// updates and deletes exist for administrative corrections and must be
/// followed by a recomputation of the owning donor's metrics.
#[async_trait]
pub trait DonationRepositoryTrait: Send + Sync {
    /// Records a new donation.
    async fn create(&self, organization_id: &str, new_donation: NewDonation) -> Result<Donation>;

    /// Applies an administrative edit to a donation.
    async fn update(
        &self,
        organization_id: &str,
        donation_update: DonationUpdate,
    ) -> Result<Donation>;

    /// Deletes a donation and returns the deleted record.
    async fn delete(&self, organization_id: &str, donation_id: &str) -> Result<Donation>;

    /// Retrieves a donation by its ID.
    fn get_by_id(&self, organization_id: &str, donation_id: &str) -> Result<Donation>;

    /// The complete current ledger for one donor, most recent gift first.
    /// Callers must not rely on the ordering for correctness.
    fn list_by_donor(&self, organization_id: &str, donor_id: &str) -> Result<Vec<Donation>>;

    /// All donations recorded for the organization.
    fn list_by_org(&self, organization_id: &str) -> Result<Vec<Donation>>;

    /// All donations attributed to a campaign.
    fn list_by_campaign(&self, organization_id: &str, campaign_id: &str) -> Result<Vec<Donation>>;
}

/// Trait defining the contract for Donation service operations.
#[async_trait]
pub trait DonationServiceTrait: Send + Sync {
    /// Records a donation and synchronously recomputes the donor's metrics.
    async fn create_donation(
        &self,
        organization_id: &str,
        new_donation: NewDonation,
    ) -> Result<Donation>;

    /// Edits a donation. Recomputes donor metrics only when the edit
    /// changes the amount or the gift date.
    async fn update_donation(
        &self,
        organization_id: &str,
        donation_update: DonationUpdate,
    ) -> Result<Donation>;

    /// Deletes a donation and recomputes the owning donor's metrics.
    async fn delete_donation(&self, organization_id: &str, donation_id: &str) -> Result<Donation>;

    /// Retrieves a donation by ID.
    fn get_donation(&self, organization_id: &str, donation_id: &str) -> Result<Donation>;

    /// Lists a donor's donations.
    fn get_donations_by_donor(
        &self,
        organization_id: &str,
        donor_id: &str,
    ) -> Result<Vec<Donation>>;

    /// Lists all donations for the organization.
    fn get_donations(&self, organization_id: &str) -> Result<Vec<Donation>>;

    /// Lists donations attributed to a campaign.
    fn get_donations_by_campaign(
        &self,
        organization_id: &str,
        campaign_id: &str,
    ) -> Result<Vec<Donation>>;
}
