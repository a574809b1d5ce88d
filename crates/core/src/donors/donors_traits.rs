//! Donor repository and service traits.
//!
//! These traits define the contract for donor operations without any
//! database-specific types, allowing for different storage implementations.
//! Every method is scoped to an organization: a record outside the caller's
//! organization behaves exactly like a missing record.

use async_trait::async_trait;

use super::donors_model::{Donor, DonorStatus, DonorUpdate, NewDonor};
use crate::errors::Result;
use crate::metrics::DonorMetricsUpdate;

/// Trait defining the contract for Donor repository operations.
#[async_trait]
pub trait DonorRepositoryTrait: Send + Sync {
    /// Creates a new donor with zero/default metrics.
    async fn create(&self, organization_id: &str, new_donor: NewDonor) -> Result<Donor>;

    /// Updates a donor's identity, contact, and status fields.
    ///
    /// Must leave the metric fields untouched regardless of input.
    async fn update(&self, organization_id: &str, donor_update: DonorUpdate) -> Result<Donor>;

    /// Deletes a donor by its ID. The donor's donations are removed with it.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, organization_id: &str, donor_id: &str) -> Result<usize>;

    /// Retrieves a donor by its ID.
    fn get_by_id(&self, organization_id: &str, donor_id: &str) -> Result<Donor>;

    /// Lists donors, optionally filtered by status.
    fn list(&self, organization_id: &str, status_filter: Option<DonorStatus>)
        -> Result<Vec<Donor>>;

    /// Searches donors by name or email substring.
    fn search(&self, organization_id: &str, query: &str) -> Result<Vec<Donor>>;

    /// Replaces all five derived metric fields in a single write.
    ///
    /// This is the only path that may set metric fields. The write is
    /// all-or-nothing: a failure leaves the previous values in place.
    async fn update_metrics(
        &self,
        organization_id: &str,
        donor_id: &str,
        metrics: DonorMetricsUpdate,
    ) -> Result<Donor>;
}

/// Trait defining the contract for Donor service operations.
#[async_trait]
pub trait DonorServiceTrait: Send + Sync {
    /// Creates a new donor with business validation.
    async fn create_donor(&self, organization_id: &str, new_donor: NewDonor) -> Result<Donor>;

    /// Updates an existing donor with business validation.
    async fn update_donor(
        &self,
        organization_id: &str,
        donor_update: DonorUpdate,
    ) -> Result<Donor>;

    /// Deletes a donor and its donations.
    async fn delete_donor(&self, organization_id: &str, donor_id: &str) -> Result<()>;

    /// Retrieves a donor by ID.
    fn get_donor(&self, organization_id: &str, donor_id: &str) -> Result<Donor>;

    /// Lists donors with an optional status filter.
    fn list_donors(
        &self,
        organization_id: &str,
        status_filter: Option<DonorStatus>,
    ) -> Result<Vec<Donor>>;

    /// Searches donors by name or email.
    fn search_donors(&self, organization_id: &str, query: &str) -> Result<Vec<Donor>>;
}
