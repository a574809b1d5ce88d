use log::{debug, warn};
use std::sync::Arc;

use super::donations_model::{Donation, DonationUpdate, NewDonation};
use super::donations_traits::{DonationRepositoryTrait, DonationServiceTrait};
use crate::donors::DonorRepositoryTrait;
use crate::errors::Result;
use crate::metrics::DonorMetricsServiceTrait;
use crate::workflows::{WorkflowServiceTrait, WorkflowTrigger};

/// Service for managing the donation ledger.
///
/// Every mutation that can move a donor's totals or gift dates ends with a
/// synchronous, full-ledger recomputation of that donor's cached metrics.
pub struct DonationService {
    donation_repository: Arc<dyn DonationRepositoryTrait>,
    donor_repository: Arc<dyn DonorRepositoryTrait>,
    metrics_service: Arc<dyn DonorMetricsServiceTrait>,
    workflow_engine: Option<Arc<dyn WorkflowServiceTrait>>,
}

impl DonationService {
    /// Creates a new DonationService instance with injected dependencies
    pub fn new(
        donation_repository: Arc<dyn DonationRepositoryTrait>,
        donor_repository: Arc<dyn DonorRepositoryTrait>,
        metrics_service: Arc<dyn DonorMetricsServiceTrait>,
    ) -> Self {
        Self {
            donation_repository,
            donor_repository,
            metrics_service,
            workflow_engine: None,
        }
    }

    /// Attaches a workflow engine notified after ledger mutations.
    pub fn with_workflow_engine(mut self, workflow_engine: Arc<dyn WorkflowServiceTrait>) -> Self {
        self.workflow_engine = Some(workflow_engine);
        self
    }

    async fn fire_trigger(&self, organization_id: &str, trigger: WorkflowTrigger, subject: &str) {
        if let Some(engine) = &self.workflow_engine {
            if let Err(e) = engine.handle_trigger(organization_id, trigger, subject).await {
                warn!("Workflow trigger {:?} failed for {}: {}", trigger, subject, e);
            }
        }
    }

    /// Recomputes the donor's metrics and fires the risk-changed trigger
    /// when the persisted classification moved.
    async fn recompute_and_notify(&self, organization_id: &str, donor_id: &str) -> Result<()> {
        let before = self.donor_repository.get_by_id(organization_id, donor_id)?;
        let after = self
            .metrics_service
            .recompute_donor_metrics(organization_id, donor_id)
            .await?;

        if before.retention_risk != after.retention_risk {
            debug!(
                "Donor {} retention risk moved {:?} -> {:?}",
                donor_id, before.retention_risk, after.retention_risk
            );
            self.fire_trigger(
                organization_id,
                WorkflowTrigger::RetentionRiskChanged,
                donor_id,
            )
            .await;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl DonationServiceTrait for DonationService {
    async fn create_donation(
        &self,
        organization_id: &str,
        new_donation: NewDonation,
    ) -> Result<Donation> {
        new_donation.validate()?;

        // Surface a missing (or cross-organization) donor before touching
        // the ledger.
        self.donor_repository
            .get_by_id(organization_id, &new_donation.donor_id)?;

        let donation = self
            .donation_repository
            .create(organization_id, new_donation)
            .await?;

        self.recompute_and_notify(organization_id, &donation.donor_id)
            .await?;
        self.fire_trigger(
            organization_id,
            WorkflowTrigger::DonationCreated,
            &donation.donor_id,
        )
        .await;

        Ok(donation)
    }

    async fn update_donation(
        &self,
        organization_id: &str,
        donation_update: DonationUpdate,
    ) -> Result<Donation> {
        donation_update.validate()?;

        let donation_id = donation_update.id.clone().unwrap_or_default();
        let existing = self
            .donation_repository
            .get_by_id(organization_id, &donation_id)?;
        let needs_recompute = donation_update.affects_metrics(&existing);

        let updated = self
            .donation_repository
            .update(organization_id, donation_update)
            .await?;

        if needs_recompute {
            self.recompute_and_notify(organization_id, &updated.donor_id)
                .await?;
        }

        Ok(updated)
    }

    async fn delete_donation(&self, organization_id: &str, donation_id: &str) -> Result<Donation> {
        let deleted = self
            .donation_repository
            .delete(organization_id, donation_id)
            .await?;

        self.recompute_and_notify(organization_id, &deleted.donor_id)
            .await?;

        Ok(deleted)
    }

    fn get_donation(&self, organization_id: &str, donation_id: &str) -> Result<Donation> {
        self.donation_repository
            .get_by_id(organization_id, donation_id)
    }

    fn get_donations_by_donor(
        &self,
        organization_id: &str,
        donor_id: &str,
    ) -> Result<Vec<Donation>> {
        self.donation_repository
            .list_by_donor(organization_id, donor_id)
    }

    fn get_donations(&self, organization_id: &str) -> Result<Vec<Donation>> {
        self.donation_repository.list_by_org(organization_id)
    }

    fn get_donations_by_campaign(
        &self,
        organization_id: &str,
        campaign_id: &str,
    ) -> Result<Vec<Donation>> {
        self.donation_repository
            .list_by_campaign(organization_id, campaign_id)
    }
}
