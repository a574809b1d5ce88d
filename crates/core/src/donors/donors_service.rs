use log::{debug, warn};
use std::sync::Arc;

use super::donors_model::{Donor, DonorStatus, DonorUpdate, NewDonor};
use super::donors_traits::{DonorRepositoryTrait, DonorServiceTrait};
use crate::errors::Result;
use crate::workflows::{WorkflowServiceTrait, WorkflowTrigger};

/// Service for managing donors
pub struct DonorService {
    repository: Arc<dyn DonorRepositoryTrait>,
    workflow_engine: Option<Arc<dyn WorkflowServiceTrait>>,
}

impl DonorService {
    /// Creates a new DonorService instance
    pub fn new(repository: Arc<dyn DonorRepositoryTrait>) -> Self {
        Self {
            repository,
            workflow_engine: None,
        }
    }

    /// Attaches a workflow engine notified after donor creation.
    pub fn with_workflow_engine(mut self, workflow_engine: Arc<dyn WorkflowServiceTrait>) -> Self {
        self.workflow_engine = Some(workflow_engine);
        self
    }

    /// Workflow failures never fail the write that triggered them.
    async fn fire_trigger(&self, organization_id: &str, trigger: WorkflowTrigger, subject: &str) {
        if let Some(engine) = &self.workflow_engine {
            if let Err(e) = engine.handle_trigger(organization_id, trigger, subject).await {
                warn!("Workflow trigger {:?} failed for {}: {}", trigger, subject, e);
            }
        }
    }
}

#[async_trait::async_trait]
impl DonorServiceTrait for DonorService {
    async fn create_donor(&self, organization_id: &str, new_donor: NewDonor) -> Result<Donor> {
        new_donor.validate()?;
        debug!("Creating donor '{}'...", new_donor.first_name);

        let donor = self.repository.create(organization_id, new_donor).await?;
        self.fire_trigger(organization_id, WorkflowTrigger::DonorCreated, &donor.id)
            .await;
        Ok(donor)
    }

    async fn update_donor(
        &self,
        organization_id: &str,
        donor_update: DonorUpdate,
    ) -> Result<Donor> {
        donor_update.validate()?;
        self.repository.update(organization_id, donor_update).await
    }

    async fn delete_donor(&self, organization_id: &str, donor_id: &str) -> Result<()> {
        self.repository.delete(organization_id, donor_id).await?;
        Ok(())
    }

    fn get_donor(&self, organization_id: &str, donor_id: &str) -> Result<Donor> {
        self.repository.get_by_id(organization_id, donor_id)
    }

    fn list_donors(
        &self,
        organization_id: &str,
        status_filter: Option<DonorStatus>,
    ) -> Result<Vec<Donor>> {
        self.repository.list(organization_id, status_filter)
    }

    fn search_donors(&self, organization_id: &str, query: &str) -> Result<Vec<Donor>> {
        self.repository.search(organization_id, query)
    }
}
