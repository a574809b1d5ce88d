use log::{info, warn};
use std::sync::Arc;

use super::workflows_model::{
    NewWorkflow, Workflow, WorkflowAction, WorkflowTrigger, WorkflowUpdate,
};
use super::workflows_traits::{WorkflowRepositoryTrait, WorkflowServiceTrait};
use crate::donors::{add_tag, DonorRepositoryTrait, DonorUpdate};
use crate::errors::Result;

/// Service for managing and firing workflows.
///
/// Triggers run inline on the write path that raised them; there is no
/// background scheduler. Email and task actions only record intent here -
/// delivery belongs to external systems.
pub struct WorkflowService {
    repository: Arc<dyn WorkflowRepositoryTrait>,
    donor_repository: Arc<dyn DonorRepositoryTrait>,
}

impl WorkflowService {
    /// Creates a new WorkflowService instance
    pub fn new(
        repository: Arc<dyn WorkflowRepositoryTrait>,
        donor_repository: Arc<dyn DonorRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            donor_repository,
        }
    }

    async fn apply_action(
        &self,
        organization_id: &str,
        workflow: &Workflow,
        donor_id: &str,
    ) -> Result<()> {
        match workflow.action {
            WorkflowAction::AddTag => {
                let Some(tag) = workflow.param("tag") else {
                    warn!(
                        "Workflow '{}' has ADD_TAG action without a 'tag' parameter",
                        workflow.name
                    );
                    return Ok(());
                };
                let donor = self.donor_repository.get_by_id(organization_id, donor_id)?;
                let update = DonorUpdate {
                    id: Some(donor.id.clone()),
                    first_name: donor.first_name,
                    last_name: donor.last_name,
                    email: donor.email,
                    phone: donor.phone,
                    address: donor.address,
                    city: donor.city,
                    state: donor.state,
                    zip_code: donor.zip_code,
                    status: donor.status,
                    notes: donor.notes,
                    tags: Some(add_tag(donor.tags, &tag)),
                };
                self.donor_repository.update(organization_id, update).await?;
            }
            WorkflowAction::SendEmail | WorkflowAction::CreateTask => {
                info!(
                    "Workflow '{}' queued {} for donor {}",
                    workflow.name,
                    workflow.action.as_str(),
                    donor_id
                );
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl WorkflowServiceTrait for WorkflowService {
    async fn create_workflow(
        &self,
        organization_id: &str,
        new_workflow: NewWorkflow,
    ) -> Result<Workflow> {
        new_workflow.validate()?;
        self.repository.create(organization_id, new_workflow).await
    }

    async fn update_workflow(
        &self,
        organization_id: &str,
        workflow_update: WorkflowUpdate,
    ) -> Result<Workflow> {
        workflow_update.validate()?;
        self.repository
            .update(organization_id, workflow_update)
            .await
    }

    async fn delete_workflow(&self, organization_id: &str, workflow_id: &str) -> Result<()> {
        self.repository.delete(organization_id, workflow_id).await?;
        Ok(())
    }

    fn get_workflow(&self, organization_id: &str, workflow_id: &str) -> Result<Workflow> {
        self.repository.get_by_id(organization_id, workflow_id)
    }

    fn list_workflows(&self, organization_id: &str) -> Result<Vec<Workflow>> {
        self.repository.list(organization_id)
    }

    async fn handle_trigger(
        &self,
        organization_id: &str,
        trigger: WorkflowTrigger,
        donor_id: &str,
    ) -> Result<usize> {
        let workflows = self
            .repository
            .list_active_by_trigger(organization_id, trigger)?;

        let mut fired = 0;
        for workflow in &workflows {
            self.apply_action(organization_id, workflow, donor_id)
                .await?;
            self.repository
                .record_run(organization_id, &workflow.id)
                .await?;
            fired += 1;
        }

        Ok(fired)
    }
}
