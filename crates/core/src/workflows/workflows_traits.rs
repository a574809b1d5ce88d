//! Workflow repository and service traits.

use async_trait::async_trait;

use super::workflows_model::{NewWorkflow, Workflow, WorkflowTrigger, WorkflowUpdate};
use crate::errors::Result;

/// Trait defining the contract for Workflow repository operations.
#[async_trait]
pub trait WorkflowRepositoryTrait: Send + Sync {
    /// Creates a new workflow.
    async fn create(&self, organization_id: &str, new_workflow: NewWorkflow) -> Result<Workflow>;

    /// Updates an existing workflow.
    async fn update(
        &self,
        organization_id: &str,
        workflow_update: WorkflowUpdate,
    ) -> Result<Workflow>;

    /// Deletes a workflow by its ID.
    async fn delete(&self, organization_id: &str, workflow_id: &str) -> Result<usize>;

    /// Retrieves a workflow by its ID.
    fn get_by_id(&self, organization_id: &str, workflow_id: &str) -> Result<Workflow>;

    /// Lists the organization's workflows.
    fn list(&self, organization_id: &str) -> Result<Vec<Workflow>>;

    /// Lists active workflows registered for a trigger.
    fn list_active_by_trigger(
        &self,
        organization_id: &str,
        trigger: WorkflowTrigger,
    ) -> Result<Vec<Workflow>>;

    /// Bumps the run counter and stamps the last run time.
    async fn record_run(&self, organization_id: &str, workflow_id: &str) -> Result<Workflow>;
}

/// Trait defining the contract for Workflow service operations.
#[async_trait]
pub trait WorkflowServiceTrait: Send + Sync {
    /// Creates a new workflow with business validation.
    async fn create_workflow(
        &self,
        organization_id: &str,
        new_workflow: NewWorkflow,
    ) -> Result<Workflow>;

    /// Updates an existing workflow with business validation.
    async fn update_workflow(
        &self,
        organization_id: &str,
        workflow_update: WorkflowUpdate,
    ) -> Result<Workflow>;

    /// Deletes a workflow.
    async fn delete_workflow(&self, organization_id: &str, workflow_id: &str) -> Result<()>;

    /// Retrieves a workflow by ID.
    fn get_workflow(&self, organization_id: &str, workflow_id: &str) -> Result<Workflow>;

    /// Lists the organization's workflows.
    fn list_workflows(&self, organization_id: &str) -> Result<Vec<Workflow>>;

    /// Runs every active workflow registered for the trigger against the
    /// subject donor. Returns the number of workflows that fired.
    async fn handle_trigger(
        &self,
        organization_id: &str,
        trigger: WorkflowTrigger,
        donor_id: &str,
    ) -> Result<usize>;
}
