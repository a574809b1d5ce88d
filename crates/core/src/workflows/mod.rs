//! Workflows module - staff-defined automation rules fired from the
//! write paths.

mod workflows_model;
mod workflows_service;
mod workflows_traits;

// Re-export the public interface
pub use workflows_model::{
    NewWorkflow, Workflow, WorkflowAction, WorkflowTrigger, WorkflowUpdate,
};
pub use workflows_service::WorkflowService;
pub use workflows_traits::{WorkflowRepositoryTrait, WorkflowServiceTrait};
