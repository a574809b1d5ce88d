//! Workflow domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{errors::ValidationError, Error, Result};

/// Event that fires a workflow. Triggers are evaluated synchronously on
/// the write path that produced the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowTrigger {
    DonationCreated,
    DonorCreated,
    RetentionRiskChanged,
}

impl WorkflowTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowTrigger::DonationCreated => "DONATION_CREATED",
            WorkflowTrigger::DonorCreated => "DONOR_CREATED",
            WorkflowTrigger::RetentionRiskChanged => "RETENTION_RISK_CHANGED",
        }
    }

    pub fn from_db_str(value: &str) -> Option<Self> {
        match value {
            "DONATION_CREATED" => Some(WorkflowTrigger::DonationCreated),
            "DONOR_CREATED" => Some(WorkflowTrigger::DonorCreated),
            "RETENTION_RISK_CHANGED" => Some(WorkflowTrigger::RetentionRiskChanged),
            _ => None,
        }
    }
}

/// What a fired workflow does. Email delivery and task creation happen in
/// external systems; the engine records the intent and, for `AddTag`,
/// applies the tag itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowAction {
    SendEmail,
    AddTag,
    CreateTask,
}

impl WorkflowAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowAction::SendEmail => "SEND_EMAIL",
            WorkflowAction::AddTag => "ADD_TAG",
            WorkflowAction::CreateTask => "CREATE_TASK",
        }
    }

    pub fn from_db_str(value: &str) -> Option<Self> {
        match value {
            "SEND_EMAIL" => Some(WorkflowAction::SendEmail),
            "ADD_TAG" => Some(WorkflowAction::AddTag),
            "CREATE_TASK" => Some(WorkflowAction::CreateTask),
            _ => None,
        }
    }
}

/// Domain model representing an automation workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub trigger: WorkflowTrigger,
    pub action: WorkflowAction,
    /// Action parameters as a JSON object string (e.g. `{"tag":"lapsed"}`)
    pub action_params: Option<String>,
    pub is_active: bool,
    pub run_count: i64,
    pub last_run_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Workflow {
    /// Reads one string parameter from the action params blob.
    pub fn param(&self, key: &str) -> Option<String> {
        self.action_params
            .as_ref()
            .and_then(|raw| serde_json::from_str::<Value>(raw).ok())
            .and_then(|json| json.get(key).and_then(|v| v.as_str().map(String::from)))
    }
}

fn validate_params(action_params: &Option<String>) -> Result<()> {
    if let Some(raw) = action_params.as_deref() {
        if !raw.is_empty() && serde_json::from_str::<Value>(raw).is_err() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Workflow action parameters must be valid JSON".to_string(),
            )));
        }
    }
    Ok(())
}

/// Input model for creating a new workflow.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkflow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub trigger: WorkflowTrigger,
    pub action: WorkflowAction,
    pub action_params: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl NewWorkflow {
    /// Validates the new workflow data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Workflow name cannot be empty".to_string(),
            )));
        }
        validate_params(&self.action_params)
    }
}

/// Input model for updating an existing workflow.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowUpdate {
    pub id: Option<String>,
    pub name: String,
    pub trigger: WorkflowTrigger,
    pub action: WorkflowAction,
    pub action_params: Option<String>,
    pub is_active: bool,
}

impl WorkflowUpdate {
    /// Validates the workflow update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Workflow ID is required for updates".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Workflow name cannot be empty".to_string(),
            )));
        }
        validate_params(&self.action_params)
    }
}
