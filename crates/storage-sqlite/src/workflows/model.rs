//! Database models for workflows.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use donorhub_core::workflows::{
    NewWorkflow, Workflow, WorkflowAction, WorkflowTrigger, WorkflowUpdate,
};

/// Database model for workflows
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::workflows)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WorkflowDB {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub trigger: String,
    pub action: String,
    pub action_params: Option<String>,
    pub is_active: bool,
    pub run_count: i64,
    pub last_run_at: Option<NaiveDateTime>,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
    #[diesel(skip_insertion)]
    pub updated_at: NaiveDateTime,
}

impl WorkflowDB {
    pub fn new_row(organization_id: &str, domain: NewWorkflow) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            organization_id: organization_id.to_string(),
            name: domain.name,
            trigger: domain.trigger.as_str().to_string(),
            action: domain.action.as_str().to_string(),
            action_params: domain.action_params,
            is_active: domain.is_active,
            run_count: 0,
            last_run_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<WorkflowDB> for Workflow {
    fn from(db: WorkflowDB) -> Self {
        // Rows are only written through the typed enums; an unknown value
        // means out-of-band edits and is logged rather than dropped.
        let trigger = WorkflowTrigger::from_db_str(&db.trigger).unwrap_or_else(|| {
            log::error!(
                "Unknown trigger '{}' on workflow {}; treating as DONATION_CREATED",
                db.trigger,
                db.id
            );
            WorkflowTrigger::DonationCreated
        });
        let action = WorkflowAction::from_db_str(&db.action).unwrap_or_else(|| {
            log::error!(
                "Unknown action '{}' on workflow {}; treating as SEND_EMAIL",
                db.action,
                db.id
            );
            WorkflowAction::SendEmail
        });
        Self {
            id: db.id,
            organization_id: db.organization_id,
            name: db.name,
            trigger,
            action,
            action_params: db.action_params,
            is_active: db.is_active,
            run_count: db.run_count,
            last_run_at: db.last_run_at,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

/// Changeset for workflow edits. Run bookkeeping is managed separately by
/// `record_run`.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::workflows)]
#[diesel(treat_none_as_null = true)]
pub struct WorkflowChangeset {
    pub name: String,
    pub trigger: String,
    pub action: String,
    pub action_params: Option<String>,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl From<WorkflowUpdate> for WorkflowChangeset {
    fn from(domain: WorkflowUpdate) -> Self {
        Self {
            name: domain.name,
            trigger: domain.trigger.as_str().to_string(),
            action: domain.action.as_str().to_string(),
            action_params: domain.action_params,
            is_active: domain.is_active,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
