use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use donorhub_core::errors::{DatabaseError, Error, Result};
use donorhub_core::workflows::{
    NewWorkflow, Workflow, WorkflowRepositoryTrait, WorkflowTrigger, WorkflowUpdate,
};

use super::model::{WorkflowChangeset, WorkflowDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::workflows;

/// Repository for managing workflow data in the database
pub struct WorkflowRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl WorkflowRepository {
    /// Creates a new WorkflowRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl WorkflowRepositoryTrait for WorkflowRepository {
    async fn create(&self, organization_id: &str, new_workflow: NewWorkflow) -> Result<Workflow> {
        let org = organization_id.to_string();
        self.writer
            .exec(move |conn| {
                let mut row = WorkflowDB::new_row(&org, new_workflow);
                if row.id.is_empty() {
                    row.id = uuid::Uuid::new_v4().to_string();
                }

                let inserted: WorkflowDB = diesel::insert_into(workflows::table)
                    .values(&row)
                    .returning(WorkflowDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(inserted.into())
            })
            .await
    }

    async fn update(
        &self,
        organization_id: &str,
        workflow_update: WorkflowUpdate,
    ) -> Result<Workflow> {
        let org = organization_id.to_string();
        let workflow_id = workflow_update.id.clone().unwrap_or_default();
        self.writer
            .exec(move |conn| {
                let changeset = WorkflowChangeset::from(workflow_update);
                let affected = diesel::update(
                    workflows::table
                        .filter(workflows::id.eq(&workflow_id))
                        .filter(workflows::organization_id.eq(&org)),
                )
                .set(&changeset)
                .execute(conn)
                .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Workflow {} not found",
                        workflow_id
                    ))));
                }

                let row: WorkflowDB = workflows::table
                    .filter(workflows::id.eq(&workflow_id))
                    .filter(workflows::organization_id.eq(&org))
                    .select(WorkflowDB::as_select())
                    .first(conn)
                    .map_err(StorageError::from)?;
                Ok(row.into())
            })
            .await
    }

    async fn delete(&self, organization_id: &str, workflow_id: &str) -> Result<usize> {
        let org = organization_id.to_string();
        let workflow_id = workflow_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected = diesel::delete(
                    workflows::table
                        .filter(workflows::id.eq(&workflow_id))
                        .filter(workflows::organization_id.eq(&org)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Workflow {} not found",
                        workflow_id
                    ))));
                }
                Ok(affected)
            })
            .await
    }

    fn get_by_id(&self, organization_id: &str, workflow_id: &str) -> Result<Workflow> {
        let mut conn = get_connection(&self.pool)?;

        let row: WorkflowDB = workflows::table
            .filter(workflows::id.eq(workflow_id))
            .filter(workflows::organization_id.eq(organization_id))
            .select(WorkflowDB::as_select())
            .first(&mut conn)
            .map_err(StorageError::from)?;
        Ok(row.into())
    }

    fn list(&self, organization_id: &str) -> Result<Vec<Workflow>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = workflows::table
            .filter(workflows::organization_id.eq(organization_id))
            .select(WorkflowDB::as_select())
            .order(workflows::name.asc())
            .load::<WorkflowDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Workflow::from).collect())
    }

    fn list_active_by_trigger(
        &self,
        organization_id: &str,
        trigger: WorkflowTrigger,
    ) -> Result<Vec<Workflow>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = workflows::table
            .filter(workflows::organization_id.eq(organization_id))
            .filter(workflows::trigger.eq(trigger.as_str()))
            .filter(workflows::is_active.eq(true))
            .select(WorkflowDB::as_select())
            .order(workflows::name.asc())
            .load::<WorkflowDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Workflow::from).collect())
    }

    async fn record_run(&self, organization_id: &str, workflow_id: &str) -> Result<Workflow> {
        let org = organization_id.to_string();
        let workflow_id = workflow_id.to_string();
        self.writer
            .exec(move |conn| {
                let now = chrono::Utc::now().naive_utc();
                let affected = diesel::update(
                    workflows::table
                        .filter(workflows::id.eq(&workflow_id))
                        .filter(workflows::organization_id.eq(&org)),
                )
                .set((
                    workflows::run_count.eq(workflows::run_count + 1),
                    workflows::last_run_at.eq(Some(now)),
                    workflows::updated_at.eq(now),
                ))
                .execute(conn)
                .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Workflow {} not found",
                        workflow_id
                    ))));
                }

                let row: WorkflowDB = workflows::table
                    .filter(workflows::id.eq(&workflow_id))
                    .filter(workflows::organization_id.eq(&org))
                    .select(WorkflowDB::as_select())
                    .first(conn)
                    .map_err(StorageError::from)?;
                Ok(row.into())
            })
            .await
    }
}
