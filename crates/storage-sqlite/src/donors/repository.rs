use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use donorhub_core::donors::{Donor, DonorRepositoryTrait, DonorStatus, DonorUpdate, NewDonor};
use donorhub_core::errors::{DatabaseError, Error, Result};
use donorhub_core::metrics::DonorMetricsUpdate;

use super::model::{DonorDB, DonorMetricsChangeset, DonorProfileChangeset};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::donors;

/// Repository for managing donor data in the database
pub struct DonorRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl DonorRepository {
    /// Creates a new DonorRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl DonorRepositoryTrait for DonorRepository {
    async fn create(&self, organization_id: &str, new_donor: NewDonor) -> Result<Donor> {
        let org = organization_id.to_string();
        self.writer
            .exec(move |conn| {
                let mut row = DonorDB::new_row(&org, new_donor);
                if row.id.is_empty() {
                    row.id = uuid::Uuid::new_v4().to_string();
                }

                let inserted: DonorDB = diesel::insert_into(donors::table)
                    .values(&row)
                    .returning(DonorDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(inserted.into())
            })
            .await
    }

    async fn update(&self, organization_id: &str, donor_update: DonorUpdate) -> Result<Donor> {
        let org = organization_id.to_string();
        let donor_id = donor_update.id.clone().unwrap_or_default();
        self.writer
            .exec(move |conn| {
                let changeset = DonorProfileChangeset::from(donor_update);
                let affected = diesel::update(
                    donors::table
                        .filter(donors::id.eq(&donor_id))
                        .filter(donors::organization_id.eq(&org)),
                )
                .set(&changeset)
                .execute(conn)
                .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Donor {} not found",
                        donor_id
                    ))));
                }

                let row: DonorDB = donors::table
                    .filter(donors::id.eq(&donor_id))
                    .filter(donors::organization_id.eq(&org))
                    .select(DonorDB::as_select())
                    .first(conn)
                    .map_err(StorageError::from)?;
                Ok(row.into())
            })
            .await
    }

    async fn delete(&self, organization_id: &str, donor_id: &str) -> Result<usize> {
        let org = organization_id.to_string();
        let donor_id = donor_id.to_string();
        self.writer
            .exec(move |conn| {
                // Donations go with the donor via ON DELETE CASCADE.
                let affected = diesel::delete(
                    donors::table
                        .filter(donors::id.eq(&donor_id))
                        .filter(donors::organization_id.eq(&org)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Donor {} not found",
                        donor_id
                    ))));
                }
                Ok(affected)
            })
            .await
    }

    fn get_by_id(&self, organization_id: &str, donor_id: &str) -> Result<Donor> {
        let mut conn = get_connection(&self.pool)?;

        let row: DonorDB = donors::table
            .filter(donors::id.eq(donor_id))
            .filter(donors::organization_id.eq(organization_id))
            .select(DonorDB::as_select())
            .first(&mut conn)
            .map_err(StorageError::from)?;
        Ok(row.into())
    }

    fn list(
        &self,
        organization_id: &str,
        status_filter: Option<DonorStatus>,
    ) -> Result<Vec<Donor>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = donors::table
            .filter(donors::organization_id.eq(organization_id))
            .into_boxed();

        if let Some(status) = status_filter {
            query = query.filter(donors::status.eq(status.as_str()));
        }

        let rows = query
            .select(DonorDB::as_select())
            .order((donors::last_name.asc(), donors::first_name.asc()))
            .load::<DonorDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Donor::from).collect())
    }

    fn search(&self, organization_id: &str, query: &str) -> Result<Vec<Donor>> {
        let mut conn = get_connection(&self.pool)?;
        let pattern = format!("%{}%", query.trim());

        let rows = donors::table
            .filter(donors::organization_id.eq(organization_id))
            .filter(
                donors::first_name
                    .like(&pattern)
                    .nullable()
                    .or(donors::last_name.like(&pattern).nullable())
                    .or(donors::email.like(&pattern)),
            )
            .select(DonorDB::as_select())
            .order((donors::last_name.asc(), donors::first_name.asc()))
            .load::<DonorDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Donor::from).collect())
    }

    async fn update_metrics(
        &self,
        organization_id: &str,
        donor_id: &str,
        metrics: DonorMetricsUpdate,
    ) -> Result<Donor> {
        let org = organization_id.to_string();
        let donor_id = donor_id.to_string();
        self.writer
            .exec(move |conn| {
                let changeset = DonorMetricsChangeset::from(metrics);

                // One UPDATE carries all five derived columns; a failure
                // here leaves the previous values fully intact.
                let affected = diesel::update(
                    donors::table
                        .filter(donors::id.eq(&donor_id))
                        .filter(donors::organization_id.eq(&org)),
                )
                .set(&changeset)
                .execute(conn)
                .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Donor {} not found",
                        donor_id
                    ))));
                }

                let row: DonorDB = donors::table
                    .filter(donors::id.eq(&donor_id))
                    .filter(donors::organization_id.eq(&org))
                    .select(DonorDB::as_select())
                    .first(conn)
                    .map_err(StorageError::from)?;
                Ok(row.into())
            })
            .await
    }
}
