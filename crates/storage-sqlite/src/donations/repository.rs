use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use donorhub_core::donations::{
    Donation, DonationRepositoryTrait, DonationUpdate, NewDonation,
};
use donorhub_core::errors::{DatabaseError, Error, Result};

use super::model::{DonationChangeset, DonationDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::donations;

/// Repository for managing donation data in the database
pub struct DonationRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl DonationRepository {
    /// Creates a new DonationRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl DonationRepositoryTrait for DonationRepository {
    async fn create(&self, organization_id: &str, new_donation: NewDonation) -> Result<Donation> {
        let org = organization_id.to_string();
        self.writer
            .exec(move |conn| {
                let mut row = DonationDB::new_row(&org, new_donation);
                if row.id.is_empty() {
                    row.id = uuid::Uuid::new_v4().to_string();
                }

                let inserted: DonationDB = diesel::insert_into(donations::table)
                    .values(&row)
                    .returning(DonationDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(inserted.into())
            })
            .await
    }

    async fn update(
        &self,
        organization_id: &str,
        donation_update: DonationUpdate,
    ) -> Result<Donation> {
        let org = organization_id.to_string();
        let donation_id = donation_update.id.clone().unwrap_or_default();
        self.writer
            .exec(move |conn| {
                let changeset = DonationChangeset::from(donation_update);
                let affected = diesel::update(
                    donations::table
                        .filter(donations::id.eq(&donation_id))
                        .filter(donations::organization_id.eq(&org)),
                )
                .set(&changeset)
                .execute(conn)
                .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Donation {} not found",
                        donation_id
                    ))));
                }

                let row: DonationDB = donations::table
                    .filter(donations::id.eq(&donation_id))
                    .filter(donations::organization_id.eq(&org))
                    .select(DonationDB::as_select())
                    .first(conn)
                    .map_err(StorageError::from)?;
                Ok(row.into())
            })
            .await
    }

    async fn delete(&self, organization_id: &str, donation_id: &str) -> Result<Donation> {
        let org = organization_id.to_string();
        let donation_id = donation_id.to_string();
        self.writer
            .exec(move |conn| {
                // Fetch first so the caller learns which donor to recompute.
                let row: DonationDB = donations::table
                    .filter(donations::id.eq(&donation_id))
                    .filter(donations::organization_id.eq(&org))
                    .select(DonationDB::as_select())
                    .first(conn)
                    .map_err(StorageError::from)?;

                diesel::delete(
                    donations::table
                        .filter(donations::id.eq(&donation_id))
                        .filter(donations::organization_id.eq(&org)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;

                Ok(row.into())
            })
            .await
    }

    fn get_by_id(&self, organization_id: &str, donation_id: &str) -> Result<Donation> {
        let mut conn = get_connection(&self.pool)?;

        let row: DonationDB = donations::table
            .filter(donations::id.eq(donation_id))
            .filter(donations::organization_id.eq(organization_id))
            .select(DonationDB::as_select())
            .first(&mut conn)
            .map_err(StorageError::from)?;
        Ok(row.into())
    }

    fn list_by_donor(&self, organization_id: &str, donor_id: &str) -> Result<Vec<Donation>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = donations::table
            .filter(donations::donor_id.eq(donor_id))
            .filter(donations::organization_id.eq(organization_id))
            .select(DonationDB::as_select())
            .order(donations::date.desc())
            .load::<DonationDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Donation::from).collect())
    }

    fn list_by_org(&self, organization_id: &str) -> Result<Vec<Donation>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = donations::table
            .filter(donations::organization_id.eq(organization_id))
            .select(DonationDB::as_select())
            .order(donations::date.desc())
            .load::<DonationDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Donation::from).collect())
    }

    fn list_by_campaign(&self, organization_id: &str, campaign_id: &str) -> Result<Vec<Donation>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = donations::table
            .filter(donations::campaign_id.eq(campaign_id))
            .filter(donations::organization_id.eq(organization_id))
            .select(DonationDB::as_select())
            .order(donations::date.desc())
            .load::<DonationDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Donation::from).collect())
    }
}
