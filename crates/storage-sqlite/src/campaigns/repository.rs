use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use donorhub_core::campaigns::{
    Campaign, CampaignRepositoryTrait, CampaignUpdate, NewCampaign,
};
use donorhub_core::errors::{DatabaseError, Error, Result};

use super::model::{CampaignChangeset, CampaignDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::campaigns;

/// Repository for managing campaign data in the database
pub struct CampaignRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CampaignRepository {
    /// Creates a new CampaignRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl CampaignRepositoryTrait for CampaignRepository {
    async fn create(&self, organization_id: &str, new_campaign: NewCampaign) -> Result<Campaign> {
        let org = organization_id.to_string();
        self.writer
            .exec(move |conn| {
                let mut row = CampaignDB::new_row(&org, new_campaign);
                if row.id.is_empty() {
                    row.id = uuid::Uuid::new_v4().to_string();
                }

                let inserted: CampaignDB = diesel::insert_into(campaigns::table)
                    .values(&row)
                    .returning(CampaignDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(inserted.into())
            })
            .await
    }

    async fn update(
        &self,
        organization_id: &str,
        campaign_update: CampaignUpdate,
    ) -> Result<Campaign> {
        let org = organization_id.to_string();
        let campaign_id = campaign_update.id.clone().unwrap_or_default();
        self.writer
            .exec(move |conn| {
                let changeset = CampaignChangeset::from(campaign_update);
                let affected = diesel::update(
                    campaigns::table
                        .filter(campaigns::id.eq(&campaign_id))
                        .filter(campaigns::organization_id.eq(&org)),
                )
                .set(&changeset)
                .execute(conn)
                .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Campaign {} not found",
                        campaign_id
                    ))));
                }

                let row: CampaignDB = campaigns::table
                    .filter(campaigns::id.eq(&campaign_id))
                    .filter(campaigns::organization_id.eq(&org))
                    .select(CampaignDB::as_select())
                    .first(conn)
                    .map_err(StorageError::from)?;
                Ok(row.into())
            })
            .await
    }

    async fn delete(&self, organization_id: &str, campaign_id: &str) -> Result<usize> {
        let org = organization_id.to_string();
        let campaign_id = campaign_id.to_string();
        self.writer
            .exec(move |conn| {
                // Donations referencing the campaign keep their rows; the
                // foreign key clears campaign_id (ON DELETE SET NULL).
                let affected = diesel::delete(
                    campaigns::table
                        .filter(campaigns::id.eq(&campaign_id))
                        .filter(campaigns::organization_id.eq(&org)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Campaign {} not found",
                        campaign_id
                    ))));
                }
                Ok(affected)
            })
            .await
    }

    fn get_by_id(&self, organization_id: &str, campaign_id: &str) -> Result<Campaign> {
        let mut conn = get_connection(&self.pool)?;

        let row: CampaignDB = campaigns::table
            .filter(campaigns::id.eq(campaign_id))
            .filter(campaigns::organization_id.eq(organization_id))
            .select(CampaignDB::as_select())
            .first(&mut conn)
            .map_err(StorageError::from)?;
        Ok(row.into())
    }

    fn list(&self, organization_id: &str) -> Result<Vec<Campaign>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = campaigns::table
            .filter(campaigns::organization_id.eq(organization_id))
            .select(CampaignDB::as_select())
            .order(campaigns::name.asc())
            .load::<CampaignDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Campaign::from).collect())
    }
}
