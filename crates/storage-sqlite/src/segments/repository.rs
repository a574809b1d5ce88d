use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use donorhub_core::errors::{DatabaseError, Error, Result};
use donorhub_core::segments::{NewSegment, Segment, SegmentRepositoryTrait, SegmentUpdate};

use super::model::{SegmentChangeset, SegmentDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::segments;

/// Repository for managing segment data in the database
pub struct SegmentRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SegmentRepository {
    /// Creates a new SegmentRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl SegmentRepositoryTrait for SegmentRepository {
    async fn create(&self, organization_id: &str, new_segment: NewSegment) -> Result<Segment> {
        let org = organization_id.to_string();
        self.writer
            .exec(move |conn| {
                let criteria = serde_json::to_string(&new_segment.criteria)
                    .map_err(|e| StorageError::SerializationError(e.to_string()))?;
                let now = chrono::Utc::now().naive_utc();
                let row = SegmentDB {
                    id: new_segment
                        .id
                        .filter(|v| !v.is_empty())
                        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
                    organization_id: org,
                    name: new_segment.name,
                    description: new_segment.description,
                    criteria,
                    created_at: now,
                    updated_at: now,
                };

                let inserted: SegmentDB = diesel::insert_into(segments::table)
                    .values(&row)
                    .returning(SegmentDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(inserted.into())
            })
            .await
    }

    async fn update(
        &self,
        organization_id: &str,
        segment_update: SegmentUpdate,
    ) -> Result<Segment> {
        let org = organization_id.to_string();
        let segment_id = segment_update.id.clone().unwrap_or_default();
        self.writer
            .exec(move |conn| {
                let criteria = serde_json::to_string(&segment_update.criteria)
                    .map_err(|e| StorageError::SerializationError(e.to_string()))?;
                let changeset = SegmentChangeset {
                    name: segment_update.name,
                    description: segment_update.description,
                    criteria,
                    updated_at: chrono::Utc::now().naive_utc(),
                };

                let affected = diesel::update(
                    segments::table
                        .filter(segments::id.eq(&segment_id))
                        .filter(segments::organization_id.eq(&org)),
                )
                .set(&changeset)
                .execute(conn)
                .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Segment {} not found",
                        segment_id
                    ))));
                }

                let row: SegmentDB = segments::table
                    .filter(segments::id.eq(&segment_id))
                    .filter(segments::organization_id.eq(&org))
                    .select(SegmentDB::as_select())
                    .first(conn)
                    .map_err(StorageError::from)?;
                Ok(row.into())
            })
            .await
    }

    async fn delete(&self, organization_id: &str, segment_id: &str) -> Result<usize> {
        let org = organization_id.to_string();
        let segment_id = segment_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected = diesel::delete(
                    segments::table
                        .filter(segments::id.eq(&segment_id))
                        .filter(segments::organization_id.eq(&org)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Segment {} not found",
                        segment_id
                    ))));
                }
                Ok(affected)
            })
            .await
    }

    fn get_by_id(&self, organization_id: &str, segment_id: &str) -> Result<Segment> {
        let mut conn = get_connection(&self.pool)?;

        let row: SegmentDB = segments::table
            .filter(segments::id.eq(segment_id))
            .filter(segments::organization_id.eq(organization_id))
            .select(SegmentDB::as_select())
            .first(&mut conn)
            .map_err(StorageError::from)?;
        Ok(row.into())
    }

    fn list(&self, organization_id: &str) -> Result<Vec<Segment>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = segments::table
            .filter(segments::organization_id.eq(organization_id))
            .select(SegmentDB::as_select())
            .order(segments::name.asc())
            .load::<SegmentDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Segment::from).collect())
    }
}
