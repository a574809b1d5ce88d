use std::sync::Arc;

use super::segments_matcher::donor_matches;
use super::segments_model::{NewSegment, Segment, SegmentUpdate};
use super::segments_traits::{SegmentRepositoryTrait, SegmentServiceTrait};
use crate::donors::{Donor, DonorRepositoryTrait};
use crate::errors::Result;

/// Service for managing segments.
///
/// Membership is evaluated on demand against current donor metrics rather
/// than materialized, so a segment's members always reflect the latest
/// recomputation.
pub struct SegmentService {
    repository: Arc<dyn SegmentRepositoryTrait>,
    donor_repository: Arc<dyn DonorRepositoryTrait>,
}

impl SegmentService {
    /// Creates a new SegmentService instance
    pub fn new(
        repository: Arc<dyn SegmentRepositoryTrait>,
        donor_repository: Arc<dyn DonorRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            donor_repository,
        }
    }
}

#[async_trait::async_trait]
impl SegmentServiceTrait for SegmentService {
    async fn create_segment(
        &self,
        organization_id: &str,
        new_segment: NewSegment,
    ) -> Result<Segment> {
        new_segment.validate()?;
        self.repository.create(organization_id, new_segment).await
    }

    async fn update_segment(
        &self,
        organization_id: &str,
        segment_update: SegmentUpdate,
    ) -> Result<Segment> {
        segment_update.validate()?;
        self.repository
            .update(organization_id, segment_update)
            .await
    }

    async fn delete_segment(&self, organization_id: &str, segment_id: &str) -> Result<()> {
        self.repository.delete(organization_id, segment_id).await?;
        Ok(())
    }

    fn get_segment(&self, organization_id: &str, segment_id: &str) -> Result<Segment> {
        self.repository.get_by_id(organization_id, segment_id)
    }

    fn list_segments(&self, organization_id: &str) -> Result<Vec<Segment>> {
        self.repository.list(organization_id)
    }

    fn list_members(&self, organization_id: &str, segment_id: &str) -> Result<Vec<Donor>> {
        let segment = self.repository.get_by_id(organization_id, segment_id)?;
        let donors = self.donor_repository.list(organization_id, None)?;
        Ok(donors
            .into_iter()
            .filter(|donor| donor_matches(&segment.criteria, donor))
            .collect())
    }

    fn member_count(&self, organization_id: &str, segment_id: &str) -> Result<usize> {
        Ok(self.list_members(organization_id, segment_id)?.len())
    }
}
