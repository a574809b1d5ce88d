//! Segment repository and service traits.

use async_trait::async_trait;

use super::segments_model::{NewSegment, Segment, SegmentUpdate};
use crate::donors::Donor;
use crate::errors::Result;

/// Trait defining the contract for Segment repository operations.
#[async_trait]
pub trait SegmentRepositoryTrait: Send + Sync {
    /// Creates a new segment.
    async fn create(&self, organization_id: &str, new_segment: NewSegment) -> Result<Segment>;

    /// Updates an existing segment.
    async fn update(
        &self,
        organization_id: &str,
        segment_update: SegmentUpdate,
    ) -> Result<Segment>;

    /// Deletes a segment by its ID.
    async fn delete(&self, organization_id: &str, segment_id: &str) -> Result<usize>;

    /// Retrieves a segment by its ID.
    fn get_by_id(&self, organization_id: &str, segment_id: &str) -> Result<Segment>;

    /// Lists the organization's segments.
    fn list(&self, organization_id: &str) -> Result<Vec<Segment>>;
}

/// Trait defining the contract for Segment service operations.
#[async_trait]
pub trait SegmentServiceTrait: Send + Sync {
    /// Creates a new segment with business validation.
    async fn create_segment(
        &self,
        organization_id: &str,
        new_segment: NewSegment,
    ) -> Result<Segment>;

    /// Updates an existing segment with business validation.
    async fn update_segment(
        &self,
        organization_id: &str,
        segment_update: SegmentUpdate,
    ) -> Result<Segment>;

    /// Deletes a segment.
    async fn delete_segment(&self, organization_id: &str, segment_id: &str) -> Result<()>;

    /// Retrieves a segment by ID.
    fn get_segment(&self, organization_id: &str, segment_id: &str) -> Result<Segment>;

    /// Lists the organization's segments.
    fn list_segments(&self, organization_id: &str) -> Result<Vec<Segment>>;

    /// Evaluates segment membership over the organization's donors.
    fn list_members(&self, organization_id: &str, segment_id: &str) -> Result<Vec<Donor>>;

    /// Counts segment members without returning them.
    fn member_count(&self, organization_id: &str, segment_id: &str) -> Result<usize>;
}
