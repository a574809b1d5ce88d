//! Segments module - saved donor filters and their membership.

mod segments_matcher;
mod segments_model;
mod segments_service;
mod segments_traits;

// Re-export the public interface
pub use segments_matcher::donor_matches;
pub use segments_model::{NewSegment, Segment, SegmentCriteria, SegmentUpdate};
pub use segments_service::SegmentService;
pub use segments_traits::{SegmentRepositoryTrait, SegmentServiceTrait};
