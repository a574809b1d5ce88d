//! Segment domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::donors::DonorStatus;
use crate::metrics::RetentionRisk;
use crate::{errors::ValidationError, Error, Result};

/// Rule set a donor must satisfy to belong to a segment.
///
/// Absent fields impose no constraint; present fields are ANDed together.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SegmentCriteria {
    /// Match any of these statuses
    pub statuses: Option<Vec<DonorStatus>>,
    /// Match any of these persisted retention-risk values
    pub risks: Option<Vec<RetentionRisk>>,
    pub min_total_amount: Option<Decimal>,
    pub max_total_amount: Option<Decimal>,
    pub min_total_gifts: Option<i64>,
    /// Donor's last gift must fall on or after this date
    pub last_gift_after: Option<NaiveDate>,
    /// Donor's last gift must fall on or before this date
    pub last_gift_before: Option<NaiveDate>,
}

/// Domain model representing a saved donor segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub description: Option<String>,
    pub criteria: SegmentCriteria,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new segment.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewSegment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub criteria: SegmentCriteria,
}

impl NewSegment {
    /// Validates the new segment data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Segment name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing segment.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SegmentUpdate {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub criteria: SegmentCriteria,
}

impl SegmentUpdate {
    /// Validates the segment update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Segment ID is required for updates".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Segment name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
