//! Database models for segments.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use donorhub_core::segments::{Segment, SegmentCriteria};

/// Database model for segments. The criteria rule set is stored as a JSON
/// object string.
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::segments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SegmentDB {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub description: Option<String>,
    pub criteria: String,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
    #[diesel(skip_insertion)]
    pub updated_at: NaiveDateTime,
}

impl From<SegmentDB> for Segment {
    fn from(db: SegmentDB) -> Self {
        let criteria = serde_json::from_str::<SegmentCriteria>(&db.criteria).unwrap_or_else(|e| {
            log::error!(
                "Failed to parse criteria for segment {} (err: {}). Treating as match-all.",
                db.id,
                e
            );
            SegmentCriteria::default()
        });
        Self {
            id: db.id,
            organization_id: db.organization_id,
            name: db.name,
            description: db.description,
            criteria,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

/// Changeset for segment edits.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::segments)]
#[diesel(treat_none_as_null = true)]
pub struct SegmentChangeset {
    pub name: String,
    pub description: Option<String>,
    pub criteria: String,
    pub updated_at: NaiveDateTime,
}
