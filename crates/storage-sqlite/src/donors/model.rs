//! Database models for donors.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use donorhub_core::donors::{Donor, DonorStatus, DonorUpdate, NewDonor};
use donorhub_core::metrics::{DonorMetricsUpdate, RetentionRisk};

use crate::utils::{
    decimal_to_text, optional_date_to_text, parse_decimal_text, parse_optional_date_text,
};

/// Database model for donors
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::donors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DonorDB {
    pub id: String,
    pub organization_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub tags: Option<String>,
    pub total_gifts: i64,
    pub total_amount: String,
    pub first_gift_date: Option<String>,
    pub last_gift_date: Option<String>,
    pub retention_risk: String,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
    #[diesel(skip_insertion)]
    pub updated_at: NaiveDateTime,
}

impl DonorDB {
    /// Builds the row for a brand-new donor: zero gifts, no dates, UNKNOWN
    /// risk. The id is filled in by the repository when absent.
    pub fn new_row(organization_id: &str, domain: NewDonor) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            organization_id: organization_id.to_string(),
            first_name: domain.first_name,
            last_name: domain.last_name,
            email: domain.email,
            phone: domain.phone,
            address: domain.address,
            city: domain.city,
            state: domain.state,
            zip_code: domain.zip_code,
            status: domain.status.as_str().to_string(),
            notes: domain.notes,
            tags: domain.tags,
            total_gifts: 0,
            total_amount: "0".to_string(),
            first_gift_date: None,
            last_gift_date: None,
            retention_risk: RetentionRisk::Unknown.as_str().to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<DonorDB> for Donor {
    fn from(db: DonorDB) -> Self {
        Self {
            total_amount: parse_decimal_text(&db.total_amount, "donor.total_amount"),
            first_gift_date: parse_optional_date_text(
                db.first_gift_date.as_deref(),
                "donor.first_gift_date",
            ),
            last_gift_date: parse_optional_date_text(
                db.last_gift_date.as_deref(),
                "donor.last_gift_date",
            ),
            status: DonorStatus::from_db_str(&db.status),
            retention_risk: RetentionRisk::from_db_str(&db.retention_risk),
            id: db.id,
            organization_id: db.organization_id,
            first_name: db.first_name,
            last_name: db.last_name,
            email: db.email,
            phone: db.phone,
            address: db.address,
            city: db.city,
            state: db.state,
            zip_code: db.zip_code,
            notes: db.notes,
            tags: db.tags,
            total_gifts: db.total_gifts,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

/// Changeset for profile edits. Metric columns are deliberately absent so
/// an update can never touch them.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::donors)]
#[diesel(treat_none_as_null = true)]
pub struct DonorProfileChangeset {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub tags: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl From<DonorUpdate> for DonorProfileChangeset {
    fn from(domain: DonorUpdate) -> Self {
        Self {
            first_name: domain.first_name,
            last_name: domain.last_name,
            email: domain.email,
            phone: domain.phone,
            address: domain.address,
            city: domain.city,
            state: domain.state,
            zip_code: domain.zip_code,
            status: domain.status.as_str().to_string(),
            notes: domain.notes,
            tags: domain.tags,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Changeset for the synchronizer. All five derived columns move together
/// in one UPDATE; `treat_none_as_null` makes an empty ledger clear the
/// gift dates instead of leaving stale ones behind.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::donors)]
#[diesel(treat_none_as_null = true)]
pub struct DonorMetricsChangeset {
    pub total_gifts: i64,
    pub total_amount: String,
    pub first_gift_date: Option<String>,
    pub last_gift_date: Option<String>,
    pub retention_risk: String,
    pub updated_at: NaiveDateTime,
}

impl From<DonorMetricsUpdate> for DonorMetricsChangeset {
    fn from(domain: DonorMetricsUpdate) -> Self {
        Self {
            total_gifts: domain.total_gifts,
            total_amount: decimal_to_text(domain.total_amount),
            first_gift_date: optional_date_to_text(domain.first_gift_date),
            last_gift_date: optional_date_to_text(domain.last_gift_date),
            retention_risk: domain.retention_risk.as_str().to_string(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
