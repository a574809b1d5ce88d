//! Database models for donations.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use donorhub_core::donations::{Donation, DonationUpdate, NewDonation};

use crate::utils::{date_to_text, decimal_to_text, parse_date_text, parse_decimal_text};

/// Database model for donations
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::donations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DonationDB {
    pub id: String,
    pub organization_id: String,
    pub donor_id: String,
    pub amount: String,
    pub date: String,
    pub campaign_id: Option<String>,
    pub method: Option<String>,
    pub donation_type: Option<String>,
    pub notes: Option<String>,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
    #[diesel(skip_insertion)]
    pub updated_at: NaiveDateTime,
}

impl DonationDB {
    /// Builds the row for a new donation. The id is filled in by the
    /// repository when absent.
    pub fn new_row(organization_id: &str, domain: NewDonation) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            organization_id: organization_id.to_string(),
            donor_id: domain.donor_id,
            amount: decimal_to_text(domain.amount),
            date: date_to_text(domain.date),
            campaign_id: domain.campaign_id,
            method: domain.method,
            donation_type: domain.donation_type,
            notes: domain.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<DonationDB> for Donation {
    fn from(db: DonationDB) -> Self {
        Self {
            amount: parse_decimal_text(&db.amount, "donation.amount"),
            date: parse_date_text(&db.date, "donation.date"),
            id: db.id,
            organization_id: db.organization_id,
            donor_id: db.donor_id,
            campaign_id: db.campaign_id,
            method: db.method,
            donation_type: db.donation_type,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

/// Changeset for administrative donation edits. The owning donor and the
/// audit creation time never change.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::donations)]
#[diesel(treat_none_as_null = true)]
pub struct DonationChangeset {
    pub amount: String,
    pub date: String,
    pub campaign_id: Option<String>,
    pub method: Option<String>,
    pub donation_type: Option<String>,
    pub notes: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl From<DonationUpdate> for DonationChangeset {
    fn from(domain: DonationUpdate) -> Self {
        Self {
            amount: decimal_to_text(domain.amount),
            date: date_to_text(domain.date),
            campaign_id: domain.campaign_id,
            method: domain.method,
            donation_type: domain.donation_type,
            notes: domain.notes,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
