//! Database models for campaigns.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use donorhub_core::campaigns::{Campaign, CampaignStatus, CampaignUpdate, NewCampaign};

use crate::utils::{
    decimal_to_text, optional_date_to_text, parse_decimal_text, parse_optional_date_text,
};

/// Database model for campaigns
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::campaigns)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CampaignDB {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub description: Option<String>,
    pub goal_amount: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: String,
    #[diesel(skip_insertion)]
    pub created_at: NaiveDateTime,
    #[diesel(skip_insertion)]
    pub updated_at: NaiveDateTime,
}

impl CampaignDB {
    pub fn new_row(organization_id: &str, domain: NewCampaign) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            organization_id: organization_id.to_string(),
            name: domain.name,
            description: domain.description,
            goal_amount: domain.goal_amount.map(decimal_to_text),
            start_date: optional_date_to_text(domain.start_date),
            end_date: optional_date_to_text(domain.end_date),
            status: domain.status.as_str().to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<CampaignDB> for Campaign {
    fn from(db: CampaignDB) -> Self {
        Self {
            goal_amount: db
                .goal_amount
                .as_deref()
                .map(|v| parse_decimal_text(v, "campaign.goal_amount")),
            start_date: parse_optional_date_text(db.start_date.as_deref(), "campaign.start_date"),
            end_date: parse_optional_date_text(db.end_date.as_deref(), "campaign.end_date"),
            status: CampaignStatus::from_db_str(&db.status),
            id: db.id,
            organization_id: db.organization_id,
            name: db.name,
            description: db.description,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

/// Changeset for campaign edits.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::campaigns)]
#[diesel(treat_none_as_null = true)]
pub struct CampaignChangeset {
    pub name: String,
    pub description: Option<String>,
    pub goal_amount: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: String,
    pub updated_at: NaiveDateTime,
}

impl From<CampaignUpdate> for CampaignChangeset {
    fn from(domain: CampaignUpdate) -> Self {
        Self {
            name: domain.name,
            description: domain.description,
            goal_amount: domain.goal_amount.map(decimal_to_text),
            start_date: optional_date_to_text(domain.start_date),
            end_date: optional_date_to_text(domain.end_date),
            status: domain.status.as_str().to_string(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
