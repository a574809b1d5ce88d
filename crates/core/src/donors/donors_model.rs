//! Donor domain models.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::metrics::RetentionRisk;
use crate::{errors::ValidationError, Error, Result};

/// User-set donor lifecycle status. Independent of the derived
/// retention risk - staff set this by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DonorStatus {
    #[default]
    Active,
    Lapsed,
    Inactive,
    DoNotContact,
}

impl DonorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonorStatus::Active => "ACTIVE",
            DonorStatus::Lapsed => "LAPSED",
            DonorStatus::Inactive => "INACTIVE",
            DonorStatus::DoNotContact => "DO_NOT_CONTACT",
        }
    }

    /// Parses a stored status string, defaulting to `Active` on unknown values.
    pub fn from_db_str(value: &str) -> Self {
        match value {
            "LAPSED" => DonorStatus::Lapsed,
            "INACTIVE" => DonorStatus::Inactive,
            "DO_NOT_CONTACT" => DonorStatus::DoNotContact,
            _ => DonorStatus::Active,
        }
    }
}

/// Domain model representing a donor in the system.
///
/// The metric fields (`total_gifts`, `total_amount`, `first_gift_date`,
/// `last_gift_date`, `retention_risk`) are owned by the metrics engine:
/// they are recomputed from the donation ledger and never accepted from
/// client input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    pub id: String,
    pub organization_id: String,
    pub first_name: String,
    /// Empty for organization-type donors, which carry their whole name
    /// in `first_name`.
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub status: DonorStatus,
    pub notes: Option<String>,
    /// Tag list as a JSON array string
    pub tags: Option<String>,
    pub total_gifts: i64,
    pub total_amount: Decimal,
    pub first_gift_date: Option<NaiveDate>,
    pub last_gift_date: Option<NaiveDate>,
    pub retention_risk: RetentionRisk,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Donor {
    /// Display name; organization donors have no last name.
    pub fn display_name(&self) -> String {
        if self.last_name.trim().is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    /// A donor is reachable when at least one of phone or email is on file.
    pub fn has_contact_info(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        filled(&self.email) || filled(&self.phone)
    }
}

/// Reads the tag list from a donor's tags JSON field.
///
/// Returns an empty list if tags is None, empty, or invalid JSON.
pub fn get_tags(donor: &Donor) -> Vec<String> {
    donor
        .tags
        .as_ref()
        .filter(|s| !s.is_empty())
        .and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok())
        .unwrap_or_default()
}

/// Appends a tag to a tags JSON field, preserving existing tags.
///
/// Duplicate tags are not added twice. Returns the new JSON array string.
pub fn add_tag(tags: Option<String>, tag: &str) -> String {
    let mut list = tags
        .as_ref()
        .filter(|s| !s.is_empty())
        .and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok())
        .unwrap_or_default();

    if !list.iter().any(|t| t == tag) {
        list.push(tag.to_string());
    }

    serde_json::to_string(&list).unwrap_or_else(|_| "[]".to_string())
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"))
}

fn validate_email(email: &Option<String>) -> Result<()> {
    if let Some(addr) = email.as_deref() {
        if !addr.is_empty() && !email_regex().is_match(addr) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Invalid email address: {}",
                addr
            ))));
        }
    }
    Ok(())
}

/// Input model for creating a new donor.
///
/// Carries no metric fields: new donors always start with zero gifts and
/// an UNKNOWN retention risk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    #[serde(default)]
    pub status: DonorStatus,
    pub notes: Option<String>,
    pub tags: Option<String>,
}

impl NewDonor {
    /// Validates the new donor data.
    pub fn validate(&self) -> Result<()> {
        if self.first_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Donor name cannot be empty".to_string(),
            )));
        }
        validate_email(&self.email)
    }
}

/// Input model for updating an existing donor.
///
/// Identity, contact, and status fields only - metric fields are absent
/// on purpose and cannot be set through an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorUpdate {
    pub id: Option<String>,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub status: DonorStatus,
    pub notes: Option<String>,
    pub tags: Option<String>,
}

impl DonorUpdate {
    /// Validates the donor update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Donor ID is required for updates".to_string(),
            )));
        }
        if self.first_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Donor name cannot be empty".to_string(),
            )));
        }
        validate_email(&self.email)
    }
}
