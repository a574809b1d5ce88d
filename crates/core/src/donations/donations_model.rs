//! Donation domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a single recorded gift.
///
/// `date` is the calendar date the gift was received. It drives ledger
/// ordering and retention-risk recency and is distinct from the
/// server-side `created_at` audit timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: String,
    pub organization_id: String,
    pub donor_id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub campaign_id: Option<String>,
    /// Payment method (e.g. 'CHECK', 'CARD', 'ONLINE'). Descriptive only.
    pub method: Option<String>,
    /// Gift type (e.g. 'ONE_TIME', 'RECURRING', 'IN_KIND'). Descriptive only.
    pub donation_type: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for recording a new donation.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub donor_id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub campaign_id: Option<String>,
    pub method: Option<String>,
    pub donation_type: Option<String>,
    pub notes: Option<String>,
}

impl NewDonation {
    /// Validates the new donation data.
    pub fn validate(&self) -> Result<()> {
        if self.donor_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "donorId".to_string(),
            )));
        }
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Donation amount must be greater than zero".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for the administrative edit of an existing donation.
///
/// The owning donor cannot be changed through an update.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DonationUpdate {
    pub id: Option<String>,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub campaign_id: Option<String>,
    pub method: Option<String>,
    pub donation_type: Option<String>,
    pub notes: Option<String>,
}

impl DonationUpdate {
    /// Validates the donation update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Donation ID is required for updates".to_string(),
            )));
        }
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Donation amount must be greater than zero".to_string(),
            )));
        }
        Ok(())
    }

    /// Whether applying this update changes a field the donor metrics are
    /// derived from. Edits to notes, method, type, or campaign are no-ops
    /// for the metrics engine.
    pub fn affects_metrics(&self, existing: &Donation) -> bool {
        self.amount != existing.amount || self.date != existing.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn donation() -> Donation {
        Donation {
            id: "don-1".to_string(),
            organization_id: "org-1".to_string(),
            donor_id: "donor-1".to_string(),
            amount: dec!(25.00),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            campaign_id: None,
            method: Some("CHECK".to_string()),
            donation_type: None,
            notes: None,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn update_of(existing: &Donation) -> DonationUpdate {
        DonationUpdate {
            id: Some(existing.id.clone()),
            amount: existing.amount,
            date: existing.date,
            campaign_id: existing.campaign_id.clone(),
            method: existing.method.clone(),
            donation_type: existing.donation_type.clone(),
            notes: existing.notes.clone(),
        }
    }

    #[test]
    fn new_donation_rejects_non_positive_amounts() {
        let mut input = NewDonation {
            id: None,
            donor_id: "donor-1".to_string(),
            amount: dec!(0),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            campaign_id: None,
            method: None,
            donation_type: None,
            notes: None,
        };
        assert!(input.validate().is_err());

        input.amount = dec!(-5);
        assert!(input.validate().is_err());

        input.amount = dec!(0.01);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn metadata_only_edits_do_not_affect_metrics() {
        let existing = donation();

        let mut update = update_of(&existing);
        update.notes = Some("called to thank".to_string());
        update.method = Some("CARD".to_string());
        update.campaign_id = Some("camp-1".to_string());
        assert!(!update.affects_metrics(&existing));
    }

    #[test]
    fn amount_and_date_edits_affect_metrics() {
        let existing = donation();

        let mut update = update_of(&existing);
        update.amount = dec!(30.00);
        assert!(update.affects_metrics(&existing));

        let mut update = update_of(&existing);
        update.date = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
        assert!(update.affects_metrics(&existing));
    }
}
