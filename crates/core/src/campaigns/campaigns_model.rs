//! Campaign domain models.

use chrono::{NaiveDate, NaiveDateTime};
use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::donations::Donation;
use crate::{errors::ValidationError, Error, Result};

/// Campaign lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    #[default]
    Active,
    Completed,
    Archived,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "ACTIVE",
            CampaignStatus::Completed => "COMPLETED",
            CampaignStatus::Archived => "ARCHIVED",
        }
    }

    /// Parses a stored status string, defaulting to `Active` on unknown values.
    pub fn from_db_str(value: &str) -> Self {
        match value {
            "COMPLETED" => CampaignStatus::Completed,
            "ARCHIVED" => CampaignStatus::Archived,
            _ => CampaignStatus::Active,
        }
    }
}

/// Domain model representing a fundraising campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub description: Option<String>,
    pub goal_amount: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: CampaignStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new campaign.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub goal_amount: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: CampaignStatus,
}

fn validate_campaign_fields(
    name: &str,
    goal_amount: Option<Decimal>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Campaign name cannot be empty".to_string(),
        )));
    }
    if let Some(goal) = goal_amount {
        if goal <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Campaign goal must be greater than zero".to_string(),
            )));
        }
    }
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end < start {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Campaign end date cannot precede its start date".to_string(),
            )));
        }
    }
    Ok(())
}

impl NewCampaign {
    /// Validates the new campaign data.
    pub fn validate(&self) -> Result<()> {
        validate_campaign_fields(&self.name, self.goal_amount, self.start_date, self.end_date)
    }
}

/// Input model for updating an existing campaign.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CampaignUpdate {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub goal_amount: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: CampaignStatus,
}

impl CampaignUpdate {
    /// Validates the campaign update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Campaign ID is required for updates".to_string(),
            )));
        }
        validate_campaign_fields(&self.name, self.goal_amount, self.start_date, self.end_date)
    }
}

/// Raised-to-date view of a campaign, computed from the ledger on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignProgress {
    pub campaign_id: String,
    pub raised: Decimal,
    pub donation_count: i64,
    pub goal_amount: Option<Decimal>,
    /// Percentage of goal reached, rounded for display. None without a goal.
    pub percent_of_goal: Option<Decimal>,
}

/// Folds a campaign's donations into its progress view.
pub fn campaign_progress(campaign: &Campaign, donations: &[Donation]) -> CampaignProgress {
    let mut raised = Decimal::zero();
    for donation in donations {
        raised += donation.amount;
    }

    let percent_of_goal = campaign.goal_amount.and_then(|goal| {
        if goal > Decimal::ZERO {
            Some((raised / goal * Decimal::ONE_HUNDRED).round_dp(DISPLAY_DECIMAL_PRECISION))
        } else {
            None
        }
    });

    CampaignProgress {
        campaign_id: campaign.id.clone(),
        raised,
        donation_count: donations.len() as i64,
        goal_amount: campaign.goal_amount,
        percent_of_goal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn campaign(goal: Option<Decimal>) -> Campaign {
        Campaign {
            id: "camp-1".to_string(),
            organization_id: "org-1".to_string(),
            name: "Annual Fund".to_string(),
            description: None,
            goal_amount: goal,
            start_date: None,
            end_date: None,
            status: CampaignStatus::Active,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn donation(amount: Decimal) -> Donation {
        Donation {
            id: format!("don-{}", amount),
            organization_id: "org-1".to_string(),
            donor_id: "donor-1".to_string(),
            amount,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            campaign_id: Some("camp-1".to_string()),
            method: None,
            donation_type: None,
            notes: None,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn progress_sums_ledger_and_computes_percent() {
        let progress = campaign_progress(
            &campaign(Some(dec!(1000))),
            &[donation(dec!(150)), donation(dec!(100))],
        );
        assert_eq!(progress.raised, dec!(250));
        assert_eq!(progress.donation_count, 2);
        assert_eq!(progress.percent_of_goal, Some(dec!(25.00)));
    }

    #[test]
    fn progress_without_goal_has_no_percent() {
        let progress = campaign_progress(&campaign(None), &[donation(dec!(150))]);
        assert_eq!(progress.raised, dec!(150));
        assert_eq!(progress.percent_of_goal, None);
    }

    #[test]
    fn empty_campaign_has_zero_progress() {
        let progress = campaign_progress(&campaign(Some(dec!(500))), &[]);
        assert_eq!(progress.raised, Decimal::ZERO);
        assert_eq!(progress.donation_count, 0);
        assert_eq!(progress.percent_of_goal, Some(dec!(0.00)));
    }

    #[test]
    fn validation_rejects_inverted_date_range() {
        let mut input = NewCampaign {
            id: None,
            name: "Gala".to_string(),
            description: None,
            goal_amount: None,
            start_date: Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
            end_date: Some(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()),
            status: CampaignStatus::Active,
        };
        assert!(input.validate().is_err());

        input.end_date = Some(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert!(input.validate().is_ok());
    }
}
