//! Report domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Donor counts per persisted retention-risk bucket.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskBreakdown {
    pub unknown: i64,
    pub low: i64,
    pub medium: i64,
    pub high: i64,
    pub critical: i64,
}

/// One row of the dashboard top-donor list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopDonor {
    pub donor_id: String,
    pub name: String,
    pub total_amount: Decimal,
    pub total_gifts: i64,
}

/// Giving totals for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyGiving {
    /// Month key in `YYYY-MM` form
    pub month: String,
    pub total: Decimal,
    pub donation_count: i64,
}

/// Aggregate dashboard view for one organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_donors: i64,
    pub active_donors: i64,
    pub total_raised: Decimal,
    pub donation_count: i64,
    pub average_gift: Decimal,
    pub raised_this_month: Decimal,
    pub risk_breakdown: RiskBreakdown,
    pub top_donors: Vec<TopDonor>,
    /// Trailing twelve months, oldest first
    pub monthly_giving: Vec<MonthlyGiving>,
}
