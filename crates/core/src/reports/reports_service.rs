use chrono::{Datelike, NaiveDate, Utc};
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use super::reports_model::{DashboardSummary, MonthlyGiving, RiskBreakdown, TopDonor};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, GIVING_SERIES_MONTHS, TOP_DONORS_LIMIT};
use crate::donations::{Donation, DonationRepositoryTrait};
use crate::donors::{Donor, DonorRepositoryTrait, DonorStatus};
use crate::metrics::RetentionRisk;
use crate::Result;

/// Contract for dashboard reporting.
pub trait ReportsServiceTrait: Send + Sync {
    fn get_dashboard_summary(&self, organization_id: &str) -> Result<DashboardSummary>;
}

pub struct ReportsService {
    donor_repository: Arc<dyn DonorRepositoryTrait>,
    donation_repository: Arc<dyn DonationRepositoryTrait>,
}

impl ReportsService {
    pub fn new(
        donor_repository: Arc<dyn DonorRepositoryTrait>,
        donation_repository: Arc<dyn DonationRepositoryTrait>,
    ) -> Self {
        ReportsService {
            donor_repository,
            donation_repository,
        }
    }
}

impl ReportsServiceTrait for ReportsService {
    fn get_dashboard_summary(&self, organization_id: &str) -> Result<DashboardSummary> {
        debug!("Building dashboard summary for {}...", organization_id);
        let donors = self.donor_repository.list(organization_id, None)?;
        let donations = self.donation_repository.list_by_org(organization_id)?;
        Ok(build_dashboard_summary(
            &donors,
            &donations,
            Utc::now().date_naive(),
        ))
    }
}

fn month_key(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

/// Folds the organization's donors and ledger into the dashboard view.
///
/// Pure over its inputs; `as_of` anchors the this-month figure and the
/// trailing monthly series.
pub fn build_dashboard_summary(
    donors: &[Donor],
    donations: &[Donation],
    as_of: NaiveDate,
) -> DashboardSummary {
    let total_donors = donors.len() as i64;
    let active_donors = donors
        .iter()
        .filter(|d| d.status == DonorStatus::Active)
        .count() as i64;

    let mut risk_breakdown = RiskBreakdown::default();
    for donor in donors {
        match donor.retention_risk {
            RetentionRisk::Unknown => risk_breakdown.unknown += 1,
            RetentionRisk::Low => risk_breakdown.low += 1,
            RetentionRisk::Medium => risk_breakdown.medium += 1,
            RetentionRisk::High => risk_breakdown.high += 1,
            RetentionRisk::Critical => risk_breakdown.critical += 1,
        }
    }

    let mut total_raised = Decimal::zero();
    let mut raised_this_month = Decimal::zero();
    let mut per_month: HashMap<String, (Decimal, i64)> = HashMap::new();
    for donation in donations {
        total_raised += donation.amount;
        if donation.date.year() == as_of.year() && donation.date.month() == as_of.month() {
            raised_this_month += donation.amount;
        }
        let entry = per_month
            .entry(month_key(donation.date.year(), donation.date.month()))
            .or_insert((Decimal::zero(), 0));
        entry.0 += donation.amount;
        entry.1 += 1;
    }

    let donation_count = donations.len() as i64;
    let average_gift = if donation_count > 0 {
        (total_raised / Decimal::from(donation_count)).round_dp(DISPLAY_DECIMAL_PRECISION)
    } else {
        Decimal::zero()
    };

    // Trailing months, oldest first, including the current month
    let mut monthly_giving = Vec::with_capacity(GIVING_SERIES_MONTHS as usize);
    let current_months = as_of.year() * 12 + as_of.month() as i32 - 1;
    for offset in (0..GIVING_SERIES_MONTHS as i32).rev() {
        let months = current_months - offset;
        let year = months.div_euclid(12);
        let month = months.rem_euclid(12) as u32 + 1;
        let key = month_key(year, month);
        let (total, count) = per_month.get(&key).cloned().unwrap_or((Decimal::zero(), 0));
        monthly_giving.push(MonthlyGiving {
            month: key,
            total,
            donation_count: count,
        });
    }

    let mut ranked: Vec<&Donor> = donors.iter().filter(|d| d.total_gifts > 0).collect();
    ranked.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));
    let top_donors = ranked
        .into_iter()
        .take(TOP_DONORS_LIMIT)
        .map(|donor| TopDonor {
            donor_id: donor.id.clone(),
            name: donor.display_name(),
            total_amount: donor.total_amount,
            total_gifts: donor.total_gifts,
        })
        .collect();

    DashboardSummary {
        total_donors,
        active_donors,
        total_raised,
        donation_count,
        average_gift,
        raised_this_month,
        risk_breakdown,
        top_donors,
        monthly_giving,
    }
}
