//! Retention-risk classifiers.
//!
//! Two formulas exist on purpose. [`classify_retention_risk`] is the
//! canonical classifier behind the persisted `retention_risk` field.
//! [`live_retention_risk`] is a display-only estimate computed at read
//! time for UI badges; it is never written to storage and the two must
//! not be treated as interchangeable.

use chrono::NaiveDate;

use super::metrics_model::RetentionRisk;
use crate::constants::{
    LIVE_RISK_DAYS_PER_MONTH, RISK_CRITICAL_DAYS, RISK_HIGH_DAYS, RISK_LOW_DAYS, RISK_MEDIUM_DAYS,
};

/// Canonical classifier for the persisted `retention_risk` field.
///
/// Buckets elapsed whole days between `as_of` and the last gift date:
/// no gift or under 30 days is `UNKNOWN`, then LOW / MEDIUM / HIGH at
/// 30 / 90 / 180 days, and `CRITICAL` at a year or more.
pub fn classify_retention_risk(
    last_gift_date: Option<NaiveDate>,
    as_of: NaiveDate,
) -> RetentionRisk {
    let Some(last_gift) = last_gift_date else {
        return RetentionRisk::Unknown;
    };

    let days = (as_of - last_gift).num_days();
    if days >= RISK_CRITICAL_DAYS {
        RetentionRisk::Critical
    } else if days >= RISK_HIGH_DAYS {
        RetentionRisk::High
    } else if days >= RISK_MEDIUM_DAYS {
        RetentionRisk::Medium
    } else if days >= RISK_LOW_DAYS {
        RetentionRisk::Low
    } else {
        // Recent givers (and gifts dated in the future) carry no signal yet.
        RetentionRisk::Unknown
    }
}

/// Display-only risk estimate for live UI badges.
///
/// Buckets elapsed months (30-day blocks) since the last gift, modulated
/// by whether the donor is reachable at all. Never returns `UNKNOWN` or
/// `CRITICAL`, and never reaches storage.
pub fn live_retention_risk(
    last_gift_date: Option<NaiveDate>,
    has_contact_info: bool,
    as_of: NaiveDate,
) -> RetentionRisk {
    let Some(last_gift) = last_gift_date else {
        return RetentionRisk::High;
    };

    let months = (as_of - last_gift).num_days() / LIVE_RISK_DAYS_PER_MONTH;
    if months >= 6 {
        RetentionRisk::High
    } else if months >= 3 {
        RetentionRisk::Medium
    } else if has_contact_info {
        RetentionRisk::Low
    } else {
        RetentionRisk::Medium
    }
}
