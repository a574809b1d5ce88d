//! Metric domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Categorical estimate of how likely a donor is to lapse.
///
/// The persisted value on the donor record is always produced by the
/// day-bucket classifier in [`super::classify_retention_risk`]; the
/// month-bucket live estimate never reaches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RetentionRisk {
    #[default]
    Unknown,
    Low,
    Medium,
    High,
    Critical,
}

impl RetentionRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            RetentionRisk::Unknown => "UNKNOWN",
            RetentionRisk::Low => "LOW",
            RetentionRisk::Medium => "MEDIUM",
            RetentionRisk::High => "HIGH",
            RetentionRisk::Critical => "CRITICAL",
        }
    }

    /// Parses a stored risk string, defaulting to `Unknown` on unknown values.
    pub fn from_db_str(value: &str) -> Self {
        match value {
            "LOW" => RetentionRisk::Low,
            "MEDIUM" => RetentionRisk::Medium,
            "HIGH" => RetentionRisk::High,
            "CRITICAL" => RetentionRisk::Critical,
            _ => RetentionRisk::Unknown,
        }
    }
}

/// Aggregate of one donor's complete donation ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DonorMetrics {
    pub total_gifts: i64,
    pub total_amount: Decimal,
    pub first_gift_date: Option<NaiveDate>,
    pub last_gift_date: Option<NaiveDate>,
}

/// The full set of derived donor fields written back by the synchronizer.
///
/// Persisted as one unit: storage either applies all five fields or none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorMetricsUpdate {
    pub total_gifts: i64,
    pub total_amount: Decimal,
    pub first_gift_date: Option<NaiveDate>,
    pub last_gift_date: Option<NaiveDate>,
    pub retention_risk: RetentionRisk,
}

impl DonorMetricsUpdate {
    /// Combines a ledger aggregate with its risk classification.
    pub fn from_metrics(metrics: DonorMetrics, retention_risk: RetentionRisk) -> Self {
        Self {
            total_gifts: metrics.total_gifts,
            total_amount: metrics.total_amount,
            first_gift_date: metrics.first_gift_date,
            last_gift_date: metrics.last_gift_date,
            retention_risk,
        }
    }
}
