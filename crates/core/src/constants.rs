/// Decimal precision for display and report rounding
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Retention-risk day buckets for the persisted classifier.
/// A donor whose last gift is at least this many days old falls in the bucket.
pub const RISK_CRITICAL_DAYS: i64 = 365;
pub const RISK_HIGH_DAYS: i64 = 180;
pub const RISK_MEDIUM_DAYS: i64 = 90;
pub const RISK_LOW_DAYS: i64 = 30;

/// Days per month used by the live (display-only) risk estimate
pub const LIVE_RISK_DAYS_PER_MONTH: i64 = 30;

/// Number of donors returned in the dashboard top-donor list
pub const TOP_DONORS_LIMIT: usize = 5;

/// Months of history in the dashboard giving series
pub const GIVING_SERIES_MONTHS: u32 = 12;
