//! Insight domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Generated narrative for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub text: String,
    pub generated_at: NaiveDateTime,
}
