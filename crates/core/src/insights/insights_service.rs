use chrono::Utc;
use std::sync::Arc;

use super::insights_model::Insight;
use super::insights_traits::{InsightsProviderTrait, InsightsServiceTrait};
use crate::reports::{DashboardSummary, ReportsServiceTrait};
use crate::Result;

/// Produces dashboard narratives through an injected provider.
pub struct InsightsService {
    provider: Arc<dyn InsightsProviderTrait>,
    reports_service: Arc<dyn ReportsServiceTrait>,
}

impl InsightsService {
    /// Creates a new InsightsService instance
    pub fn new(
        provider: Arc<dyn InsightsProviderTrait>,
        reports_service: Arc<dyn ReportsServiceTrait>,
    ) -> Self {
        Self {
            provider,
            reports_service,
        }
    }
}

/// Renders the fixed prompt sent to the text-generation service.
///
/// The wording is part of the provider contract - changing it changes the
/// response shape downstream consumers were tuned against.
pub fn build_dashboard_prompt(summary: &DashboardSummary) -> String {
    format!(
        "You are a fundraising analyst. Given these figures for a nonprofit, \
         write three short observations and one recommended next step.\n\
         Donors: {} ({} active)\n\
         Gifts recorded: {} totalling {}\n\
         Average gift: {}\n\
         Raised this month: {}\n\
         Donors at high or critical retention risk: {}\n",
        summary.total_donors,
        summary.active_donors,
        summary.donation_count,
        summary.total_raised,
        summary.average_gift,
        summary.raised_this_month,
        summary.risk_breakdown.high + summary.risk_breakdown.critical,
    )
}

#[async_trait::async_trait]
impl InsightsServiceTrait for InsightsService {
    async fn dashboard_insights(&self, organization_id: &str) -> Result<Insight> {
        let summary = self.reports_service.get_dashboard_summary(organization_id)?;
        let prompt = build_dashboard_prompt(&summary);
        let text = self.provider.generate(&prompt).await?;
        Ok(Insight {
            text,
            generated_at: Utc::now().naive_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RiskBreakdown;
    use rust_decimal_macros::dec;

    #[test]
    fn prompt_carries_the_dashboard_figures() {
        let summary = DashboardSummary {
            total_donors: 12,
            active_donors: 9,
            total_raised: dec!(1234.50),
            donation_count: 40,
            average_gift: dec!(30.86),
            raised_this_month: dec!(110),
            risk_breakdown: RiskBreakdown {
                unknown: 1,
                low: 5,
                medium: 2,
                high: 3,
                critical: 1,
            },
            top_donors: vec![],
            monthly_giving: vec![],
        };

        let prompt = build_dashboard_prompt(&summary);
        assert!(prompt.contains("Donors: 12 (9 active)"));
        assert!(prompt.contains("40 totalling 1234.50"));
        assert!(prompt.contains("high or critical retention risk: 4"));
    }
}
