use chrono::Utc;
use log::debug;
use std::sync::Arc;

use super::metrics_aggregator::aggregate_donations;
use super::metrics_model::DonorMetricsUpdate;
use super::metrics_traits::DonorMetricsServiceTrait;
use super::retention::classify_retention_risk;
use crate::donations::DonationRepositoryTrait;
use crate::donors::{Donor, DonorRepositoryTrait};
use crate::errors::Result;

/// Synchronizes a donor's cached metric fields with the donation ledger.
///
/// Always reads the full current ledger rather than applying a delta, so
/// each run self-heals any prior inconsistency. The persisted classification
/// uses the canonical day-bucket classifier as of today.
pub struct DonorMetricsService {
    donor_repository: Arc<dyn DonorRepositoryTrait>,
    donation_repository: Arc<dyn DonationRepositoryTrait>,
}

impl DonorMetricsService {
    /// Creates a new DonorMetricsService instance
    pub fn new(
        donor_repository: Arc<dyn DonorRepositoryTrait>,
        donation_repository: Arc<dyn DonationRepositoryTrait>,
    ) -> Self {
        Self {
            donor_repository,
            donation_repository,
        }
    }
}

#[async_trait::async_trait]
impl DonorMetricsServiceTrait for DonorMetricsService {
    async fn recompute_donor_metrics(
        &self,
        organization_id: &str,
        donor_id: &str,
    ) -> Result<Donor> {
        // NotFound must surface before any write is attempted.
        self.donor_repository.get_by_id(organization_id, donor_id)?;

        let donations = self
            .donation_repository
            .list_by_donor(organization_id, donor_id)?;

        let metrics = aggregate_donations(&donations);
        let retention_risk =
            classify_retention_risk(metrics.last_gift_date, Utc::now().date_naive());

        debug!(
            "Recomputed metrics for donor {}: {} gifts, total {}, risk {:?}",
            donor_id, metrics.total_gifts, metrics.total_amount, retention_risk
        );

        // All five fields land in a single repository write.
        self.donor_repository
            .update_metrics(
                organization_id,
                donor_id,
                DonorMetricsUpdate::from_metrics(metrics, retention_risk),
            )
            .await
    }
}
