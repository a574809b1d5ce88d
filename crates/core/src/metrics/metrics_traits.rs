//! Metrics synchronizer trait.

use async_trait::async_trait;

use crate::donors::Donor;
use crate::errors::Result;

/// Contract for the donor record synchronizer.
///
/// Callers must already have authorized the action for the given
/// organization; this component performs no authorization of its own.
#[async_trait]
pub trait DonorMetricsServiceTrait: Send + Sync {
    /// Recomputes the donor's five derived fields from the complete
    /// current ledger and persists them in one write.
    ///
    /// Idempotent: with no intervening ledger changes, a second call
    /// produces the same stored values. A missing donor (or one in
    /// another organization) yields a `NotFound` database error and
    /// nothing is written.
    async fn recompute_donor_metrics(
        &self,
        organization_id: &str,
        donor_id: &str,
    ) -> Result<Donor>;
}
