//! Property-based tests for the donor metrics engine.
//!
//! These verify that the aggregator and classifier invariants hold across
//! randomly generated ledgers, using the `proptest` crate.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use donorhub_core::donations::Donation;
use donorhub_core::metrics::{aggregate_donations, classify_retention_risk, RetentionRisk};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
}

/// Generates a donation with an amount in whole cents and a date within
/// roughly three years of the base date.
fn arb_donation() -> impl Strategy<Value = Donation> {
    (1i64..=5_000_00, 0i64..=1100).prop_map(|(cents, day_offset)| Donation {
        id: format!("don-{}-{}", cents, day_offset),
        organization_id: "org-1".to_string(),
        donor_id: "donor-1".to_string(),
        amount: Decimal::new(cents, 2),
        date: base_date() + Duration::days(day_offset),
        campaign_id: None,
        method: None,
        donation_type: None,
        notes: None,
        created_at: NaiveDateTime::default(),
        updated_at: NaiveDateTime::default(),
    })
}

fn arb_ledger(max_len: usize) -> impl Strategy<Value = Vec<Donation>> {
    proptest::collection::vec(arb_donation(), 0..=max_len)
}

fn risk_rank(risk: RetentionRisk) -> u8 {
    match risk {
        RetentionRisk::Unknown => 0,
        RetentionRisk::Low => 1,
        RetentionRisk::Medium => 2,
        RetentionRisk::High => 3,
        RetentionRisk::Critical => 4,
    }
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// `total_gifts` always equals the ledger length and `total_amount`
    /// equals the exact decimal sum of every amount.
    #[test]
    fn prop_count_and_sum_match_ledger(ledger in arb_ledger(40)) {
        let metrics = aggregate_donations(&ledger);

        let expected_sum: Decimal = ledger.iter().map(|d| d.amount).sum();
        prop_assert_eq!(metrics.total_gifts, ledger.len() as i64);
        prop_assert_eq!(metrics.total_amount, expected_sum);
    }

    /// Aggregation is independent of ledger ordering.
    #[test]
    fn prop_order_independence(ledger in arb_ledger(40).prop_shuffle()) {
        let shuffled = aggregate_donations(&ledger);

        let mut sorted = ledger.clone();
        sorted.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        let ordered = aggregate_donations(&sorted);

        prop_assert_eq!(shuffled, ordered);
    }

    /// Date bounds are consistent: both absent on an empty ledger, both
    /// present otherwise, and first never exceeds last.
    #[test]
    fn prop_date_bounds_are_consistent(ledger in arb_ledger(40)) {
        let metrics = aggregate_donations(&ledger);

        if ledger.is_empty() {
            prop_assert!(metrics.first_gift_date.is_none());
            prop_assert!(metrics.last_gift_date.is_none());
        } else {
            let first = metrics.first_gift_date.unwrap();
            let last = metrics.last_gift_date.unwrap();
            prop_assert!(first <= last);
            prop_assert!(ledger.iter().all(|d| first <= d.date && d.date <= last));
        }
    }

    /// The persisted classifier never softens as a gift ages: more elapsed
    /// days can only keep or raise the risk bucket.
    #[test]
    fn prop_classifier_is_monotonic_in_elapsed_days(
        days_a in 0i64..=2000,
        days_b in 0i64..=2000,
    ) {
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let (younger, older) = if days_a <= days_b {
            (days_a, days_b)
        } else {
            (days_b, days_a)
        };

        let younger_risk = classify_retention_risk(Some(as_of - Duration::days(younger)), as_of);
        let older_risk = classify_retention_risk(Some(as_of - Duration::days(older)), as_of);
        prop_assert!(risk_rank(younger_risk) <= risk_rank(older_risk));
    }
}
