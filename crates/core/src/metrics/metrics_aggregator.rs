//! Pure reduction of a donor's donation ledger into cached metrics.

use num_traits::Zero;
use rust_decimal::Decimal;

use super::metrics_model::DonorMetrics;
use crate::donations::Donation;

/// Reduces the complete, current set of one donor's donations into
/// `{ total_gifts, total_amount, first_gift_date, last_gift_date }`.
///
/// Input order is irrelevant: min/max are established here, never assumed
/// from query ordering. Amounts are summed with exact decimal arithmetic.
/// The empty ledger yields the zero/None identity values.
pub fn aggregate_donations(donations: &[Donation]) -> DonorMetrics {
    let mut metrics = DonorMetrics {
        total_gifts: donations.len() as i64,
        total_amount: Decimal::zero(),
        first_gift_date: None,
        last_gift_date: None,
    };

    for donation in donations {
        metrics.total_amount += donation.amount;

        metrics.first_gift_date = match metrics.first_gift_date {
            Some(first) if first <= donation.date => Some(first),
            _ => Some(donation.date),
        };
        metrics.last_gift_date = match metrics.last_gift_date {
            Some(last) if last >= donation.date => Some(last),
            _ => Some(donation.date),
        };
    }

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal_macros::dec;

    fn donation(amount: Decimal, date: &str) -> Donation {
        Donation {
            id: format!("don-{}-{}", amount, date),
            organization_id: "org-1".to_string(),
            donor_id: "donor-1".to_string(),
            amount,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            campaign_id: None,
            method: None,
            donation_type: None,
            notes: None,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn empty_ledger_yields_identity_values() {
        let metrics = aggregate_donations(&[]);
        assert_eq!(metrics.total_gifts, 0);
        assert_eq!(metrics.total_amount, Decimal::ZERO);
        assert_eq!(metrics.first_gift_date, None);
        assert_eq!(metrics.last_gift_date, None);
    }

    #[test]
    fn aggregates_count_sum_and_date_bounds() {
        let donations = vec![
            donation(dec!(10.50), "2024-01-01"),
            donation(dec!(25.00), "2024-03-15"),
            donation(dec!(14.50), "2024-02-01"),
        ];

        let metrics = aggregate_donations(&donations);
        assert_eq!(metrics.total_gifts, 3);
        assert_eq!(metrics.total_amount, dec!(50.00));
        assert_eq!(
            metrics.first_gift_date,
            Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert_eq!(
            metrics.last_gift_date,
            Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
        );
    }

    #[test]
    fn result_is_independent_of_ledger_order() {
        let mut donations = vec![
            donation(dec!(10.50), "2024-01-01"),
            donation(dec!(25.00), "2024-03-15"),
            donation(dec!(14.50), "2024-02-01"),
        ];
        let forward = aggregate_donations(&donations);

        donations.reverse();
        let reversed = aggregate_donations(&donations);

        assert_eq!(forward, reversed);
    }

    #[test]
    fn single_donation_is_both_first_and_last() {
        let donations = vec![donation(dec!(100), "2024-06-30")];
        let metrics = aggregate_donations(&donations);
        assert_eq!(metrics.first_gift_date, metrics.last_gift_date);
        assert_eq!(metrics.total_gifts, 1);
    }

    #[test]
    fn exact_decimal_sum_has_no_cent_drift() {
        // 0.10 summed ten times must be exactly 1.00
        let donations: Vec<Donation> = (0..10).map(|_| donation(dec!(0.10), "2024-01-01")).collect();
        let metrics = aggregate_donations(&donations);
        assert_eq!(metrics.total_amount, dec!(1.00));
    }
}
