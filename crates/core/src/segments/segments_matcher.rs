//! Pure segment membership evaluation.

use super::segments_model::SegmentCriteria;
use crate::donors::Donor;

/// Evaluates whether a donor satisfies every constraint the criteria set.
///
/// Date-window constraints require a last gift on record: a donor who has
/// never given matches neither `last_gift_after` nor `last_gift_before`.
pub fn donor_matches(criteria: &SegmentCriteria, donor: &Donor) -> bool {
    if let Some(statuses) = &criteria.statuses {
        if !statuses.contains(&donor.status) {
            return false;
        }
    }

    if let Some(risks) = &criteria.risks {
        if !risks.contains(&donor.retention_risk) {
            return false;
        }
    }

    if let Some(min) = criteria.min_total_amount {
        if donor.total_amount < min {
            return false;
        }
    }

    if let Some(max) = criteria.max_total_amount {
        if donor.total_amount > max {
            return false;
        }
    }

    if let Some(min_gifts) = criteria.min_total_gifts {
        if donor.total_gifts < min_gifts {
            return false;
        }
    }

    if let Some(after) = criteria.last_gift_after {
        match donor.last_gift_date {
            Some(last) if last >= after => {}
            _ => return false,
        }
    }

    if let Some(before) = criteria.last_gift_before {
        match donor.last_gift_date {
            Some(last) if last <= before => {}
            _ => return false,
        }
    }

    true
}
