//! Tests for donor domain models including tag handling.

#[cfg(test)]
mod tests {
    use crate::donors::{add_tag, get_tags, Donor, DonorStatus, DonorUpdate, NewDonor};
    use crate::metrics::RetentionRisk;
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;

    fn create_test_donor(tags: Option<String>) -> Donor {
        Donor {
            id: "donor-1".to_string(),
            organization_id: "org-1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: Some("ada@example.org".to_string()),
            phone: None,
            address: None,
            city: None,
            state: None,
            zip_code: None,
            status: DonorStatus::Active,
            notes: None,
            tags,
            total_gifts: 0,
            total_amount: Decimal::ZERO,
            first_gift_date: None,
            last_gift_date: None,
            retention_risk: RetentionRisk::Unknown,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn new_donor(first_name: &str) -> NewDonor {
        NewDonor {
            id: None,
            first_name: first_name.to_string(),
            last_name: String::new(),
            email: None,
            phone: None,
            address: None,
            city: None,
            state: None,
            zip_code: None,
            status: DonorStatus::Active,
            notes: None,
            tags: None,
        }
    }

    // ==================== DonorStatus Serialization Tests ====================

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&DonorStatus::Active).unwrap(),
            "\"ACTIVE\""
        );
        assert_eq!(
            serde_json::to_string(&DonorStatus::DoNotContact).unwrap(),
            "\"DO_NOT_CONTACT\""
        );
    }

    #[test]
    fn test_status_round_trip_through_db_string() {
        for status in [
            DonorStatus::Active,
            DonorStatus::Lapsed,
            DonorStatus::Inactive,
            DonorStatus::DoNotContact,
        ] {
            assert_eq!(DonorStatus::from_db_str(status.as_str()), status);
        }
    }

    #[test]
    fn test_status_unknown_db_string_defaults_to_active() {
        assert_eq!(DonorStatus::from_db_str("BOGUS"), DonorStatus::Active);
    }

    // ==================== Tag Helper Tests ====================

    #[test]
    fn test_get_tags_null() {
        let donor = create_test_donor(None);
        assert!(get_tags(&donor).is_empty());
    }

    #[test]
    fn test_get_tags_invalid_json() {
        let donor = create_test_donor(Some("not json".to_string()));
        assert!(get_tags(&donor).is_empty());
    }

    #[test]
    fn test_get_tags_parses_list() {
        let donor = create_test_donor(Some(r#"["major-donor","board"]"#.to_string()));
        assert_eq!(get_tags(&donor), vec!["major-donor", "board"]);
    }

    #[test]
    fn test_add_tag_to_empty() {
        let raw = add_tag(None, "welcomed");
        assert_eq!(raw, r#"["welcomed"]"#);
    }

    #[test]
    fn test_add_tag_preserves_existing() {
        let raw = add_tag(Some(r#"["board"]"#.to_string()), "welcomed");
        let parsed: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, vec!["board", "welcomed"]);
    }

    #[test]
    fn test_add_tag_is_idempotent() {
        let once = add_tag(Some(r#"["board"]"#.to_string()), "board");
        let parsed: Vec<String> = serde_json::from_str(&once).unwrap();
        assert_eq!(parsed, vec!["board"]);
    }

    // ==================== Model Helper Tests ====================

    #[test]
    fn test_display_name_person() {
        let donor = create_test_donor(None);
        assert_eq!(donor.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_display_name_organization() {
        let mut donor = create_test_donor(None);
        donor.first_name = "Acme Foundation".to_string();
        donor.last_name = String::new();
        assert_eq!(donor.display_name(), "Acme Foundation");
    }

    #[test]
    fn test_has_contact_info() {
        let mut donor = create_test_donor(None);
        assert!(donor.has_contact_info());

        donor.email = None;
        assert!(!donor.has_contact_info());

        donor.phone = Some("555-0100".to_string());
        assert!(donor.has_contact_info());

        donor.phone = Some("   ".to_string());
        assert!(!donor.has_contact_info());
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_new_donor_requires_name() {
        assert!(new_donor("").validate().is_err());
        assert!(new_donor("  ").validate().is_err());
        assert!(new_donor("Ada").validate().is_ok());
    }

    #[test]
    fn test_new_donor_rejects_malformed_email() {
        let mut donor = new_donor("Ada");
        donor.email = Some("not-an-email".to_string());
        assert!(donor.validate().is_err());

        donor.email = Some("ada@example.org".to_string());
        assert!(donor.validate().is_ok());
    }

    #[test]
    fn test_update_requires_id() {
        let update = DonorUpdate {
            id: None,
            first_name: "Ada".to_string(),
            last_name: String::new(),
            email: None,
            phone: None,
            address: None,
            city: None,
            state: None,
            zip_code: None,
            status: DonorStatus::Active,
            notes: None,
            tags: None,
        };
        assert!(update.validate().is_err());
    }
}
