//! Repository tests against a real SQLite file.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::TempDir;

use donorhub_core::donations::{DonationRepositoryTrait, NewDonation};
use donorhub_core::donors::{DonorRepositoryTrait, NewDonor};
use donorhub_core::metrics::{DonorMetricsUpdate, RetentionRisk};
use donorhub_storage_sqlite::db::{create_pool, init, run_migrations, spawn_writer};
use donorhub_storage_sqlite::donations::DonationRepository;
use donorhub_storage_sqlite::donors::DonorRepository;

struct TestDb {
    donor_repo: DonorRepository,
    donation_repo: DonationRepository,
    _tmp: TempDir,
}

async fn setup() -> TestDb {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = init(tmp.path().join("test.db").to_str().unwrap()).unwrap();
    let pool = create_pool(&db_path).unwrap();
    run_migrations(&pool).unwrap();
    let writer = spawn_writer((*pool).clone());

    TestDb {
        donor_repo: DonorRepository::new(Arc::clone(&pool), writer.clone()),
        donation_repo: DonationRepository::new(Arc::clone(&pool), writer),
        _tmp: tmp,
    }
}

fn new_donor(first_name: &str) -> NewDonor {
    NewDonor {
        id: None,
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        email: None,
        phone: None,
        address: None,
        city: None,
        state: None,
        zip_code: None,
        status: Default::default(),
        notes: None,
        tags: None,
    }
}

fn new_donation(donor_id: &str, amount: &str, date: &str) -> NewDonation {
    NewDonation {
        id: None,
        donor_id: donor_id.to_string(),
        amount: amount.parse().unwrap(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        campaign_id: None,
        method: None,
        donation_type: None,
        notes: None,
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn created_donor_round_trips_with_default_metrics() {
    let db = setup().await;

    let donor = db.donor_repo.create("org-1", new_donor("Ada")).await.unwrap();
    assert!(!donor.id.is_empty());
    assert_eq!(donor.total_gifts, 0);
    assert_eq!(donor.total_amount, Decimal::ZERO);
    assert_eq!(donor.retention_risk, RetentionRisk::Unknown);

    let loaded = db.donor_repo.get_by_id("org-1", &donor.id).unwrap();
    assert_eq!(loaded.first_name, "Ada");
}

#[tokio::test]
async fn queries_are_scoped_by_organization() {
    let db = setup().await;

    let donor = db.donor_repo.create("org-1", new_donor("Ada")).await.unwrap();

    let err = db.donor_repo.get_by_id("org-2", &donor.id).unwrap_err();
    assert!(err.is_not_found());
    assert!(db.donor_repo.list("org-2", None).unwrap().is_empty());
}

#[tokio::test]
async fn metrics_update_replaces_all_fields_and_clears_dates() {
    let db = setup().await;
    let donor = db.donor_repo.create("org-1", new_donor("Ada")).await.unwrap();

    let updated = db
        .donor_repo
        .update_metrics(
            "org-1",
            &donor.id,
            DonorMetricsUpdate {
                total_gifts: 2,
                total_amount: "35.50".parse().unwrap(),
                first_gift_date: Some(ymd(2024, 1, 1)),
                last_gift_date: Some(ymd(2024, 2, 1)),
                retention_risk: RetentionRisk::Critical,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.total_gifts, 2);
    assert_eq!(updated.total_amount, "35.50".parse().unwrap());
    assert_eq!(updated.first_gift_date, Some(ymd(2024, 1, 1)));

    // An empty-ledger rewrite must clear the dates, not keep stale ones
    let cleared = db
        .donor_repo
        .update_metrics(
            "org-1",
            &donor.id,
            DonorMetricsUpdate {
                total_gifts: 0,
                total_amount: Decimal::ZERO,
                first_gift_date: None,
                last_gift_date: None,
                retention_risk: RetentionRisk::Unknown,
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.first_gift_date, None);
    assert_eq!(cleared.last_gift_date, None);
    assert_eq!(cleared.retention_risk, RetentionRisk::Unknown);
}

#[tokio::test]
async fn deleting_a_donor_cascades_to_its_donations() {
    let db = setup().await;
    let donor = db.donor_repo.create("org-1", new_donor("Ada")).await.unwrap();

    db.donation_repo
        .create("org-1", new_donation(&donor.id, "10.50", "2024-01-01"))
        .await
        .unwrap();
    db.donation_repo
        .create("org-1", new_donation(&donor.id, "25.00", "2024-03-15"))
        .await
        .unwrap();
    assert_eq!(
        db.donation_repo.list_by_donor("org-1", &donor.id).unwrap().len(),
        2
    );

    db.donor_repo.delete("org-1", &donor.id).await.unwrap();
    assert!(db
        .donation_repo
        .list_by_donor("org-1", &donor.id)
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn donation_amounts_survive_the_text_column_exactly() {
    let db = setup().await;
    let donor = db.donor_repo.create("org-1", new_donor("Ada")).await.unwrap();

    let donation = db
        .donation_repo
        .create("org-1", new_donation(&donor.id, "10.50", "2024-01-01"))
        .await
        .unwrap();
    assert_eq!(donation.amount, "10.50".parse::<Decimal>().unwrap());

    let loaded = db.donation_repo.get_by_id("org-1", &donation.id).unwrap();
    assert_eq!(loaded.amount, "10.50".parse::<Decimal>().unwrap());
    assert_eq!(loaded.date, ymd(2024, 1, 1));
}

#[tokio::test]
async fn list_by_donor_returns_most_recent_first() {
    let db = setup().await;
    let donor = db.donor_repo.create("org-1", new_donor("Ada")).await.unwrap();

    for (amount, date) in [("10.50", "2024-01-01"), ("25.00", "2024-03-15"), ("14.50", "2024-02-01")] {
        db.donation_repo
            .create("org-1", new_donation(&donor.id, amount, date))
            .await
            .unwrap();
    }

    let donations = db.donation_repo.list_by_donor("org-1", &donor.id).unwrap();
    let dates: Vec<NaiveDate> = donations.iter().map(|d| d.date).collect();
    assert_eq!(
        dates,
        vec![ymd(2024, 3, 15), ymd(2024, 2, 1), ymd(2024, 1, 1)]
    );
}
