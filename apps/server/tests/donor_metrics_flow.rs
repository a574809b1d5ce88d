//! End-to-end coverage of the donation write path and the donor metrics
//! engine behind it.

mod common;

use axum::http::Method;
use common::{build_test_router, issue_token, request};
use serde_json::json;

async fn create_donor(app: &axum::Router, token: &str, first_name: &str) -> serde_json::Value {
    let (status, donor) = request(
        app,
        Some(token),
        Method::POST,
        "/api/v1/donors",
        Some(json!({ "firstName": first_name, "email": "donor@example.org" })),
    )
    .await;
    assert_eq!(status, 200);
    donor
}

async fn create_donation(
    app: &axum::Router,
    token: &str,
    donor_id: &str,
    amount: f64,
    date: &str,
) -> serde_json::Value {
    let (status, donation) = request(
        app,
        Some(token),
        Method::POST,
        "/api/v1/donations",
        Some(json!({ "donorId": donor_id, "amount": amount, "date": date })),
    )
    .await;
    assert_eq!(status, 200);
    donation
}

async fn get_donor(app: &axum::Router, token: &str, donor_id: &str) -> serde_json::Value {
    let (status, donor) = request(
        app,
        Some(token),
        Method::GET,
        &format!("/api/v1/donors/{}", donor_id),
        None,
    )
    .await;
    assert_eq!(status, 200);
    donor
}

#[tokio::test]
async fn new_donor_starts_with_identity_metrics() {
    let (app, _tmp) = build_test_router().await;
    let token = issue_token("org-1", "user-1");

    let donor = create_donor(&app, &token, "Fresh").await;
    assert_eq!(donor["totalGifts"], 0);
    assert_eq!(donor["totalAmount"].as_f64().unwrap(), 0.0);
    assert_eq!(donor["firstGiftDate"], serde_json::Value::Null);
    assert_eq!(donor["lastGiftDate"], serde_json::Value::Null);
    assert_eq!(donor["retentionRisk"], "UNKNOWN");
}

#[tokio::test]
async fn donation_writes_keep_donor_metrics_in_sync() {
    let (app, _tmp) = build_test_router().await;
    let token = issue_token("org-1", "user-1");

    let donor = create_donor(&app, &token, "Ada").await;
    let donor_id = donor["id"].as_str().unwrap();

    create_donation(&app, &token, donor_id, 10.50, "2024-01-01").await;
    let march = create_donation(&app, &token, donor_id, 25.00, "2024-03-15").await;
    create_donation(&app, &token, donor_id, 14.50, "2024-02-01").await;

    let donor = get_donor(&app, &token, donor_id).await;
    assert_eq!(donor["totalGifts"], 3);
    assert_eq!(donor["totalAmount"].as_f64().unwrap(), 50.0);
    assert_eq!(donor["firstGiftDate"], "2024-01-01");
    assert_eq!(donor["lastGiftDate"], "2024-03-15");
    // Gifts all lie more than a year back
    assert_eq!(donor["retentionRisk"], "CRITICAL");

    // Administrative delete of the newest gift
    let march_id = march["id"].as_str().unwrap();
    let (status, _) = request(
        &app,
        Some(&token),
        Method::DELETE,
        &format!("/api/v1/donations/{}", march_id),
        None,
    )
    .await;
    assert_eq!(status, 204);

    let donor = get_donor(&app, &token, donor_id).await;
    assert_eq!(donor["totalGifts"], 2);
    assert_eq!(donor["totalAmount"].as_f64().unwrap(), 25.0);
    assert_eq!(donor["firstGiftDate"], "2024-01-01");
    assert_eq!(donor["lastGiftDate"], "2024-02-01");
}

#[tokio::test]
async fn metadata_edits_leave_metrics_untouched() {
    let (app, _tmp) = build_test_router().await;
    let token = issue_token("org-1", "user-1");

    let donor = create_donor(&app, &token, "Ada").await;
    let donor_id = donor["id"].as_str().unwrap();
    let donation = create_donation(&app, &token, donor_id, 20.00, "2024-02-01").await;
    let donation_id = donation["id"].as_str().unwrap();

    let (status, _) = request(
        &app,
        Some(&token),
        Method::PUT,
        &format!("/api/v1/donations/{}", donation_id),
        Some(json!({
            "amount": 20.00,
            "date": "2024-02-01",
            "method": "CARD",
            "notes": "thanked by phone"
        })),
    )
    .await;
    assert_eq!(status, 200);

    let donor = get_donor(&app, &token, donor_id).await;
    assert_eq!(donor["totalGifts"], 1);
    assert_eq!(donor["totalAmount"].as_f64().unwrap(), 20.0);

    // An amount correction is reflected immediately
    let (status, _) = request(
        &app,
        Some(&token),
        Method::PUT,
        &format!("/api/v1/donations/{}", donation_id),
        Some(json!({ "amount": 35.00, "date": "2024-02-01" })),
    )
    .await;
    assert_eq!(status, 200);

    let donor = get_donor(&app, &token, donor_id).await;
    assert_eq!(donor["totalAmount"].as_f64().unwrap(), 35.0);
}

#[tokio::test]
async fn donation_validation_and_missing_donor_are_rejected() {
    let (app, _tmp) = build_test_router().await;
    let token = issue_token("org-1", "user-1");

    // Unknown donor
    let (status, _) = request(
        &app,
        Some(&token),
        Method::POST,
        "/api/v1/donations",
        Some(json!({ "donorId": "ghost", "amount": 10.0, "date": "2024-01-01" })),
    )
    .await;
    assert_eq!(status, 404);

    // Non-positive amount
    let donor = create_donor(&app, &token, "Ada").await;
    let (status, _) = request(
        &app,
        Some(&token),
        Method::POST,
        "/api/v1/donations",
        Some(json!({
            "donorId": donor["id"].as_str().unwrap(),
            "amount": 0.0,
            "date": "2024-01-01"
        })),
    )
    .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn risk_endpoint_reports_persisted_and_live_values_separately() {
    let (app, _tmp) = build_test_router().await;
    let token = issue_token("org-1", "user-1");

    let donor = create_donor(&app, &token, "Ada").await;
    let donor_id = donor["id"].as_str().unwrap();
    create_donation(&app, &token, donor_id, 50.00, "2024-01-01").await;

    let (status, risk) = request(
        &app,
        Some(&token),
        Method::GET,
        &format!("/api/v1/donors/{}/risk", donor_id),
        None,
    )
    .await;
    assert_eq!(status, 200);
    // Day buckets say CRITICAL; the month-bucket live estimate tops out at HIGH
    assert_eq!(risk["persisted"], "CRITICAL");
    assert_eq!(risk["live"], "HIGH");
}

#[tokio::test]
async fn explicit_recompute_is_idempotent() {
    let (app, _tmp) = build_test_router().await;
    let token = issue_token("org-1", "user-1");

    let donor = create_donor(&app, &token, "Ada").await;
    let donor_id = donor["id"].as_str().unwrap();
    create_donation(&app, &token, donor_id, 42.00, "2024-05-01").await;

    let (status, first) = request(
        &app,
        Some(&token),
        Method::POST,
        &format!("/api/v1/donors/{}/recompute", donor_id),
        None,
    )
    .await;
    assert_eq!(status, 200);

    let (status, second) = request(
        &app,
        Some(&token),
        Method::POST,
        &format!("/api/v1/donors/{}/recompute", donor_id),
        None,
    )
    .await;
    assert_eq!(status, 200);

    for field in [
        "totalGifts",
        "totalAmount",
        "firstGiftDate",
        "lastGiftDate",
        "retentionRisk",
    ] {
        assert_eq!(first[field], second[field], "field {} drifted", field);
    }
}
