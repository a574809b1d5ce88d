//! Campaign progress, segment membership, and workflow automation flows.

mod common;

use axum::http::Method;
use common::{build_test_router, issue_token, request};
use serde_json::json;

#[tokio::test]
async fn campaign_progress_tracks_attributed_donations() {
    let (app, _tmp) = build_test_router().await;
    let token = issue_token("org-1", "user-1");

    let (status, campaign) = request(
        &app,
        Some(&token),
        Method::POST,
        "/api/v1/campaigns",
        Some(json!({ "name": "Annual Fund", "goalAmount": 1000.0 })),
    )
    .await;
    assert_eq!(status, 200);
    let campaign_id = campaign["id"].as_str().unwrap();

    let (_, donor) = request(
        &app,
        Some(&token),
        Method::POST,
        "/api/v1/donors",
        Some(json!({ "firstName": "Ada" })),
    )
    .await;
    let donor_id = donor["id"].as_str().unwrap();

    for (amount, date) in [(150.0, "2024-01-05"), (100.0, "2024-02-05")] {
        let (status, _) = request(
            &app,
            Some(&token),
            Method::POST,
            "/api/v1/donations",
            Some(json!({
                "donorId": donor_id,
                "campaignId": campaign_id,
                "amount": amount,
                "date": date
            })),
        )
        .await;
        assert_eq!(status, 200);
    }
    // One unattributed gift that must not count
    let (status, _) = request(
        &app,
        Some(&token),
        Method::POST,
        "/api/v1/donations",
        Some(json!({ "donorId": donor_id, "amount": 999.0, "date": "2024-03-01" })),
    )
    .await;
    assert_eq!(status, 200);

    let (status, progress) = request(
        &app,
        Some(&token),
        Method::GET,
        &format!("/api/v1/campaigns/{}/progress", campaign_id),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(progress["raised"].as_f64().unwrap(), 250.0);
    assert_eq!(progress["donationCount"], 2);
    assert_eq!(progress["percentOfGoal"].as_f64().unwrap(), 25.0);
}

#[tokio::test]
async fn segments_evaluate_membership_against_current_metrics() {
    let (app, _tmp) = build_test_router().await;
    let token = issue_token("org-1", "user-1");

    let (_, major) = request(
        &app,
        Some(&token),
        Method::POST,
        "/api/v1/donors",
        Some(json!({ "firstName": "Major", "lastName": "Giver" })),
    )
    .await;
    let (_, small) = request(
        &app,
        Some(&token),
        Method::POST,
        "/api/v1/donors",
        Some(json!({ "firstName": "Small", "lastName": "Giver" })),
    )
    .await;

    for (donor, amount) in [(&major, 500.0), (&small, 20.0)] {
        let (status, _) = request(
            &app,
            Some(&token),
            Method::POST,
            "/api/v1/donations",
            Some(json!({
                "donorId": donor["id"].as_str().unwrap(),
                "amount": amount,
                "date": "2024-04-01"
            })),
        )
        .await;
        assert_eq!(status, 200);
    }

    let (status, segment) = request(
        &app,
        Some(&token),
        Method::POST,
        "/api/v1/segments",
        Some(json!({
            "name": "Major donors",
            "criteria": { "minTotalAmount": 100.0 }
        })),
    )
    .await;
    assert_eq!(status, 200);
    let segment_id = segment["id"].as_str().unwrap();

    let (status, members) = request(
        &app,
        Some(&token),
        Method::GET,
        &format!("/api/v1/segments/{}/members", segment_id),
        None,
    )
    .await;
    assert_eq!(status, 200);
    let members = members.as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["firstName"], "Major");

    let (status, count) = request(
        &app,
        Some(&token),
        Method::GET,
        &format!("/api/v1/segments/{}/count", segment_id),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(count["memberCount"], 1);
}

#[tokio::test]
async fn add_tag_workflow_fires_on_donation_created() {
    let (app, _tmp) = build_test_router().await;
    let token = issue_token("org-1", "user-1");

    let (status, workflow) = request(
        &app,
        Some(&token),
        Method::POST,
        "/api/v1/workflows",
        Some(json!({
            "name": "Tag recent givers",
            "trigger": "DONATION_CREATED",
            "action": "ADD_TAG",
            "actionParams": "{\"tag\":\"gave-recently\"}"
        })),
    )
    .await;
    assert_eq!(status, 200);
    let workflow_id = workflow["id"].as_str().unwrap();
    assert_eq!(workflow["runCount"], 0);

    let (_, donor) = request(
        &app,
        Some(&token),
        Method::POST,
        "/api/v1/donors",
        Some(json!({ "firstName": "Ada" })),
    )
    .await;
    let donor_id = donor["id"].as_str().unwrap();

    let (status, _) = request(
        &app,
        Some(&token),
        Method::POST,
        "/api/v1/donations",
        Some(json!({ "donorId": donor_id, "amount": 10.0, "date": "2024-05-01" })),
    )
    .await;
    assert_eq!(status, 200);

    let (_, donor) = request(
        &app,
        Some(&token),
        Method::GET,
        &format!("/api/v1/donors/{}", donor_id),
        None,
    )
    .await;
    let tags: Vec<String> =
        serde_json::from_str(donor["tags"].as_str().unwrap()).unwrap();
    assert!(tags.contains(&"gave-recently".to_string()));

    let (_, workflow) = request(
        &app,
        Some(&token),
        Method::GET,
        &format!("/api/v1/workflows/{}", workflow_id),
        None,
    )
    .await;
    assert_eq!(workflow["runCount"], 1);
    assert!(workflow["lastRunAt"].is_string());
}
