use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use donorhub_core::donors::{Donor, DonorStatus, DonorUpdate, NewDonor};
use donorhub_core::metrics::{live_retention_risk, RetentionRisk};

use crate::{auth::AuthContext, error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDonorsParams {
    status: Option<DonorStatus>,
    q: Option<String>,
}

/// Both risk readings side by side: the persisted classification written
/// by the last recomputation, and the live display-only estimate.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DonorRiskView {
    donor_id: String,
    persisted: RetentionRisk,
    live: RetentionRisk,
}

async fn list_donors(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Query(params): Query<ListDonorsParams>,
) -> ApiResult<Json<Vec<Donor>>> {
    let donors = match params.q {
        Some(q) if !q.trim().is_empty() => state
            .donor_service
            .search_donors(&ctx.organization_id, &q)?,
        _ => state
            .donor_service
            .list_donors(&ctx.organization_id, params.status)?,
    };
    Ok(Json(donors))
}

async fn get_donor(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<Json<Donor>> {
    let donor = state.donor_service.get_donor(&ctx.organization_id, &id)?;
    Ok(Json(donor))
}

async fn create_donor(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Json(new_donor): Json<NewDonor>,
) -> ApiResult<Json<Donor>> {
    let donor = state
        .donor_service
        .create_donor(&ctx.organization_id, new_donor)
        .await?;
    Ok(Json(donor))
}

async fn update_donor(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Json(mut donor_update): Json<DonorUpdate>,
) -> ApiResult<Json<Donor>> {
    donor_update.id = Some(id);
    let donor = state
        .donor_service
        .update_donor(&ctx.organization_id, donor_update)
        .await?;
    Ok(Json(donor))
}

async fn delete_donor(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<StatusCode> {
    state
        .donor_service
        .delete_donor(&ctx.organization_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_donor_risk(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<Json<DonorRiskView>> {
    let donor = state.donor_service.get_donor(&ctx.organization_id, &id)?;
    let live = live_retention_risk(
        donor.last_gift_date,
        donor.has_contact_info(),
        Utc::now().date_naive(),
    );
    Ok(Json(DonorRiskView {
        donor_id: donor.id,
        persisted: donor.retention_risk,
        live,
    }))
}

/// Explicit re-trigger of the synchronizer. Idempotent, so safe to call
/// whenever the cached fields are suspected stale.
async fn recompute_donor_metrics(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<Json<Donor>> {
    let donor = state
        .metrics_service
        .recompute_donor_metrics(&ctx.organization_id, &id)
        .await?;
    Ok(Json(donor))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/donors", get(list_donors).post(create_donor))
        .route(
            "/donors/{id}",
            get(get_donor).put(update_donor).delete(delete_donor),
        )
        .route("/donors/{id}/risk", get(get_donor_risk))
        .route("/donors/{id}/recompute", post(recompute_donor_metrics))
}
