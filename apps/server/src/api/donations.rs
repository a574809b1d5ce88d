use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde::Deserialize;

use donorhub_core::donations::{Donation, DonationUpdate, NewDonation};

use crate::{auth::AuthContext, error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDonationsParams {
    donor_id: Option<String>,
    campaign_id: Option<String>,
}

async fn list_donations(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Query(params): Query<ListDonationsParams>,
) -> ApiResult<Json<Vec<Donation>>> {
    let donations = if let Some(donor_id) = params.donor_id {
        state
            .donation_service
            .get_donations_by_donor(&ctx.organization_id, &donor_id)?
    } else if let Some(campaign_id) = params.campaign_id {
        state
            .donation_service
            .get_donations_by_campaign(&ctx.organization_id, &campaign_id)?
    } else {
        state.donation_service.get_donations(&ctx.organization_id)?
    };
    Ok(Json(donations))
}

async fn get_donation(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<Json<Donation>> {
    let donation = state
        .donation_service
        .get_donation(&ctx.organization_id, &id)?;
    Ok(Json(donation))
}

async fn create_donation(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Json(new_donation): Json<NewDonation>,
) -> ApiResult<Json<Donation>> {
    let donation = state
        .donation_service
        .create_donation(&ctx.organization_id, new_donation)
        .await?;
    Ok(Json(donation))
}

async fn update_donation(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Json(mut donation_update): Json<DonationUpdate>,
) -> ApiResult<Json<Donation>> {
    donation_update.id = Some(id);
    let donation = state
        .donation_service
        .update_donation(&ctx.organization_id, donation_update)
        .await?;
    Ok(Json(donation))
}

async fn delete_donation(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<StatusCode> {
    state
        .donation_service
        .delete_donation(&ctx.organization_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/donations", get(list_donations).post(create_donation))
        .route(
            "/donations/{id}",
            get(get_donation)
                .put(update_donation)
                .delete(delete_donation),
        )
}
