use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};

use donorhub_core::campaigns::{Campaign, CampaignProgress, CampaignUpdate, NewCampaign};

use crate::{auth::AuthContext, error::ApiResult, main_lib::AppState};

async fn list_campaigns(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<Json<Vec<Campaign>>> {
    let campaigns = state.campaign_service.list_campaigns(&ctx.organization_id)?;
    Ok(Json(campaigns))
}

async fn get_campaign(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<Json<Campaign>> {
    let campaign = state
        .campaign_service
        .get_campaign(&ctx.organization_id, &id)?;
    Ok(Json(campaign))
}

async fn create_campaign(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Json(new_campaign): Json<NewCampaign>,
) -> ApiResult<Json<Campaign>> {
    let campaign = state
        .campaign_service
        .create_campaign(&ctx.organization_id, new_campaign)
        .await?;
    Ok(Json(campaign))
}

async fn update_campaign(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Json(mut campaign_update): Json<CampaignUpdate>,
) -> ApiResult<Json<Campaign>> {
    campaign_update.id = Some(id);
    let campaign = state
        .campaign_service
        .update_campaign(&ctx.organization_id, campaign_update)
        .await?;
    Ok(Json(campaign))
}

async fn delete_campaign(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<StatusCode> {
    state
        .campaign_service
        .delete_campaign(&ctx.organization_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_campaign_progress(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<Json<CampaignProgress>> {
    let progress = state
        .campaign_service
        .get_campaign_progress(&ctx.organization_id, &id)?;
    Ok(Json(progress))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/campaigns", get(list_campaigns).post(create_campaign))
        .route(
            "/campaigns/{id}",
            get(get_campaign)
                .put(update_campaign)
                .delete(delete_campaign),
        )
        .route("/campaigns/{id}/progress", get(get_campaign_progress))
}
