use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde::Serialize;

use donorhub_core::donors::Donor;
use donorhub_core::segments::{NewSegment, Segment, SegmentUpdate};

use crate::{auth::AuthContext, error::ApiResult, main_lib::AppState};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SegmentMemberCount {
    segment_id: String,
    member_count: usize,
}

async fn list_segments(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<Json<Vec<Segment>>> {
    let segments = state.segment_service.list_segments(&ctx.organization_id)?;
    Ok(Json(segments))
}

async fn get_segment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<Json<Segment>> {
    let segment = state
        .segment_service
        .get_segment(&ctx.organization_id, &id)?;
    Ok(Json(segment))
}

async fn create_segment(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Json(new_segment): Json<NewSegment>,
) -> ApiResult<Json<Segment>> {
    let segment = state
        .segment_service
        .create_segment(&ctx.organization_id, new_segment)
        .await?;
    Ok(Json(segment))
}

async fn update_segment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Json(mut segment_update): Json<SegmentUpdate>,
) -> ApiResult<Json<Segment>> {
    segment_update.id = Some(id);
    let segment = state
        .segment_service
        .update_segment(&ctx.organization_id, segment_update)
        .await?;
    Ok(Json(segment))
}

async fn delete_segment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<StatusCode> {
    state
        .segment_service
        .delete_segment(&ctx.organization_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_segment_members(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<Json<Vec<Donor>>> {
    let members = state
        .segment_service
        .list_members(&ctx.organization_id, &id)?;
    Ok(Json(members))
}

async fn get_segment_member_count(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<Json<SegmentMemberCount>> {
    let member_count = state
        .segment_service
        .member_count(&ctx.organization_id, &id)?;
    Ok(Json(SegmentMemberCount {
        segment_id: id,
        member_count,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/segments", get(list_segments).post(create_segment))
        .route(
            "/segments/{id}",
            get(get_segment).put(update_segment).delete(delete_segment),
        )
        .route("/segments/{id}/members", get(list_segment_members))
        .route("/segments/{id}/count", get(get_segment_member_count))
}
