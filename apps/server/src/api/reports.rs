use std::sync::Arc;

use axum::{extract::State, routing::get, Extension, Json, Router};

use donorhub_core::reports::DashboardSummary;

use crate::{auth::AuthContext, error::ApiResult, main_lib::AppState};

async fn get_dashboard_summary(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<Json<DashboardSummary>> {
    let summary = state
        .reports_service
        .get_dashboard_summary(&ctx.organization_id)?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/reports/dashboard", get(get_dashboard_summary))
}
