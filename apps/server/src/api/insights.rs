use std::sync::Arc;

use axum::{extract::State, routing::get, Extension, Json, Router};

use donorhub_core::insights::Insight;

use crate::{auth::AuthContext, error::ApiResult, main_lib::AppState};

async fn get_dashboard_insights(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<Json<Insight>> {
    let insight = state
        .insights_service
        .dashboard_insights(&ctx.organization_id)
        .await?;
    Ok(Json(insight))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/insights/dashboard", get(get_dashboard_insights))
}
