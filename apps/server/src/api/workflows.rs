use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};

use donorhub_core::workflows::{NewWorkflow, Workflow, WorkflowUpdate};

use crate::{auth::AuthContext, error::ApiResult, main_lib::AppState};

async fn list_workflows(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<Json<Vec<Workflow>>> {
    let workflows = state.workflow_service.list_workflows(&ctx.organization_id)?;
    Ok(Json(workflows))
}

async fn get_workflow(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<Json<Workflow>> {
    let workflow = state
        .workflow_service
        .get_workflow(&ctx.organization_id, &id)?;
    Ok(Json(workflow))
}

async fn create_workflow(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Json(new_workflow): Json<NewWorkflow>,
) -> ApiResult<Json<Workflow>> {
    let workflow = state
        .workflow_service
        .create_workflow(&ctx.organization_id, new_workflow)
        .await?;
    Ok(Json(workflow))
}

async fn update_workflow(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
    Json(mut workflow_update): Json<WorkflowUpdate>,
) -> ApiResult<Json<Workflow>> {
    workflow_update.id = Some(id);
    let workflow = state
        .workflow_service
        .update_workflow(&ctx.organization_id, workflow_update)
        .await?;
    Ok(Json(workflow))
}

async fn delete_workflow(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<AuthContext>,
) -> ApiResult<StatusCode> {
    state
        .workflow_service
        .delete_workflow(&ctx.organization_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/workflows", get(list_workflows).post(create_workflow))
        .route(
            "/workflows/{id}",
            get(get_workflow)
                .put(update_workflow)
                .delete(delete_workflow),
        )
}
