//! Handlers for the `/projects` resource.

use atelier_core::error::CoreError;
use atelier_core::types::ProjectId;
use atelier_db::models::project::{CreateProject, Project, UpdateProject};
use atelier_db::repositories::ProjectRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Parse a raw path segment into a project id.
///
/// A malformed id is indistinguishable from a missing row: it is logged at
/// debug level and treated as not-found by the callers.
fn parse_id(raw: &str) -> Option<ProjectId> {
    match Uuid::parse_str(raw) {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::debug!(id = raw, "Malformed project id in path");
            None
        }
    }
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(id = %project.id, title = %project.title, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Project>> {
    let project = match parse_id(&raw_id) {
        Some(id) => ProjectRepo::find_by_id(&state.pool, id).await?,
        None => None,
    };

    let project = project.ok_or(AppError::Core(CoreError::NotFound { entity: "Project" }))?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
///
/// 404 is reserved for single-project GET; an update against a missing or
/// malformed id surfaces as a generic failure, matching the adapter contract.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let updated = match parse_id(&raw_id) {
        Some(id) => ProjectRepo::update(&state.pool, id, &input).await?,
        None => None,
    };

    let project = updated
        .ok_or_else(|| AppError::InternalError(format!("Failed to update project {raw_id}")))?;
    tracing::info!(id = %project.id, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
///
/// Always confirms: deleting a nonexistent or malformed id is a silent
/// no-op by the delete-by-filter semantics of the store.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if let Some(id) = parse_id(&raw_id) {
        let removed = ProjectRepo::delete(&state.pool, id).await?;
        if removed {
            tracing::info!(%id, "Project deleted");
        } else {
            tracing::debug!(%id, "Delete of nonexistent project ignored");
        }
    }

    Ok(Json(MessageResponse {
        message: "Project deleted successfully".to_string(),
    }))
}
