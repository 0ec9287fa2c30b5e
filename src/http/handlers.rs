//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer or the import orchestrator for business logic.

use std::io::Write;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use tempfile::NamedTempFile;
use tracing::info;

use super::dto::{
    CreateEntryResponse, EntryRequest, HealthResponse, ListQuery, OperationResponse,
    ScheduleEntryDto, ScheduleListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{EntryId, SemesterId, UserId};
use crate::db::services as db_services;
use crate::import::{ImportMode, ImportOutcome};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Schedule CRUD
// =============================================================================

/// GET /v1/schedules?user_id=&semester_id=
///
/// List one user's schedule entries for a semester.
pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> HandlerResult<ScheduleListResponse> {
    let entries = db_services::list_entries(
        state.repository.as_ref(),
        SemesterId::new(query.semester_id),
        UserId::new(query.user_id),
    )
    .await?;

    let schedules: Vec<ScheduleEntryDto> = entries.into_iter().map(Into::into).collect();
    let total = schedules.len();

    Ok(Json(ScheduleListResponse { schedules, total }))
}

/// POST /v1/schedules
///
/// Create a new schedule entry.
pub async fn create_entry(
    State(state): State<AppState>,
    Json(request): Json<EntryRequest>,
) -> Result<(StatusCode, Json<CreateEntryResponse>), AppError> {
    let entry = request.into_new_entry();
    let entry_id = db_services::create_entry(state.repository.as_ref(), &entry).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateEntryResponse {
            entry_id: entry_id.value(),
            message: "Schedule entry created".to_string(),
        }),
    ))
}

/// PUT /v1/schedules/{entry_id}
///
/// Update an existing schedule entry.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<i64>,
    Json(request): Json<EntryRequest>,
) -> HandlerResult<OperationResponse> {
    let entry = request.into_new_entry();
    db_services::update_entry(state.repository.as_ref(), EntryId::new(entry_id), &entry).await?;

    Ok(Json(OperationResponse {
        message: "Schedule entry updated".to_string(),
    }))
}

/// DELETE /v1/schedules/{entry_id}
///
/// Delete a schedule entry.
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<i64>,
) -> HandlerResult<OperationResponse> {
    db_services::delete_entry(state.repository.as_ref(), EntryId::new(entry_id)).await?;

    Ok(Json(OperationResponse {
        message: "Schedule entry deleted".to_string(),
    }))
}

// =============================================================================
// Bulk Import
// =============================================================================

/// POST /v1/schedules/import
///
/// Import schedule entries from an uploaded delimited text file.
///
/// Multipart fields: `file` (the upload), `user_id`, `semester_id`, and an
/// optional `confirm` flag (`"true"` commits, anything else previews). The
/// upload is spooled to a temporary file that is removed when the handler
/// returns, on every exit path.
pub async fn import_entries(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> HandlerResult<ImportOutcome> {
    let mut upload: Option<NamedTempFile> = None;
    let mut user_id: Option<i64> = None;
    let mut semester_id: Option<i64> = None;
    let mut confirm = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;
                let mut spool = NamedTempFile::new()
                    .map_err(|e| AppError::Internal(format!("Failed to spool upload: {}", e)))?;
                spool
                    .write_all(&bytes)
                    .map_err(|e| AppError::Internal(format!("Failed to spool upload: {}", e)))?;
                upload = Some(spool);
            }
            "user_id" => user_id = Some(parse_field(&name, field).await?),
            "semester_id" => semester_id = Some(parse_field(&name, field).await?),
            "confirm" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid confirm field: {}", e)))?;
                confirm = value == "true";
            }
            _ => {}
        }
    }

    let upload =
        upload.ok_or_else(|| AppError::BadRequest("Missing file (field = file)".to_string()))?;
    let user_id =
        user_id.ok_or_else(|| AppError::BadRequest("Missing user_id field".to_string()))?;
    let semester_id = semester_id
        .ok_or_else(|| AppError::BadRequest("Missing semester_id field".to_string()))?;

    let mode = if confirm {
        ImportMode::Commit
    } else {
        ImportMode::Preview
    };
    info!(user_id, semester_id, ?mode, "starting schedule import");

    let outcome = state
        .importer
        .import_path(
            state.repository.as_ref(),
            upload.path(),
            UserId::new(user_id),
            SemesterId::new(semester_id),
            mode,
        )
        .await?;

    // `upload` drops here, deleting the spooled file.
    Ok(Json(outcome))
}

async fn parse_field(name: &str, field: axum::extract::multipart::Field<'_>) -> Result<i64, AppError> {
    let value = field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid {} field: {}", name, e)))?;
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("{} must be an integer", name)))
}
