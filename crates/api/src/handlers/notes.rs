//! Handlers for note CRUD.
//!
//! Each handler performs at most one repository call and always answers
//! with the [`ApiResponse`] envelope. Extractor rejections are taken as
//! `Result` so malformed input is reported inside the envelope as well.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use notes_core::error::CoreError;
use notes_core::note::NOTE_ENTITY;
use notes_core::types::DbId;
use notes_db::models::note::{CreateNote, UpdateNote};
use notes_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::response::{ApiResponse, NoteResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: NOTE_ENTITY,
        id,
    })
}

/// GET /notes
///
/// List all notes, most recently created first.
pub async fn list_notes(
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<NoteResponse>>> {
    let notes = NoteRepo::list(&state.pool).await?;

    Ok(ApiResponse::ok(
        notes.into_iter().map(NoteResponse::from).collect(),
    ))
}

/// GET /notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<ApiResponse<NoteResponse>> {
    let Path(note_id) = path?;

    let note = NoteRepo::find_by_id(&state.pool, note_id)
        .await?
        .ok_or_else(|| not_found(note_id))?;

    Ok(ApiResponse::ok(note.into()))
}

/// POST /notes
///
/// Validate and insert a new note.
pub async fn create_note(
    State(state): State<AppState>,
    body: Result<Json<CreateNote>, JsonRejection>,
) -> AppResult<ApiResponse<NoteResponse>> {
    let Json(input) = body?;
    input.validate()?;

    let note = NoteRepo::create(&state.pool, &input).await?;

    tracing::info!(note_id = note.id, "Note created");

    Ok(ApiResponse::ok_with_message(
        note.into(),
        "Note created successfully",
    ))
}

/// PUT /notes/{id}
///
/// Apply a partial update. Fields missing from the body keep their value.
pub async fn update_note(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    body: Result<Json<UpdateNote>, JsonRejection>,
) -> AppResult<ApiResponse<NoteResponse>> {
    let Path(note_id) = path?;
    let Json(input) = body?;
    input.validate()?;

    let note = NoteRepo::update(&state.pool, note_id, &input)
        .await?
        .ok_or_else(|| not_found(note_id))?;

    tracing::info!(note_id, empty_patch = input.is_empty(), "Note updated");

    Ok(ApiResponse::ok_with_message(
        note.into(),
        "Note updated successfully",
    ))
}

/// DELETE /notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<ApiResponse<bool>> {
    let Path(note_id) = path?;

    if !NoteRepo::delete(&state.pool, note_id).await? {
        return Err(not_found(note_id));
    }

    tracing::info!(note_id, "Note deleted");

    Ok(ApiResponse::ok_with_message(
        true,
        "Note deleted successfully",
    ))
}
