//! Response envelope and note representation shared by all note handlers.
//!
//! Every note endpoint answers with the same four-key envelope:
//!
//! ```json
//! { "success": true, "data": ..., "error": null, "message": null }
//! ```
//!
//! Logical failures (validation, not found, database) still use HTTP 200 and
//! report `success: false`; clients branch on the flag, not the status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use notes_db::models::note::Note;
use serde::Serialize;

/// Standard `{ success, data, error, message }` response envelope.
///
/// All four keys are always serialized; absent values are `null`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    /// Successful response carrying `data` and a human-readable message.
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }
}

impl ApiResponse<()> {
    /// Failed response with an error description and no data.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Note as rendered to clients: string id, RFC 3339 timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub color: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id.to_string(),
            title: note.title,
            content: note.content,
            color: note.color,
            created_at: note.created_at.to_rfc3339(),
            updated_at: note.updated_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;

    fn sample_note() -> Note {
        let created = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        Note {
            id: 42,
            title: "T".to_string(),
            content: "C".to_string(),
            color: Some("#ff6b6b".to_string()),
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn note_response_renders_string_id_and_iso_timestamps() {
        let response = NoteResponse::from(sample_note());
        assert_eq!(response.id, "42");
        assert_eq!(response.created_at, "2025-01-02T03:04:05+00:00");
        assert_eq!(response.updated_at, response.created_at);
        assert_eq!(response.color.as_deref(), Some("#ff6b6b"));
    }

    #[test]
    fn note_response_passes_null_color_through() {
        let note = Note {
            color: None,
            ..sample_note()
        };
        let value = serde_json::to_value(NoteResponse::from(note)).unwrap();
        assert!(value["color"].is_null());
    }

    #[test]
    fn success_envelope_serializes_all_keys() {
        let value = serde_json::to_value(ApiResponse::ok(true)).unwrap();
        assert_eq!(
            value,
            json!({ "success": true, "data": true, "error": null, "message": null })
        );
    }

    #[test]
    fn success_with_message() {
        let value =
            serde_json::to_value(ApiResponse::ok_with_message(vec![1, 2], "done")).unwrap();
        assert_eq!(value["data"], json!([1, 2]));
        assert_eq!(value["message"], "done");
    }

    #[test]
    fn failure_envelope_has_error_and_null_data() {
        let value = serde_json::to_value(ApiResponse::failure("Note not found")).unwrap();
        assert_eq!(
            value,
            json!({ "success": false, "data": null, "error": "Note not found", "message": null })
        );
    }

    #[test]
    fn failure_still_uses_http_200() {
        let response = ApiResponse::failure("boom").into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
