//! Note entity model and DTOs.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use notes_core::error::CoreError;
use notes_core::note::{validate_color, validate_content, validate_title};
use notes_core::patch::nullable;
use notes_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};

/// A note row from the `notes` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub color: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl<'r> FromRow<'r, AnyRow> for Note {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            content: text_column(row, "content")?,
            color: row.try_get("color")?,
            created_at: timestamp_column(row, "created_at")?,
            updated_at: timestamp_column(row, "updated_at")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Column codecs
// ---------------------------------------------------------------------------

/// Current time at the precision timestamps are stored with.
pub(crate) fn now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}

/// Encode a timestamp as fixed-width RFC 3339 UTC text
/// (`2025-01-01T00:00:00.000000Z`), which sorts in time order.
pub(crate) fn encode_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn timestamp_column(row: &AnyRow, column: &str) -> Result<Timestamp, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|err| decode_error(column, err))
}

/// MySQL `TEXT` columns arrive as blobs through the runtime-selected driver.
fn text_column(row: &AnyRow, column: &str) -> Result<String, sqlx::Error> {
    match row.try_get::<String, _>(column) {
        Ok(text) => Ok(text),
        Err(sqlx::Error::ColumnDecode { .. }) => {
            let bytes: Vec<u8> = row.try_get(column)?;
            String::from_utf8(bytes).map_err(|err| decode_error(column, err))
        }
        Err(err) => Err(err),
    }
}

fn decode_error(
    column: &str,
    source: impl std::error::Error + Send + Sync + 'static,
) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: format!("{column:?}"),
        source: Box::new(source),
    }
}

/// DTO for creating a new note.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNote {
    pub title: String,
    pub content: String,
    /// Optional `#RRGGBB` color.
    pub color: Option<String>,
}

impl CreateNote {
    /// Check every field constraint. Runs before the insert is issued.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_title(&self.title)?;
        validate_content(&self.content)?;
        if let Some(color) = &self.color {
            validate_color(color)?;
        }
        Ok(())
    }
}

/// DTO for a partial update. Only fields present in the payload are applied.
///
/// Every field keeps the difference between a missing key (`None`, left
/// untouched) and an explicit `null` (`Some(None)`). Only `color` may be
/// cleared; a `null` title or content fails validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNote {
    #[serde(default, deserialize_with = "nullable")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub content: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub color: Option<Option<String>>,
}

impl UpdateNote {
    /// Check the constraints of every field that is present.
    pub fn validate(&self) -> Result<(), CoreError> {
        match &self.title {
            Some(Some(title)) => validate_title(title)?,
            Some(None) => return Err(null_field("title")),
            None => {}
        }
        match &self.content {
            Some(Some(content)) => validate_content(content)?,
            Some(None) => return Err(null_field("content")),
            None => {}
        }
        if let Some(Some(color)) = &self.color {
            validate_color(color)?;
        }
        Ok(())
    }

    /// `true` when the payload carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.color.is_none()
    }

    /// New title, if one was supplied.
    pub fn title(&self) -> Option<&str> {
        self.title.as_ref().and_then(|t| t.as_deref())
    }

    /// New content, if it was supplied.
    pub fn content(&self) -> Option<&str> {
        self.content.as_ref().and_then(|c| c.as_deref())
    }
}

fn null_field(field: &str) -> CoreError {
    CoreError::Validation(format!("{field} must not be null"))
}
