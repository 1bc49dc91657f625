//! Repository for the `notes` table.
//!
//! The SQL here runs unchanged on SQLite and MySQL/MariaDB: `?` placeholders,
//! no `RETURNING`, no engine-specific functions.

use notes_core::types::DbId;

use crate::models::note::{encode_timestamp, now, CreateNote, Note, UpdateNote};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, color, created_at, updated_at";

/// Provides CRUD operations for notes.
///
/// Absence is reported as `None` / `false`, never as an error.
pub struct NoteRepo;

impl NoteRepo {
    /// List all notes, most recently created first.
    ///
    /// Notes created within the same timestamp tick are ordered by id so the
    /// newest insert still comes first.
    pub async fn list(pool: &DbPool) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
    }

    /// Find a note by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = ?");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new note, returning the created row.
    ///
    /// `created_at` and `updated_at` are both set to the current time.
    pub async fn create(pool: &DbPool, input: &CreateNote) -> Result<Note, sqlx::Error> {
        let now = now();
        let stamp = encode_timestamp(now);
        let result = sqlx::query(
            "INSERT INTO notes (title, content, color, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.color)
        .bind(&stamp)
        .bind(&stamp)
        .execute(pool)
        .await?;

        let id = result
            .last_insert_id()
            .ok_or_else(|| sqlx::Error::Protocol("insert did not report a row id".into()))?;

        Ok(Note {
            id,
            title: input.title.clone(),
            content: input.content.clone(),
            color: input.color.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Update a note. Only fields present in `input` are applied.
    ///
    /// `updated_at` is refreshed on every call, including an empty patch, and
    /// never moves below `created_at`. The update and the read-back share a
    /// transaction. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let stamp = encode_timestamp(now());
        let (set_color, color) = match &input.color {
            Some(color) => (true, color.as_deref()),
            None => (false, None),
        };

        let mut tx = pool.begin().await?;
        sqlx::query(
            "UPDATE notes SET
                title = COALESCE(?, title),
                content = COALESCE(?, content),
                color = CASE WHEN ? THEN ? ELSE color END,
                updated_at = CASE WHEN created_at > ? THEN created_at ELSE ? END
             WHERE id = ?",
        )
        .bind(input.title())
        .bind(input.content())
        .bind(set_color)
        .bind(color)
        .bind(&stamp)
        .bind(&stamp)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = ?");
        let note = sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(note)
    }

    /// Permanently delete a note by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all notes.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM notes")
            .fetch_one(pool)
            .await
    }
}
