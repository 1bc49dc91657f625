//! Field constraints for notes.
//!
//! Provides the length limits and the hex color rule shared by the create
//! and update payloads. Every check runs before any statement reaches the
//! database.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum title length in characters (the `notes.title` column is 255 wide).
pub const MAX_TITLE_LENGTH: usize = 255;

/// Length of a `#RRGGBB` color string.
pub const COLOR_HEX_LENGTH: usize = 7;

/// Entity name used in not-found errors.
pub const NOTE_ENTITY: &str = "Note";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a note title: between 1 and [`MAX_TITLE_LENGTH`] characters.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let len = title.chars().count();
    if len == 0 {
        return Err(CoreError::Validation("title must not be empty".to_string()));
    }
    if len > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "title must be at most {MAX_TITLE_LENGTH} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate note content: any non-empty string.
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.is_empty() {
        return Err(CoreError::Validation(
            "content must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate that a color string matches `#RRGGBB` hex format.
///
/// Hex digits are accepted in either case.
pub fn validate_color(color: &str) -> Result<(), CoreError> {
    if color.len() != COLOR_HEX_LENGTH {
        return Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Must be in #RRGGBB hex format"
        )));
    }

    if !color.starts_with('#') {
        return Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Must start with '#'"
        )));
    }

    if !color[1..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Must contain only hex digits after '#'"
        )));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
