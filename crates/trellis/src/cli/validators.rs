//! CLI input validation functions.
//!
//! Used by clap's `value_parser` attribute so that invalid input is rejected
//! at parse time.

/// Maximum length of a vertex name accepted on the command line.
pub const MAX_VERTEX_LENGTH: usize = 256;

/// Validate a vertex name.
///
/// Surrounding whitespace is trimmed; the result must be non-empty and at
/// most [`MAX_VERTEX_LENGTH`] characters.
///
/// # Errors
///
/// Returns a message describing why the name was rejected.
pub fn validate_vertex(s: &str) -> Result<String, String> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err("Vertex name cannot be empty".to_string());
    }

    let length = trimmed.chars().count();
    if length > MAX_VERTEX_LENGTH {
        return Err(format!(
            "Vertex name too long: {length} characters (max {MAX_VERTEX_LENGTH})"
        ));
    }

    Ok(trimmed.to_string())
}
