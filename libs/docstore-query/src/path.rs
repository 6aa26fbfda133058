//! Field path resolution.
//!
//! A dotted path such as `customer.address.city` becomes a property access
//! expression (`.customer.address.city`). Segments that collide with a
//! dialect keyword, or that are not plain identifiers, are rendered with
//! bracket notation instead: `a.value.b` becomes `.a["value"].b`.

use crate::error::QueryError;

/// Alias of the container root in every composed query.
pub const ROOT_ALIAS: &str = "backend";

/// Keywords of the query dialect that cannot be used with dot notation.
///
/// Matched case-insensitively.
const RESERVED_WORDS: &[&str] = &[
    "and", "array", "as", "asc", "between", "by", "desc", "distinct", "escape", "exists", "false",
    "from", "group", "in", "join", "like", "limit", "not", "null", "offset", "or", "order",
    "select", "top", "true", "udf", "undefined", "value", "where",
];

#[must_use]
pub fn is_reserved_word(segment: &str) -> bool {
    RESERVED_WORDS
        .iter()
        .any(|word| word.eq_ignore_ascii_case(segment))
}

fn is_plain_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn push_segment(out: &mut String, segment: &str) {
    if is_plain_identifier(segment) && !is_reserved_word(segment) {
        out.push('.');
        out.push_str(segment);
    } else {
        out.push_str("[\"");
        for c in segment.chars() {
            if c == '"' || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push_str("\"]");
    }
}

/// Render already-split segments as a property access suffix.
#[must_use]
pub fn resolve_segments(segments: &[&str]) -> String {
    let mut out = String::with_capacity(segments.iter().map(|s| s.len() + 4).sum());
    for segment in segments {
        push_segment(&mut out, segment);
    }
    out
}

/// Resolve a dotted field path into a property access suffix.
///
/// The result is meant to be appended to an alias: `rooted` does exactly
/// that for [`ROOT_ALIAS`].
#[must_use]
pub fn resolve_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('.').collect();
    resolve_segments(&segments)
}

/// Resolve `path` against the container root alias, e.g. `backend.a["value"]`.
#[must_use]
pub fn rooted(path: &str) -> String {
    format!("{ROOT_ALIAS}{}", resolve_path(path))
}

/// Split a path into segments, rejecting empty paths and empty segments.
///
/// # Errors
///
/// Returns [`QueryError::InvalidFieldPath`] if the path is blank or contains
/// an empty segment (`a..b`, `.a`, `a.`).
pub fn split_path(path: &str) -> Result<Vec<&str>, QueryError> {
    if path.trim().is_empty() {
        return Err(QueryError::invalid_field_path(path, "field path is empty"));
    }
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(QueryError::invalid_field_path(
            path,
            "field path contains an empty segment",
        ));
    }
    Ok(segments)
}
