//! Projection builder.

use crate::error::QueryError;
use crate::path::{ROOT_ALIAS, resolve_segments, split_path};

/// Selector used when no projection is requested.
pub const WILDCARD: &str = "*";

/// Compile the selected field list.
///
/// An empty list selects everything; otherwise the root-prefixed fields are
/// joined with `", "`.
///
/// # Errors
///
/// Returns [`QueryError::InvalidFieldPath`] for blank paths or empty segments.
pub fn build_projection(fields: &[String]) -> Result<String, QueryError> {
    if fields.is_empty() {
        return Ok(WILDCARD.to_owned());
    }
    let selected = fields
        .iter()
        .map(|field| {
            let segments = split_path(field)?;
            Ok(format!("{ROOT_ALIAS}{}", resolve_segments(&segments)))
        })
        .collect::<Result<Vec<_>, QueryError>>()?;
    Ok(selected.join(", "))
}
