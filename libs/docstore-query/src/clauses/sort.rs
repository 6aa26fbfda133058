//! Sort clause builder.

use crate::criteria::SortCriterion;
use crate::error::QueryError;
use crate::path::{ROOT_ALIAS, resolve_segments, split_path};

/// Compile sort criteria.
///
/// The first fragment carries the `ORDER BY` keyword; later fragments are
/// bare `<field> <direction>` terms, so joining the result with `", "`
/// yields a complete ordering clause.
///
/// # Errors
///
/// Returns [`QueryError::InvalidFieldPath`] for blank paths or empty segments.
pub fn build_sort_clauses(criteria: &[SortCriterion]) -> Result<Vec<String>, QueryError> {
    criteria
        .iter()
        .enumerate()
        .map(|(index, criterion)| {
            let segments = split_path(&criterion.field_path)?;
            let term = format!(
                "{ROOT_ALIAS}{} {}",
                resolve_segments(&segments),
                criterion.direction.as_sql()
            );
            Ok(if index == 0 {
                format!("ORDER BY {term}")
            } else {
                term
            })
        })
        .collect()
}
