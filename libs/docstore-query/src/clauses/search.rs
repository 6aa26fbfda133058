//! Object-wide and field-scoped search builders.

use crate::criteria::FieldSearchCriterion;
use crate::error::QueryError;
use crate::params::ParamBinder;
use crate::path::{ROOT_ALIAS, resolve_segments, split_path};

/// Compile whole-document search terms.
///
/// Every non-blank term requires a case-insensitive substring match against
/// the root document rendered as text. Terms are not deduplicated.
pub fn build_object_search_clauses(terms: &[String], binder: &mut ParamBinder) -> Vec<String> {
    terms
        .iter()
        .filter(|term| !term.trim().is_empty())
        .map(|term| {
            let param = binder.bind(term.as_str());
            format!("AND CONTAINS(ToString({ROOT_ALIAS}), {param}, true)")
        })
        .collect()
}

/// Compile field-scoped search criteria.
///
/// # Errors
///
/// Returns [`QueryError::InvalidFieldPath`] for blank paths or empty segments.
pub fn build_field_search_clauses(
    criteria: &[FieldSearchCriterion],
    binder: &mut ParamBinder,
) -> Result<Vec<String>, QueryError> {
    criteria
        .iter()
        .map(|criterion| {
            let segments = split_path(&criterion.field_path)?;
            let param = binder.bind(criterion.value.as_str());
            Ok(format!(
                "AND CONTAINS(ToString({ROOT_ALIAS}{}), {param}, true)",
                resolve_segments(&segments)
            ))
        })
        .collect()
}
