//! Filter clause builder.

use crate::criteria::FilterCriterion;
use crate::error::QueryError;
use crate::params::ParamBinder;
use crate::path::{ROOT_ALIAS, resolve_segments, split_path};

/// Array-valued collections filtered through a correlated subquery instead
/// of a plain `WHERE` condition.
pub const CORRELATED_COLLECTIONS: &[&str] = &["documents", "submissions"];

/// One compiled filter criterion, tagged by the query region it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterFragment {
    /// `JOIN (SELECT VALUE tN FROM tN IN backend.<collection> WHERE ...)`
    ///
    /// The join yields one result row per matching array item, so a document
    /// with two matching items appears twice.
    Join(String),
    /// `AND backend.<path> <op> @pN`
    Condition(String),
    /// `AND NOT IS_DEFINED(backend.<path>)`
    Undefined(String),
}

impl FilterFragment {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Join(s) | Self::Condition(s) | Self::Undefined(s) => s,
        }
    }

    /// Whether the fragment belongs in the `WHERE` region.
    #[must_use]
    pub fn is_where(&self) -> bool {
        matches!(self, Self::Condition(_) | Self::Undefined(_))
    }
}

/// Compile filter criteria, one fragment per criterion, in input order.
///
/// Rules, first match wins:
/// 1. path starts with a [`CORRELATED_COLLECTIONS`] entry: a `Join` whose
///    alias is `t<index>` and whose predicate applies to the remaining path;
/// 2. no value: an `Undefined` existence check;
/// 3. otherwise a `Condition` comparing the field to a bound parameter.
///
/// # Errors
///
/// Returns [`QueryError::InvalidFieldPath`] for blank paths, empty segments
/// or a correlated collection with nothing after it.
pub fn build_filter_clauses(
    criteria: &[FilterCriterion],
    binder: &mut ParamBinder,
) -> Result<Vec<FilterFragment>, QueryError> {
    criteria
        .iter()
        .enumerate()
        .map(|(index, criterion)| build_filter_clause(index, criterion, binder))
        .collect()
}

fn build_filter_clause(
    index: usize,
    criterion: &FilterCriterion,
    binder: &mut ParamBinder,
) -> Result<FilterFragment, QueryError> {
    let segments = split_path(&criterion.field_path)?;
    let op = criterion.condition.as_sql();

    if let Some((collection, rest)) = segments.split_first()
        && CORRELATED_COLLECTIONS.contains(collection)
    {
        if rest.is_empty() {
            return Err(QueryError::invalid_field_path(
                &criterion.field_path,
                "a field of the collection item is required",
            ));
        }
        let alias = format!("t{index}");
        let field = format!("{alias}{}", resolve_segments(rest));
        let predicate = match &criterion.value {
            Some(value) => format!("{field} {op} {}", binder.bind(value.clone())),
            None => format!("NOT IS_DEFINED({field})"),
        };
        return Ok(FilterFragment::Join(format!(
            "JOIN (SELECT VALUE {alias} FROM {alias} IN {ROOT_ALIAS}{} WHERE {predicate})",
            resolve_segments(&[*collection])
        )));
    }

    let field = format!("{ROOT_ALIAS}{}", resolve_segments(&segments));
    Ok(match &criterion.value {
        None => FilterFragment::Undefined(format!("AND NOT IS_DEFINED({field})")),
        Some(value) => {
            let param = binder.bind(value.clone());
            FilterFragment::Condition(format!("AND {field} {op} {param}"))
        }
    })
}
