//! Query composition.
//!
//! [`compose`] runs every clause builder over a [`QueryCriteria`] and sorts
//! the output into query regions. [`BaseQuery`] then adds the fixed parts a
//! caller always needs (scope conditions, fallback ordering) and assembles
//! the final [`SqlQuerySpec`].

use serde_json::Value;

use crate::clauses::{
    FilterFragment, WILDCARD, build_field_search_clauses, build_filter_clauses,
    build_object_search_clauses, build_projection, build_sort_clauses,
};
use crate::criteria::{QueryCriteria, SortCriterion};
use crate::error::QueryError;
use crate::params::{ParamBinder, SqlParameter, SqlQuerySpec};
use crate::path::{ROOT_ALIAS, resolve_segments, split_path};

/// Clause text per query region, plus the parameters it references.
///
/// Empty strings mean "region not used".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposedClauses {
    /// Selected fields, or `*`.
    pub projection: String,
    /// Correlated-subquery joins, space separated.
    pub joins: String,
    /// Complete `ORDER BY` clause, or empty.
    pub sort: String,
    /// `AND`-prefixed filter conditions, space separated.
    pub filter: String,
    pub object_search: String,
    pub field_search: String,
    pub parameters: Vec<SqlParameter>,
}

/// Compile caller criteria into per-region clauses.
///
/// Join fragments are routed by their tag, never by inspecting their text.
/// Parameters are numbered in filter, object search, field search order.
///
/// # Errors
///
/// Returns [`QueryError::InvalidFieldPath`] if any criterion names a field
/// path that cannot be rendered.
pub fn compose(criteria: &QueryCriteria) -> Result<ComposedClauses, QueryError> {
    let mut binder = ParamBinder::new();

    let projection = build_projection(&criteria.projection)?;
    let sort = build_sort_clauses(&criteria.sort)?.join(", ");

    let (joins, conditions): (Vec<FilterFragment>, Vec<FilterFragment>) =
        build_filter_clauses(&criteria.filter, &mut binder)?
            .into_iter()
            .partition(|fragment| !fragment.is_where());

    let object_search = build_object_search_clauses(&criteria.search, &mut binder).join(" ");
    let field_search = build_field_search_clauses(&criteria.field_search, &mut binder)?.join(" ");

    tracing::debug!(
        joins = joins.len(),
        conditions = conditions.len(),
        parameters = binder.len(),
        "composed query clauses"
    );

    Ok(ComposedClauses {
        projection,
        joins: join_fragments(&joins),
        sort,
        filter: join_fragments(&conditions),
        object_search,
        field_search,
        parameters: binder.into_parameters(),
    })
}

fn join_fragments(fragments: &[FilterFragment]) -> String {
    fragments
        .iter()
        .map(FilterFragment::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fixed part of a query: equality scope on the root plus a fallback order.
#[derive(Debug, Clone, Default)]
pub struct BaseQuery {
    scope: Vec<(String, Value)>,
    default_order: Option<SortCriterion>,
}

impl BaseQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field_path` to equal `value` on every returned row.
    #[must_use]
    pub fn scope(mut self, field_path: impl Into<String>, value: impl Into<Value>) -> Self {
        self.scope.push((field_path.into(), value.into()));
        self
    }

    /// Ordering used when the caller did not ask for one.
    #[must_use]
    pub fn default_order(mut self, order: SortCriterion) -> Self {
        self.default_order = Some(order);
        self
    }

    /// Assemble the final query.
    ///
    /// `SELECT <projection> FROM backend <joins> WHERE <scope> <filter>
    /// <object search> <field search> <order>`; unused regions collapse.
    /// A wildcard projection over joins selects `VALUE backend`, since `*`
    /// is only valid with a single input set.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidFieldPath`] if a scope field or the
    /// default order field cannot be rendered.
    pub fn assemble(&self, clauses: ComposedClauses) -> Result<SqlQuerySpec, QueryError> {
        let ComposedClauses {
            projection,
            joins,
            sort,
            filter,
            object_search,
            field_search,
            parameters,
        } = clauses;

        let mut binder = ParamBinder::new();
        let mut scope_conditions = Vec::with_capacity(self.scope.len());
        let mut names: Vec<String> = Vec::with_capacity(self.scope.len());
        for (index, (field_path, value)) in self.scope.iter().enumerate() {
            let segments = split_path(field_path)?;
            let mut name = scope_param_name(&segments);
            if names.contains(&name) {
                name = format!("{name}_{index}");
            }
            names.push(name.clone());
            let name = binder.bind_named(&name, value.clone());
            scope_conditions.push(format!(
                "{ROOT_ALIAS}{} = {name}",
                resolve_segments(&segments)
            ));
        }

        let order = if sort.is_empty() {
            match &self.default_order {
                Some(order) => build_sort_clauses(std::slice::from_ref(order))?.join(", "),
                None => String::new(),
            }
        } else {
            sort
        };

        let select = if projection == WILDCARD && !joins.is_empty() {
            format!("VALUE {ROOT_ALIAS}")
        } else {
            projection
        };
        let scope = if scope_conditions.is_empty() {
            "true".to_owned()
        } else {
            scope_conditions.join(" AND ")
        };

        let query = [
            format!("SELECT {select} FROM {ROOT_ALIAS}"),
            joins,
            format!("WHERE {scope}"),
            filter,
            object_search,
            field_search,
            order,
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        let mut all_parameters = parameters;
        all_parameters.extend(binder.into_parameters());

        Ok(SqlQuerySpec {
            query,
            parameters: all_parameters,
        })
    }
}

/// Parameter name for a scope field: `scope_` followed by its segments with
/// non-alphanumerics dropped, e.g. `scope_customerId` or `scope_tenantregion`.
///
/// The prefix keeps scope names apart from positional `pN` names.
fn scope_param_name(segments: &[&str]) -> String {
    let mut name = String::from("scope_");
    name.extend(
        segments
            .iter()
            .flat_map(|s| s.chars())
            .filter(char::is_ascii_alphanumeric),
    );
    name
}
