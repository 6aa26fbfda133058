//! Client-supplied query criteria.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::operator::{ComparisonOperator, SortDirection};

/// Scalar compared against a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Bool(bool),
    Number(Number),
    String(String),
}

impl From<FilterValue> for Value {
    fn from(v: FilterValue) -> Self {
        match v {
            FilterValue::Bool(b) => Value::Bool(b),
            FilterValue::Number(n) => Value::Number(n),
            FilterValue::String(s) => Value::String(s),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for FilterValue {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

/// One filter condition on a dotted field path.
///
/// A missing `value` means "field is not defined".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriterion {
    pub field_path: String,
    pub condition: ComparisonOperator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FilterValue>,
}

impl FilterCriterion {
    #[must_use]
    pub fn new(
        field_path: impl Into<String>,
        condition: ComparisonOperator,
        value: impl Into<FilterValue>,
    ) -> Self {
        Self {
            field_path: field_path.into(),
            condition,
            value: Some(value.into()),
        }
    }

    #[must_use]
    pub fn eq(field_path: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field_path, ComparisonOperator::Equals, value)
    }

    /// Criterion matching documents where `field_path` is not defined.
    #[must_use]
    pub fn undefined(field_path: impl Into<String>) -> Self {
        Self {
            field_path: field_path.into(),
            condition: ComparisonOperator::Equals,
            value: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortCriterion {
    pub field_path: String,
    pub direction: SortDirection,
}

impl SortCriterion {
    #[must_use]
    pub fn ascending(field_path: impl Into<String>) -> Self {
        Self {
            field_path: field_path.into(),
            direction: SortDirection::Ascending,
        }
    }

    #[must_use]
    pub fn descending(field_path: impl Into<String>) -> Self {
        Self {
            field_path: field_path.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Case-insensitive substring search on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSearchCriterion {
    pub field_path: String,
    pub value: String,
}

impl FieldSearchCriterion {
    #[must_use]
    pub fn new(field_path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field_path: field_path.into(),
            value: value.into(),
        }
    }
}

/// Everything a caller can say about the rows it wants back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryCriteria {
    pub sort: Vec<SortCriterion>,
    pub filter: Vec<FilterCriterion>,
    /// Whole-document search terms.
    pub search: Vec<String>,
    pub field_search: Vec<FieldSearchCriterion>,
    /// Fields to select; empty selects everything.
    pub projection: Vec<String>,
}
