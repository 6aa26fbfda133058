//! Comparison operators and sort directions.
//!
//! Both are closed sets. An unknown wire value fails deserialization, so a
//! malformed criterion is rejected up front instead of producing a blank or
//! missing clause.

use serde::{Deserialize, Serialize};

/// Comparison applied by a filter criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonOperator {
    /// `=`
    Equals,
    /// `>`
    GreaterThan,
    /// `<`
    SmallerThan,
}

impl ComparisonOperator {
    /// Dialect symbol for this operator.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::GreaterThan => ">",
            Self::SmallerThan => "<",
        }
    }
}

/// Ordering of a sort criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}
