//! Bound query parameters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named parameter bound by the store client at execution time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlParameter {
    /// Parameter name including the `@` prefix.
    pub name: String,
    pub value: Value,
}

/// Query text plus the parameters it references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SqlQuerySpec {
    pub query: String,
    #[serde(default)]
    pub parameters: Vec<SqlParameter>,
}

impl SqlQuerySpec {
    /// Look up a bound value by parameter name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }
}

/// Allocates positional parameter names (`@p0`, `@p1`, ...) and collects
/// their values.
///
/// One binder is shared by every clause builder of a query so that names
/// never collide.
#[derive(Debug, Default)]
pub struct ParamBinder {
    params: Vec<SqlParameter>,
    next: usize,
}

impl ParamBinder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `value` under the next positional name and return that name.
    pub fn bind(&mut self, value: impl Into<Value>) -> String {
        let name = format!("@p{}", self.next);
        self.next += 1;
        self.params.push(SqlParameter {
            name: name.clone(),
            value: value.into(),
        });
        name
    }

    /// Bind `value` under an explicit name (without the `@` prefix).
    pub fn bind_named(&mut self, name: &str, value: impl Into<Value>) -> String {
        let name = format!("@{name}");
        self.params.push(SqlParameter {
            name: name.clone(),
            value: value.into(),
        });
        name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    #[must_use]
    pub fn into_parameters(self) -> Vec<SqlParameter> {
        self.params
    }
}
