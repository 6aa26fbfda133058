//! Continuation-cursor paging over a document store.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{QueryError, StoreError};
use crate::params::SqlQuerySpec;

/// Which page to fetch.
///
/// An empty `continuation_cursor` asks for the first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    #[serde(default)]
    pub continuation_cursor: String,
    pub page_limit: u32,
}

impl PageRequest {
    #[must_use]
    pub fn first(page_limit: u32) -> Self {
        Self {
            continuation_cursor: String::new(),
            page_limit,
        }
    }

    #[must_use]
    pub fn next(continuation_cursor: impl Into<String>, page_limit: u32) -> Self {
        Self {
            continuation_cursor: continuation_cursor.into(),
            page_limit,
        }
    }

    /// Cursor to hand to the store; `None` for the first page.
    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        if self.continuation_cursor.is_empty() {
            None
        } else {
            Some(&self.continuation_cursor)
        }
    }
}

/// One page of results.
///
/// `next_cursor` is the store's opaque token, passed through as given; it is
/// empty when the store sent none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub has_more: bool,
    pub next_cursor: String,
}

impl<T> Page<T> {
    /// Keep only rows matching `keep`; paging metadata is unchanged.
    #[must_use]
    pub fn retain(mut self, keep: impl FnMut(&T) -> bool) -> Self {
        self.rows.retain(keep);
        self
    }
}

/// Per-call options passed through to the store client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Maximum rows the store may return for this call.
    pub page_limit: u32,
    pub continuation: Option<String>,
    /// Restricts execution to one logical partition when set.
    pub partition_key: Option<String>,
}

/// What a store client returns for one query call.
///
/// Clients differ in how they report the end of a result set, so both flags
/// are optional here and normalised by [`fetch_page`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPage {
    pub rows: Vec<Value>,
    pub has_more: Option<bool>,
    pub next_cursor: Option<String>,
}

/// Contract for a document store client.
///
/// Implementations own connections, authentication and retry policy; the
/// query text and parameters must be passed through unchanged.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Execute a parameterized query against `container` and return at most
    /// `options.page_limit` rows.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] describing why the call failed.
    async fn execute_query(
        &self,
        container: &str,
        query: &SqlQuerySpec,
        options: &QueryOptions,
    ) -> Result<RawPage, StoreError>;
}

/// Fetch one page of `query` from `container`.
///
/// A missing `has_more` flag from the store is treated as `false` and a
/// missing cursor as empty. Rows are returned in store order.
///
/// # Errors
///
/// Returns [`QueryError::InvalidPageLimit`] if `request.page_limit` is zero,
/// or [`QueryError::Store`] with the store's own error if the call fails.
pub async fn fetch_page(
    store: &dyn DocumentStore,
    container: &str,
    query: &SqlQuerySpec,
    request: &PageRequest,
    partition_key: Option<&str>,
) -> Result<Page<Value>, QueryError> {
    if request.page_limit == 0 {
        return Err(QueryError::InvalidPageLimit);
    }

    let options = QueryOptions {
        page_limit: request.page_limit,
        continuation: request.cursor().map(str::to_owned),
        partition_key: partition_key.map(str::to_owned),
    };

    debug!(
        container,
        page_limit = request.page_limit,
        resumed = options.continuation.is_some(),
        parameters = query.parameters.len(),
        "executing paged query"
    );

    let raw = store.execute_query(container, query, &options).await?;
    let has_more = raw.has_more.unwrap_or(false);
    let next_cursor = raw.next_cursor.unwrap_or_default();

    debug!(rows = raw.rows.len(), has_more, "page fetched");

    Ok(Page {
        rows: raw.rows,
        has_more,
        next_cursor,
    })
}
