#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Document store query composition.
//!
//! Turns typed, client-supplied criteria into a single parameterized query
//! for a Cosmos-style SQL dialect and runs it with continuation-cursor
//! paging:
//!
//! - [`operator`] - comparison operators and sort directions (closed enums)
//! - [`path`] - dotted field path resolution with reserved-word quoting
//! - [`clauses`] - filter, sort, search and projection clause builders
//! - [`compose`] - clause aggregation and final query assembly
//! - [`paging`] - page requests, pages and the [`DocumentStore`] contract
//!
//! ## Usage
//!
//! ```ignore
//! use docstore_query::{BaseQuery, PageRequest, QueryCriteria, compose, fetch_page};
//!
//! let clauses = compose(&criteria)?;
//! let query = BaseQuery::new()
//!     .scope("customerId", customer_id)
//!     .default_order(SortCriterion::descending("createdAt"))
//!     .assemble(clauses)?;
//!
//! let page = fetch_page(store.as_ref(), "cases", &query, &PageRequest::first(10), None).await?;
//! ```
//!
//! Values never appear in query text: every filter and search value is bound
//! as a `@pN` parameter and handed to the store client alongside the query.

pub mod clauses;
pub mod compose;
pub mod criteria;
pub mod error;
pub mod operator;
pub mod paging;
pub mod params;
pub mod path;

pub use compose::{BaseQuery, ComposedClauses, compose};
pub use criteria::{FieldSearchCriterion, FilterCriterion, FilterValue, QueryCriteria, SortCriterion};
pub use error::{QueryError, StoreError};
pub use operator::{ComparisonOperator, SortDirection};
pub use paging::{DocumentStore, Page, PageRequest, QueryOptions, RawPage, fetch_page};
pub use params::{ParamBinder, SqlParameter, SqlQuerySpec};
pub use path::{ROOT_ALIAS, resolve_path, rooted};
