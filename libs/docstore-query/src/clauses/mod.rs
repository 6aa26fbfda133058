//! Clause builders.
//!
//! Each builder turns one kind of criterion into dialect fragments. Values
//! are bound through the shared [`ParamBinder`](crate::ParamBinder); only
//! resolved field paths and fixed keywords end up in the query text.

pub mod filter;
pub mod projection;
pub mod search;
pub mod sort;

pub use filter::{CORRELATED_COLLECTIONS, FilterFragment, build_filter_clauses};
pub use projection::{WILDCARD, build_projection};
pub use search::{build_field_search_clauses, build_object_search_clauses};
pub use sort::build_sort_clauses;
