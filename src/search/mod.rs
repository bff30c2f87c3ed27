//! Incremental prefix search
//!
//! Provides the two pieces the typeahead session narrows its results with:
//! 1. A case-insensitive, anchored prefix filter over items
//! 2. A per-session cache of filter results keyed by the typed term

pub mod cache;
pub mod error;
pub mod filter;

pub use cache::SearchCache;
pub use error::SearchError;
pub use filter::{PrefixMatcher, filter_items};
