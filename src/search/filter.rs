//! Prefix filtering used by the typeahead session
//!
//! An item matches a term when its description starts with the term,
//! ignoring case. The term is always taken literally: it is escaped before
//! being compiled, so `"c++"` or `"a.b"` match exactly those characters.
//!
//! Matching is monotonic: anything that fails `^ab` also fails `^abc`.
//! The session relies on this to filter the previous result set instead of
//! the whole item store while the user keeps typing.
//!
//! ```
//! use typeahead::Item;
//! use typeahead::search::filter_items;
//!
//! let items = vec![Item::new(1, "Apple"), Item::new(2, "Banana")];
//! let matched = filter_items("aP", &items).unwrap();
//! assert_eq!(matched, vec![Item::new(1, "Apple")]);
//! ```

use super::error::{Result, SearchError};
use crate::Item;
use regex::{Regex, RegexBuilder};

/// Case-insensitive, start-anchored literal matcher for one search term
#[derive(Debug, Clone)]
pub struct PrefixMatcher {
    term: String,
    regex: Regex,
}

impl PrefixMatcher {
    /// Compile a matcher for `term`
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidTerm` if the escaped term exceeds the
    /// regex size limits.
    pub fn new(term: &str) -> Result<Self> {
        let pattern = format!("^{}", regex::escape(term));
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| SearchError::InvalidTerm {
                term: term.to_string(),
                source,
            })?;

        Ok(Self {
            term: term.to_string(),
            regex,
        })
    }

    /// The term this matcher was compiled from
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Check whether `text` starts with the term, ignoring case
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Check whether an item's description starts with the term
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        self.is_match(&item.description)
    }

    /// Check whether `next` only narrows this matcher's results
    ///
    /// True when `next` itself starts with this term. Every item matching
    /// `next` then also matches this term, so results produced by this
    /// matcher are a valid source for filtering by `next`.
    #[must_use]
    pub fn narrows_to(&self, next: &str) -> bool {
        self.is_match(next)
    }

    /// Keep the items from `source` that match, preserving order
    pub fn filter<'a>(&self, source: impl IntoIterator<Item = &'a Item>) -> Vec<Item> {
        source
            .into_iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }
}

/// Filter `source` down to the items whose description starts with `term`
///
/// # Errors
///
/// Returns `SearchError::InvalidTerm` if the term cannot be compiled.
pub fn filter_items<'a>(
    term: &str,
    source: impl IntoIterator<Item = &'a Item>,
) -> Result<Vec<Item>> {
    let matcher = PrefixMatcher::new(term)?;
    let matched = matcher.filter(source);
    tracing::trace!(term, matched = matched.len(), "filtered items by prefix");
    Ok(matched)
}
