//! Typeahead - an incremental-search engine for typeahead inputs
//!
//! This library narrows a caller-owned list of items as the user types,
//! tracks keyboard navigation over the narrowed list and reports the final
//! selection. Rendering and event transport stay outside the crate and are
//! reached through the [`ui::ResultRenderer`] and [`ui::SelectionPublisher`]
//! traits.
//!
//! ```
//! use std::sync::Arc;
//! use typeahead::{Item, TypeaheadConfig, TypeaheadSession};
//! use typeahead::keybinds::NavAction;
//! use typeahead::ui::{EventLog, HeadlessRenderer};
//!
//! # fn main() -> Result<(), typeahead::TypeaheadError> {
//! let items: Arc<[Item]> = vec![
//!     Item::new(1, "Apple"),
//!     Item::new(2, "Apricot"),
//!     Item::new(3, "Banana"),
//! ]
//! .into();
//!
//! let events = EventLog::new();
//! let config = TypeaheadConfig::default().with_item_type("fruit");
//! let mut session =
//!     TypeaheadSession::attach(items, config, HeadlessRenderer::new(), events.clone())?;
//!
//! session.on_input("ap")?;
//! session.handle_action(NavAction::Next);
//! session.handle_action(NavAction::Confirm);
//!
//! assert_eq!(session.selection(), Some(1));
//! assert_eq!(session.term(), "Apple");
//! assert_eq!(events.len(), 1);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod config;
pub mod keybinds;
pub mod navigation;
pub mod search;
pub mod session;
pub mod ui;

pub use config::TypeaheadConfig;
pub use session::{FilterOutcome, KeyOutcome, TypeaheadSession};

/// Identity of an item in the item store
pub type ItemId = i64;

/// Error enum, contains all failure states of the library
#[derive(Debug, Error)]
pub enum TypeaheadError {
    /// Search error
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// Represents a configuration loading error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Configuration values that the engine cannot work with
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A candidate item offered by the typeahead
///
/// Items are owned by the caller; the engine only shares the list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
}

impl Item {
    /// Create a new Item
    #[must_use]
    pub fn new(id: ItemId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }
}

#[cfg(test)]
pub mod testing;
