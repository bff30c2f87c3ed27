//! Configuration module for typeahead
//!
//! Holds the caller-owned options of a typeahead session: the item type tag
//! passed through to selection events, the "show all" policy, an optional
//! preselected item, filtering thresholds and keybinds.
//!
//! Configuration can be built in code or loaded from TOML:
//!
//! ```toml
//! item_type = "fruit"
//! show_all = true
//! min_filter_len = 2
//!
//! [keybinds]
//! next = ["down", "ctrl-n"]
//! ```

use crate::keybinds::KeyBindings;
use crate::search::cache::DEFAULT_CACHE_CAPACITY;
use crate::{ItemId, TypeaheadError};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Shortest trimmed term that is filtered by default
pub const DEFAULT_MIN_FILTER_LEN: usize = 2;

/// Typeahead configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TypeaheadConfig {
    /// Tag copied into every selection event
    #[serde(default)]
    pub item_type: String,

    /// Open the full item list when the term is too short to filter and on
    /// directional input while closed
    #[serde(default)]
    pub show_all: bool,

    /// Item selected when the session attaches
    #[serde(default)]
    pub selected_item_id: Option<ItemId>,

    /// Terms shorter than this (after trimming) show the unfiltered list
    #[serde(default = "default_min_filter_len")]
    pub min_filter_len: usize,

    /// Maximum number of terms remembered by the search cache
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,

    /// Key to action mappings
    #[serde(default)]
    pub keybinds: KeyBindings,
}

const fn default_min_filter_len() -> usize {
    DEFAULT_MIN_FILTER_LEN
}

const fn default_cache_capacity() -> u64 {
    DEFAULT_CACHE_CAPACITY
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        Self {
            item_type: String::new(),
            show_all: false,
            selected_item_id: None,
            min_filter_len: DEFAULT_MIN_FILTER_LEN,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            keybinds: KeyBindings::default(),
        }
    }
}

impl TypeaheadConfig {
    /// Set the item type tag
    #[must_use]
    pub fn with_item_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = item_type.into();
        self
    }

    /// Set the "show all" policy
    #[must_use]
    pub const fn with_show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    /// Preselect an item
    #[must_use]
    pub const fn with_selected_item(mut self, id: Option<ItemId>) -> Self {
        self.selected_item_id = id;
        self
    }

    /// Set the shortest filterable term length
    #[must_use]
    pub const fn with_min_filter_len(mut self, len: usize) -> Self {
        self.min_filter_len = len;
        self
    }

    /// Set the search cache capacity
    #[must_use]
    pub const fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Replace the keybinds
    #[must_use]
    pub fn with_keybinds(mut self, keybinds: KeyBindings) -> Self {
        self.keybinds = keybinds;
        self
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `TypeaheadError::ConfigError` if the file cannot be read or
    /// parsed, and `TypeaheadError::InvalidConfig` if a value is out of range.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, TypeaheadError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns `TypeaheadError::ConfigError` if the string cannot be parsed,
    /// and `TypeaheadError::InvalidConfig` if a value is out of range.
    pub fn from_toml_str(toml: &str) -> Result<Self, TypeaheadError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns `TypeaheadError::ConfigError` if the configuration cannot be
    /// serialized, or `TypeaheadError::IoError` if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), TypeaheadError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Check that every value is usable
    ///
    /// # Errors
    ///
    /// Returns `TypeaheadError::InvalidConfig` if `min_filter_len` or
    /// `cache_capacity` is zero, or a keybind names an unknown action.
    pub fn validate(&self) -> Result<(), TypeaheadError> {
        if self.min_filter_len == 0 {
            return Err(TypeaheadError::InvalidConfig(
                "min_filter_len must be at least 1".to_string(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(TypeaheadError::InvalidConfig(
                "cache_capacity must be at least 1".to_string(),
            ));
        }

        let unknown = self.keybinds.unknown_actions();
        if !unknown.is_empty() {
            return Err(TypeaheadError::InvalidConfig(format!(
                "Unknown keybind action(s): {}",
                unknown.join(", ")
            )));
        }

        Ok(())
    }
}
