//! Keybind system for typeahead navigation.
//!
//! Maps key names (`"enter"`, `"down"`, `"ctrl-n"`, ...) to the three
//! navigation actions the engine understands. Terminal hosts can feed
//! crossterm key events straight in; other hosts pass key names.

pub mod actions;
pub mod config;
pub mod keys;

pub use actions::NavAction;
pub use config::{KeyBindings, KeybindDef};
pub use keys::{key_to_string, normalize_key_name};
