//! Action types for typeahead keybinds.

use crate::navigation::Direction;
use std::fmt;
use std::str::FromStr;

/// Actions that can be triggered by keys while the input has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    /// Move the highlight down - Down
    Next,
    /// Move the highlight up - Up
    Previous,
    /// Commit the highlighted item - Enter, Tab
    Confirm,
}

impl NavAction {
    /// Every action, in the order they are listed in help text.
    pub const ALL: [Self; 3] = [Self::Next, Self::Previous, Self::Confirm];

    /// Config name of the action.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Confirm => "confirm",
        }
    }

    /// Returns a human-readable description of the action.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Next => "Highlight the next result",
            Self::Previous => "Highlight the previous result",
            Self::Confirm => "Select the highlighted result",
        }
    }

    /// Direction of travel for directional actions.
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        match self {
            Self::Next => Some(Direction::Next),
            Self::Previous => Some(Direction::Previous),
            Self::Confirm => None,
        }
    }
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NavAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "next" | "down" => Ok(Self::Next),
            "previous" | "prev" | "up" => Ok(Self::Previous),
            "confirm" | "select" => Ok(Self::Confirm),
            other => Err(format!("Unknown navigation action: '{other}'")),
        }
    }
}
