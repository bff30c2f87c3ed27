//! Navigation state machine

use crate::{Item, ItemId};
use std::sync::Arc;

/// Direction of travel through the result list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the end of the list (down arrow)
    Next,
    /// Towards the start of the list (up arrow)
    Previous,
}

/// Observable phase of the navigation state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPhase {
    /// Result list is hidden
    Closed,
    /// Result list is shown, nothing highlighted
    OpenNoSelection,
    /// Result list is shown with row `i` highlighted
    OpenSelection(usize),
}

/// A move of the current row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    /// Row that was current before the move, if any
    pub previous: Option<usize>,
    /// Row that is current now
    pub current: usize,
}

/// Open/closed flag, current row and the results being navigated
///
/// While closed the current row is kept but never reported as visible.
/// The current row is always `None` when the results are empty.
#[derive(Debug, Clone)]
pub struct NavigationState {
    open: bool,
    current: Option<usize>,
    results: Arc<[Item]>,
}

impl NavigationState {
    /// Create a closed state over `results`
    #[must_use]
    pub const fn new(results: Arc<[Item]>) -> Self {
        Self {
            open: false,
            current: None,
            results,
        }
    }

    /// Whether the result list is shown
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether directional input can move the current row
    #[must_use]
    pub fn is_navigable(&self) -> bool {
        self.open && !self.results.is_empty()
    }

    /// Current row, regardless of the open flag
    #[must_use]
    pub const fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Current row as the renderer should see it (`None` while closed)
    #[must_use]
    pub const fn visible_index(&self) -> Option<usize> {
        if self.open { self.current } else { None }
    }

    /// Results being navigated
    #[must_use]
    pub const fn results(&self) -> &Arc<[Item]> {
        &self.results
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> NavPhase {
        match (self.open, self.current) {
            (false, _) => NavPhase::Closed,
            (true, None) => NavPhase::OpenNoSelection,
            (true, Some(index)) => NavPhase::OpenSelection(index),
        }
    }

    /// Replace the results, set the open flag and forget the current row
    pub fn set_results(&mut self, results: Arc<[Item]>, open: bool) {
        self.results = results;
        self.open = open;
        self.current = None;
    }

    /// Hide the result list
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// Move the current row one step in `direction`, wrapping at the ends
    ///
    /// With no current row the first row becomes current, whichever the
    /// direction. Returns `None` (and changes nothing) while the list is
    /// closed or empty.
    pub fn step(&mut self, direction: Direction) -> Option<IndexChange> {
        if !self.is_navigable() {
            return None;
        }

        let len = self.results.len();
        let previous = self.current;
        let current = match (previous, direction) {
            (None, _) => 0,
            (Some(i), Direction::Next) => (i + 1) % len,
            (Some(i), Direction::Previous) => (i + len - 1) % len,
        };
        self.current = Some(current);

        Some(IndexChange { previous, current })
    }

    /// Make `index` the current row
    ///
    /// Returns `None` if `index` is out of range.
    pub fn focus(&mut self, index: usize) -> Option<IndexChange> {
        if index >= self.results.len() {
            return None;
        }

        let previous = self.current.replace(index);
        Some(IndexChange {
            previous,
            current: index,
        })
    }

    /// Item under the current row, regardless of the open flag
    #[must_use]
    pub fn current_item(&self) -> Option<&Item> {
        self.current.and_then(|index| self.results.get(index))
    }

    /// Item that a confirm key would commit
    ///
    /// Only available in [`NavPhase::OpenSelection`].
    #[must_use]
    pub fn confirmable(&self) -> Option<&Item> {
        if self.open { self.current_item() } else { None }
    }

    /// Position of the item with `id` in the results
    #[must_use]
    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.results.iter().position(|item| item.id == id)
    }
}
