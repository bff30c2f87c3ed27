//! Renderers that draw nothing
//!
//! [`HeadlessRenderer`] keeps the state a real renderer would show, which
//! makes it useful for tests and for hosts that draw from a snapshot.

use super::traits::{ResultRenderer, ResultsView};
use super::types::InstanceId;
use crate::navigation::Direction;
use crate::{Item, ItemId};
use std::collections::BTreeSet;

/// Owned copy of the last [`ResultsView`] pushed to a renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub instance: InstanceId,
    pub open: bool,
    pub result_ids: Vec<ItemId>,
    pub current_index: Option<usize>,
    pub term: String,
}

impl From<&ResultsView<'_>> for ViewSnapshot {
    fn from(view: &ResultsView<'_>) -> Self {
        Self {
            instance: view.instance,
            open: view.open,
            result_ids: view.results.iter().map(|item| item.id).collect(),
            current_index: view.current_index,
            term: view.term.to_string(),
        }
    }
}

/// Renderer that records what it was asked to show
#[derive(Debug, Clone, Default)]
pub struct HeadlessRenderer {
    last_view: Option<ViewSnapshot>,
    highlighted: BTreeSet<usize>,
    scrolls: Vec<(usize, Direction)>,
    render_count: usize,
}

impl HeadlessRenderer {
    /// Create an empty renderer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last view pushed by the session
    #[must_use]
    pub const fn last_view(&self) -> Option<&ViewSnapshot> {
        self.last_view.as_ref()
    }

    /// Rows currently carrying the highlight marker
    #[must_use]
    pub fn highlighted(&self) -> Vec<usize> {
        self.highlighted.iter().copied().collect()
    }

    /// Every scroll request, oldest first
    #[must_use]
    pub fn scrolls(&self) -> &[(usize, Direction)] {
        &self.scrolls
    }

    /// Most recent scroll request
    #[must_use]
    pub fn last_scroll(&self) -> Option<(usize, Direction)> {
        self.scrolls.last().copied()
    }

    /// Number of views pushed so far
    #[must_use]
    pub const fn render_count(&self) -> usize {
        self.render_count
    }
}

impl ResultRenderer for HeadlessRenderer {
    fn render(&mut self, view: &ResultsView<'_>) {
        self.render_count += 1;
        self.last_view = Some(ViewSnapshot::from(view));
    }

    fn set_highlight(&mut self, index: usize, _item: &Item, highlighted: bool) {
        if highlighted {
            self.highlighted.insert(index);
        } else {
            self.highlighted.remove(&index);
        }
    }

    fn scroll_into_view(&mut self, index: usize, direction: Direction) {
        self.scrolls.push((index, direction));
    }
}

/// Renderer that ignores every call
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl ResultRenderer for NullRenderer {
    fn render(&mut self, _view: &ResultsView<'_>) {}

    fn set_highlight(&mut self, _index: usize, _item: &Item, _highlighted: bool) {}

    fn scroll_into_view(&mut self, _index: usize, _direction: Direction) {}
}
