//! Collaborator traits for rendering and selection notifications

use super::types::{InstanceId, SelectionEvent};
use crate::Item;
use crate::navigation::Direction;

/// Snapshot of everything a renderer needs to draw the input and list
#[derive(Debug, Clone, Copy)]
pub struct ResultsView<'a> {
    /// Session the view belongs to
    pub instance: InstanceId,
    /// Whether the result list is shown
    pub open: bool,
    /// Results in display order
    pub results: &'a [Item],
    /// Highlighted row; always `None` while closed
    pub current_index: Option<usize>,
    /// Text to show in the input
    pub term: &'a str,
}

/// Trait for result list renderers
///
/// The session pushes a fresh [`ResultsView`] after every state change and
/// drives row highlighting and scrolling through the other two methods.
/// After redrawing the result list the renderer should call
/// [`TypeaheadSession::on_results_rendered`](crate::TypeaheadSession::on_results_rendered)
/// so the highlight is restored on recreated rows.
pub trait ResultRenderer {
    /// Draw the input and result list
    fn render(&mut self, view: &ResultsView<'_>);

    /// Add or remove the "current row" marker on row `index`
    fn set_highlight(&mut self, index: usize, item: &Item, highlighted: bool);

    /// Bring row `index` into view, moving in `direction`
    fn scroll_into_view(&mut self, index: usize, direction: Direction);
}

/// Trait for selection notification sinks
///
/// Receives exactly one event per committed selection or deselection,
/// never for mere navigation.
pub trait SelectionPublisher {
    /// Deliver a selection event
    fn publish(&self, event: &SelectionEvent);
}

impl<F> SelectionPublisher for F
where
    F: Fn(&SelectionEvent),
{
    fn publish(&self, event: &SelectionEvent) {
        self(event);
    }
}

impl<R: ResultRenderer + ?Sized> ResultRenderer for Box<R> {
    fn render(&mut self, view: &ResultsView<'_>) {
        (**self).render(view);
    }

    fn set_highlight(&mut self, index: usize, item: &Item, highlighted: bool) {
        (**self).set_highlight(index, item, highlighted);
    }

    fn scroll_into_view(&mut self, index: usize, direction: Direction) {
        (**self).scroll_into_view(index, direction);
    }
}
