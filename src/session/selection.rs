//! Selection control
//!
//! The selection is the committed item. It is changed by confirming a row,
//! by clearing, by closing without a selection and by the caller through
//! [`TypeaheadSession::set_selection`]. Only the user-driven changes notify
//! the publisher.

use super::TypeaheadSession;
use crate::ui::{ResultRenderer, SelectionEvent, SelectionPublisher};
use crate::{Item, ItemId};

impl<R: ResultRenderer, P: SelectionPublisher> TypeaheadSession<R, P> {
    /// Currently selected item id
    #[must_use]
    pub const fn selection(&self) -> Option<ItemId> {
        self.selected
    }

    /// Currently selected item, if it is in the store
    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        let id = self.selected?;
        self.items.iter().find(|item| item.id == id)
    }

    /// Commit `item` as the selection
    ///
    /// The term becomes the item's description, the list closes and one
    /// selection event is published.
    pub fn select(&mut self, item: &Item) {
        self.unmark_current();
        self.selected = Some(item.id);
        self.term.clone_from(&item.description);
        self.nav.close();

        tracing::debug!(instance = %self.instance, id = item.id, "item selected");
        self.publish();
        self.render();
    }

    /// Drop the selection and the term
    ///
    /// Closes the list, resets the search state and publishes a
    /// deselection event.
    pub fn clear(&mut self) {
        self.reset_search_state();
        self.selected = None;
        self.term.clear();
        self.nav.close();

        tracing::debug!(instance = %self.instance, "selection cleared");
        self.publish();
        self.render();
    }

    /// Close the list, as when the input loses focus
    ///
    /// With a selection the term snaps back to its description. Without one
    /// this is [`clear`](Self::clear).
    pub fn close(&mut self) {
        if self.selected.is_none() {
            self.clear();
            return;
        }

        self.unmark_current();
        self.term = self.resolve_term();
        self.nav.close();
        tracing::trace!(instance = %self.instance, "list closed");
        self.render();
    }

    /// Set the selection from outside
    ///
    /// The external value wins: the term is recomputed from it and no
    /// event is published.
    pub fn set_selection(&mut self, id: Option<ItemId>) {
        self.selected = id;
        self.term = self.resolve_term();
        tracing::debug!(instance = %self.instance, selected = ?id, "selection set externally");
        self.render();
    }

    /// Clear the search and show the selected item's description again
    pub fn reset_to_selected(&mut self) {
        self.reset_search_state();
        self.term = self.resolve_term();
        self.render();
    }

    /// Description of the selected item, or empty when there is none
    pub(super) fn resolve_term(&self) -> String {
        self.selected_item()
            .map(|item| item.description.clone())
            .unwrap_or_default()
    }

    fn publish(&self) {
        let event = match self.selected {
            Some(id) => SelectionEvent::selected(id, self.config.item_type.as_str()),
            None => SelectionEvent::deselected(self.config.item_type.as_str()),
        };
        self.publisher.publish(&event);
    }
}
