//! Typeahead session
//!
//! A session ties one item store to its search cache, navigation state and
//! selection, and drives the rendering and event collaborators.
//!
//! # Workflow
//!
//! ```text
//! attach
//!   ↓
//! ┌─→ on_input(term)
//! │       ├─ shorter than min_filter_len → full store, cache cleared, open = show_all
//! │       ├─ cached term                  → cached results
//! │       └─ new term                     → filter previous results, cache them
//! │   handle_action / handle_key
//! │       ├─ Next / Previous → move highlight (wraps), or reopen while closed
//! │       └─ Confirm         → select(item) → notification
//! │   close (blur)
//! │       ├─ selection kept  → show its description
//! │       └─ no selection    → clear + deselection notification
//! └── detach
//! ```
//!
//! Every event takes `&mut self` and runs to completion; nothing is
//! deferred.

mod selection;

use crate::config::TypeaheadConfig;
use crate::keybinds::NavAction;
use crate::navigation::{Direction, IndexChange, NavPhase, NavigationState};
use crate::search::{PrefixMatcher, SearchCache};
use crate::ui::{InstanceId, ResultRenderer, ResultsView, SelectionPublisher};
use crate::{Item, ItemId, TypeaheadError};
use crossterm::event::KeyEvent;
use std::sync::Arc;

/// Session result type
pub type Result<T> = std::result::Result<T, TypeaheadError>;

/// What a key or action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The highlight moved to this row
    Navigated(usize),
    /// The closed list was reopened with the full item store
    Reopened,
    /// This item was selected
    Committed(ItemId),
    /// Nothing changed
    Ignored,
}

/// Which filtering policy produced the current results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Term too short: unfiltered store shown, cache cleared
    Reset,
    /// Results served from the search cache
    Cached,
    /// Results computed and added to the search cache
    Computed,
}

/// Incremental search session over a shared item store
pub struct TypeaheadSession<R, P> {
    instance: InstanceId,
    config: TypeaheadConfig,
    items: Arc<[Item]>,
    term: String,
    /// Matcher that produced the current results; `None` means the results
    /// are the whole store
    results_filter: Option<PrefixMatcher>,
    cache: SearchCache,
    nav: NavigationState,
    selected: Option<ItemId>,
    /// Set when the results change and cleared by the next
    /// `on_results_rendered`
    results_replaced: bool,
    renderer: R,
    publisher: P,
}

impl<R: ResultRenderer, P: SelectionPublisher> TypeaheadSession<R, P> {
    /// Attach a session to an item store
    ///
    /// The list starts closed with the whole store as results. The display
    /// term is the description of `config.selected_item_id`, if any.
    ///
    /// # Errors
    ///
    /// Returns `TypeaheadError::InvalidConfig` if the configuration fails
    /// validation.
    pub fn attach(
        items: impl Into<Arc<[Item]>>,
        config: TypeaheadConfig,
        renderer: R,
        publisher: P,
    ) -> Result<Self> {
        config.validate()?;
        let items = items.into();

        let mut session = Self {
            instance: InstanceId::next(),
            cache: SearchCache::with_capacity(config.cache_capacity),
            nav: NavigationState::new(Arc::clone(&items)),
            selected: config.selected_item_id,
            items,
            config,
            term: String::new(),
            results_filter: None,
            results_replaced: false,
            renderer,
            publisher,
        };
        session.term = session.resolve_term();

        tracing::debug!(
            instance = %session.instance,
            items = session.items.len(),
            selected = ?session.selected,
            "typeahead attached"
        );
        session.render();
        Ok(session)
    }

    /// Detach the session, dropping its cache and returning the collaborators
    pub fn detach(self) -> (R, P) {
        tracing::debug!(instance = %self.instance, "typeahead detached");
        let Self {
            renderer,
            publisher,
            ..
        } = self;
        (renderer, publisher)
    }

    /// Opaque identity of this session
    #[must_use]
    pub const fn instance(&self) -> InstanceId {
        self.instance
    }

    /// Session configuration
    #[must_use]
    pub const fn config(&self) -> &TypeaheadConfig {
        &self.config
    }

    /// Text shown in the input
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The item store
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Current results in display order
    #[must_use]
    pub fn results(&self) -> &[Item] {
        self.nav.results()
    }

    /// Whether the result list is shown
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.nav.is_open()
    }

    /// Highlighted row while the list is open
    #[must_use]
    pub const fn current_index(&self) -> Option<usize> {
        self.nav.visible_index()
    }

    /// Highlighted item while the list is open
    #[must_use]
    pub fn current_item(&self) -> Option<&Item> {
        self.nav.confirmable()
    }

    /// Navigation phase
    #[must_use]
    pub const fn phase(&self) -> NavPhase {
        self.nav.phase()
    }

    /// Check whether a trimmed term has cached results
    #[must_use]
    pub fn is_cached(&self, term: &str) -> bool {
        self.cache.contains(term)
    }

    /// The rendering collaborator
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The rendering collaborator, mutably
    pub const fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The selection event collaborator
    #[must_use]
    pub const fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Change the "show all" policy
    ///
    /// Takes effect on the next short term or directional key.
    pub const fn set_show_all(&mut self, show_all: bool) {
        self.config.show_all = show_all;
    }

    /// Change the tag copied into selection events
    pub fn set_item_type(&mut self, item_type: impl Into<String>) {
        self.config.item_type = item_type.into();
    }

    /// Handle a change of the input text
    ///
    /// # Errors
    ///
    /// Returns `TypeaheadError::SearchError` if the trimmed term cannot be
    /// compiled into a matcher. The session is left unchanged apart from
    /// the display term.
    pub fn on_input(&mut self, term: &str) -> Result<FilterOutcome> {
        self.term = term.to_string();
        self.filter()
    }

    fn filter(&mut self) -> Result<FilterOutcome> {
        let trimmed = self.term.trim().to_string();
        let matcher = if trimmed.chars().count() < self.config.min_filter_len {
            None
        } else {
            Some(PrefixMatcher::new(&trimmed)?)
        };

        self.unmark_current();

        let outcome = match matcher {
            None => {
                self.cache.clear();
                self.results_filter = None;
                self.show_results(Arc::clone(&self.items), self.config.show_all);
                tracing::debug!(
                    term = %trimmed,
                    open = self.config.show_all,
                    "term too short, showing all items"
                );
                FilterOutcome::Reset
            }
            Some(matcher) => {
                if let Some(hit) = self.cache.lookup(&trimmed) {
                    let open = !hit.is_empty();
                    tracing::debug!(term = %trimmed, results = hit.len(), "search cache hit");
                    self.show_results(hit, open);
                    self.results_filter = Some(matcher);
                    FilterOutcome::Cached
                } else {
                    let narrowing = self
                        .results_filter
                        .as_ref()
                        .is_none_or(|previous| previous.narrows_to(&trimmed));
                    let source = if narrowing {
                        Arc::clone(self.nav.results())
                    } else {
                        Arc::clone(&self.items)
                    };

                    let result: Arc<[Item]> = matcher.filter(source.iter()).into();
                    self.cache.store(&trimmed, Arc::clone(&result));

                    tracing::debug!(
                        term = %trimmed,
                        scanned = source.len(),
                        results = result.len(),
                        narrowing,
                        "filtered items"
                    );

                    let open = !result.is_empty();
                    self.show_results(result, open);
                    self.results_filter = Some(matcher);
                    FilterOutcome::Computed
                }
            }
        };

        self.render();
        Ok(outcome)
    }

    /// Handle a navigation action
    pub fn handle_action(&mut self, action: NavAction) -> KeyOutcome {
        match action.direction() {
            Some(direction) => self.navigate(direction),
            None => self.confirm(),
        }
    }

    /// Handle a terminal key event through the configured keybinds
    ///
    /// Keys without a binding are ignored.
    pub fn handle_key(&mut self, key: &KeyEvent) -> KeyOutcome {
        match self.config.keybinds.action_for_event(key) {
            Some(action) => self.handle_action(action),
            None => KeyOutcome::Ignored,
        }
    }

    /// Handle a key by name (`"enter"`, `"ArrowDown"`, ...) through the
    /// configured keybinds
    pub fn handle_key_name(&mut self, key_name: &str) -> KeyOutcome {
        match self.config.keybinds.action_for(key_name) {
            Some(action) => self.handle_action(action),
            None => KeyOutcome::Ignored,
        }
    }

    fn navigate(&mut self, direction: Direction) -> KeyOutcome {
        if let Some(change) = self.nav.step(direction) {
            self.apply_index_change(change, direction);
            self.render();
            return KeyOutcome::Navigated(change.current);
        }

        if !self.nav.is_open() && self.config.show_all {
            self.reopen_all();
            return KeyOutcome::Reopened;
        }

        KeyOutcome::Ignored
    }

    fn confirm(&mut self) -> KeyOutcome {
        let Some(item) = self.nav.confirmable().cloned() else {
            return KeyOutcome::Ignored;
        };

        self.select(&item);
        KeyOutcome::Committed(item.id)
    }

    /// Show the whole store without touching the term or the cache
    fn reopen_all(&mut self) {
        self.results_filter = None;
        self.show_results(Arc::clone(&self.items), self.config.show_all);
        tracing::debug!(items = self.items.len(), "reopened with all items");
        self.render();
    }

    /// Restore the highlight after the renderer redrew the result rows
    ///
    /// On the first call after the results were replaced, the selected item
    /// becomes the current row and is scrolled into view if it is among
    /// the open results. Every other call only marks the existing current
    /// row again, so keyboard navigation is kept. No new view is pushed.
    pub fn on_results_rendered(&mut self) {
        let replaced = std::mem::take(&mut self.results_replaced);
        if !self.nav.is_open() {
            return;
        }

        let selected_row = self
            .selected
            .filter(|_| replaced)
            .and_then(|id| self.nav.position_of(id));
        if let Some(change) = selected_row.and_then(|index| self.nav.focus(index)) {
            self.apply_index_change(change, Direction::Next);
        } else if let Some(index) = self.nav.current_index() {
            if let Some(item) = self.nav.results().get(index) {
                self.renderer.set_highlight(index, item, true);
            }
        }
    }

    /// Clear the search cache and show the whole store again
    ///
    /// The open flag and the display term are left alone.
    pub fn clear_search(&mut self) {
        self.reset_search_state();
        self.render();
    }

    /// Replace the item store
    ///
    /// Cached results belong to the old store and are dropped. The list
    /// closes, the results become the new store and the display term is
    /// recomputed from the selection.
    pub fn replace_items(&mut self, items: impl Into<Arc<[Item]>>) {
        self.unmark_current();
        self.items = items.into();
        self.cache.clear();
        self.results_filter = None;
        self.show_results(Arc::clone(&self.items), false);
        self.term = self.resolve_term();

        tracing::debug!(
            instance = %self.instance,
            items = self.items.len(),
            "item store replaced"
        );
        self.render();
    }

    fn reset_search_state(&mut self) {
        self.unmark_current();
        self.cache.clear();
        self.results_filter = None;
        let open = self.nav.is_open();
        self.show_results(Arc::clone(&self.items), open);
    }

    fn show_results(&mut self, results: Arc<[Item]>, open: bool) {
        self.nav.set_results(results, open);
        self.results_replaced = true;
    }

    fn apply_index_change(&mut self, change: IndexChange, direction: Direction) {
        if let Some(previous) = change.previous {
            if let Some(item) = self.nav.results().get(previous) {
                self.renderer.set_highlight(previous, item, false);
            }
        }
        if let Some(item) = self.nav.results().get(change.current) {
            self.renderer.set_highlight(change.current, item, true);
        }
        self.renderer.scroll_into_view(change.current, direction);

        tracing::trace!(
            previous = ?change.previous,
            current = change.current,
            ?direction,
            "current row moved"
        );
    }

    fn unmark_current(&mut self) {
        if let Some(index) = self.nav.visible_index() {
            if let Some(item) = self.nav.results().get(index) {
                self.renderer.set_highlight(index, item, false);
            }
        }
    }

    fn render(&mut self) {
        let view = ResultsView {
            instance: self.instance,
            open: self.nav.is_open(),
            results: self.nav.results(),
            current_index: self.nav.visible_index(),
            term: &self.term,
        };
        self.renderer.render(&view);
    }
}
