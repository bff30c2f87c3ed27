//! Selection event sinks
//!
//! The event bus itself lives outside this crate. [`EventLog`] buffers
//! events in memory so a host (or a test) can drain them on its own
//! schedule; any `Fn(&SelectionEvent)` can be used to forward events
//! directly instead.

use super::traits::SelectionPublisher;
use super::types::SelectionEvent;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Buffered, cloneable selection event sink
///
/// Clones share the same buffer, so a host can keep one handle while the
/// session owns another.
///
/// # Examples
///
/// ```
/// use typeahead::ui::{EventLog, SelectionEvent, SelectionPublisher};
///
/// let log = EventLog::new();
/// let handle = log.clone();
/// log.publish(&SelectionEvent::selected(2, "fruit"));
///
/// assert_eq!(handle.len(), 1);
/// assert_eq!(handle.drain(), vec![SelectionEvent::selected(2, "fruit")]);
/// assert!(handle.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<SelectionEvent>>>,
}

impl EventLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SelectionEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of every buffered event, oldest first
    #[must_use]
    pub fn events(&self) -> Vec<SelectionEvent> {
        self.lock().clone()
    }

    /// Most recent event, if any
    #[must_use]
    pub fn last(&self) -> Option<SelectionEvent> {
        self.lock().last().cloned()
    }

    /// Take every buffered event, leaving the log empty
    #[must_use]
    pub fn drain(&self) -> Vec<SelectionEvent> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of buffered events
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if no event is buffered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl SelectionPublisher for EventLog {
    fn publish(&self, event: &SelectionEvent) {
        self.lock().push(event.clone());
    }
}
