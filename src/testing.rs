//! Testing utilities for typeahead
//!
//! This module provides a small fixed item store and a helper for attaching
//! a session with recording collaborators.
//!
//! Only available when compiled with `cfg(test)`.

use crate::Item;
use crate::config::TypeaheadConfig;
use crate::session::TypeaheadSession;
use crate::ui::{EventLog, HeadlessRenderer};
use std::sync::Arc;

/// Session type used by unit tests
pub type TestSession = TypeaheadSession<HeadlessRenderer, EventLog>;

/// Three-item store: Apple (1), Apricot (2), Banana (3)
#[must_use]
pub fn fruit_store() -> Arc<[Item]> {
    vec![
        Item::new(1, "Apple"),
        Item::new(2, "Apricot"),
        Item::new(3, "Banana"),
    ]
    .into()
}

/// Attach a session over [`fruit_store`] with item type `"fruit"`
///
/// Returns the session and a handle sharing its event buffer.
///
/// # Panics
/// Panics if `config` fails validation.
pub fn fruit_session(config: TypeaheadConfig) -> (TestSession, EventLog) {
    let events = EventLog::new();
    let session = TypeaheadSession::attach(
        fruit_store(),
        config.with_item_type("fruit"),
        HeadlessRenderer::new(),
        events.clone(),
    )
    .expect("Failed to attach test session");

    (session, events)
}
