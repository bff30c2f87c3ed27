//! Common types shared with rendering and event collaborators

use crate::ItemId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of one typeahead session
///
/// Renderers use it to tell coexisting sessions apart (for example to
/// derive element ids). Every attached session gets a distinct value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Allocate a fresh instance id
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "typeahead-{}", self.0)
    }
}

/// Notification sent when a selection is committed or cleared
///
/// `id` is `None` for an explicit deselection. Serializes as
/// `{"id": 2, "itemType": "fruit"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionEvent {
    /// Selected item, or `None` when the selection was cleared
    pub id: Option<ItemId>,
    /// Caller-supplied tag passed through unchanged
    pub item_type: String,
}

impl SelectionEvent {
    /// Event for a committed selection
    #[must_use]
    pub fn selected(id: ItemId, item_type: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            item_type: item_type.into(),
        }
    }

    /// Event for a cleared selection
    #[must_use]
    pub fn deselected(item_type: impl Into<String>) -> Self {
        Self {
            id: None,
            item_type: item_type.into(),
        }
    }

    /// Whether this event clears the selection
    #[must_use]
    pub const fn is_deselection(&self) -> bool {
        self.id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_ids_are_distinct() {
        let first = InstanceId::next();
        let second = InstanceId::next();
        assert_ne!(first, second);
        assert!(second.get() > first.get());
    }

    #[test]
    fn test_instance_id_display() {
        let id = InstanceId(7);
        assert_eq!(id.to_string(), "typeahead-7");
    }

    #[test]
    fn test_selection_event_json_shape() {
        let event = SelectionEvent::selected(2, "fruit");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 2, "itemType": "fruit" }));
    }

    #[test]
    fn test_deselection_serializes_null_id() {
        let event = SelectionEvent::deselected("fruit");
        assert!(event.is_deselection());

        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"id":null,"itemType":"fruit"}"#);

        let parsed: SelectionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
