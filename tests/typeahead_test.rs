//! Integration tests for the typeahead engine
//!
//! These tests drive a session through its public API with the headless
//! renderer and an event log, the way a host UI would.

use std::sync::Arc;
use typeahead::keybinds::{KeyBindings, NavAction};
use typeahead::navigation::{Direction, NavPhase};
use typeahead::session::FilterOutcome;
use typeahead::ui::{EventLog, HeadlessRenderer, NullRenderer, SelectionEvent};
use typeahead::{Item, ItemId, KeyOutcome, TypeaheadConfig, TypeaheadSession};

type Session = TypeaheadSession<HeadlessRenderer, EventLog>;

/// Helper function to build the fruit store
fn fruit_store() -> Arc<[Item]> {
    vec![
        Item::new(1, "Apple"),
        Item::new(2, "Apricot"),
        Item::new(3, "Banana"),
    ]
    .into()
}

/// Helper function to attach a session with an event log
fn attach(config: TypeaheadConfig) -> (Session, EventLog) {
    let events = EventLog::new();
    let session = TypeaheadSession::attach(
        fruit_store(),
        config.with_item_type("fruit"),
        HeadlessRenderer::new(),
        events.clone(),
    )
    .unwrap();
    (session, events)
}

fn result_ids(session: &Session) -> Vec<ItemId> {
    session.results().iter().map(|item| item.id).collect()
}

#[test]
fn test_typing_and_arrow_navigation() {
    let (mut session, _) = attach(TypeaheadConfig::default());

    session.on_input("ap").unwrap();
    assert_eq!(result_ids(&session), vec![1, 2]);
    assert!(session.is_open());
    assert_eq!(session.current_index(), None);

    session.handle_key_name("ArrowDown");
    session.handle_key_name("ArrowDown");
    assert_eq!(session.current_index(), Some(1));
    assert_eq!(session.current_item().map(|item| item.id), Some(2));

    session.handle_key_name("ArrowDown");
    assert_eq!(session.current_index(), Some(0));
}

#[test]
fn test_term_without_prefix_match() {
    let (mut session, _) = attach(TypeaheadConfig::default());

    session.on_input("ab").unwrap();

    assert!(session.results().is_empty());
    assert!(!session.is_open());
    assert_eq!(session.phase(), NavPhase::Closed);
}

#[test]
fn test_short_term_disables_filtering() {
    for show_all in [false, true] {
        let (mut session, _) = attach(TypeaheadConfig::default().with_show_all(show_all));
        session.on_input("ap").unwrap();

        let outcome = session.on_input("a").unwrap();

        assert_eq!(outcome, FilterOutcome::Reset);
        assert_eq!(result_ids(&session), vec![1, 2, 3]);
        assert_eq!(session.is_open(), show_all);
        assert!(!session.is_cached("ap"));
    }
}

#[test]
fn test_shrinking_below_min_length_invalidates_cache() {
    let (mut session, _) = attach(TypeaheadConfig::default());

    assert_eq!(session.on_input("ap").unwrap(), FilterOutcome::Computed);
    assert_eq!(session.on_input("a").unwrap(), FilterOutcome::Reset);
    assert_eq!(session.on_input("ap").unwrap(), FilterOutcome::Computed);
    assert_eq!(result_ids(&session), vec![1, 2]);
}

#[test]
fn test_backspace_within_filterable_length_hits_cache() {
    let (mut session, _) = attach(TypeaheadConfig::default());

    session.on_input("ap").unwrap();
    session.on_input("apr").unwrap();
    session.on_input("apri").unwrap();

    assert_eq!(session.on_input("apr").unwrap(), FilterOutcome::Cached);
    assert_eq!(session.on_input("ap").unwrap(), FilterOutcome::Cached);
    assert_eq!(result_ids(&session), vec![1, 2]);
}

#[test]
fn test_case_variants_are_separate_cache_entries() {
    let (mut session, _) = attach(TypeaheadConfig::default());

    session.on_input("ap").unwrap();
    let outcome = session.on_input("AP").unwrap();

    assert_eq!(outcome, FilterOutcome::Computed);
    assert_eq!(result_ids(&session), vec![1, 2]);
    assert!(session.is_cached("ap"));
    assert!(session.is_cached("AP"));
}

#[test]
fn test_confirm_commits_exactly_one_notification() {
    let (mut session, events) = attach(TypeaheadConfig::default());
    session.on_input("ap").unwrap();
    session.handle_action(NavAction::Next);
    session.handle_action(NavAction::Next);

    let outcome = session.handle_key_name("enter");

    assert_eq!(outcome, KeyOutcome::Committed(2));
    assert_eq!(session.selection(), Some(2));
    assert_eq!(session.term(), "Apricot");
    assert!(!session.is_open());
    assert_eq!(events.events(), vec![SelectionEvent::selected(2, "fruit")]);
}

#[test]
fn test_notification_serializes_with_camel_case() {
    let (mut session, events) = attach(TypeaheadConfig::default());
    session.on_input("ba").unwrap();
    session.handle_action(NavAction::Next);
    session.handle_action(NavAction::Confirm);

    let json = serde_json::to_value(events.last().unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({"id": 3, "itemType": "fruit"}));
}

#[test]
fn test_blur_restores_or_clears() {
    let (mut session, events) = attach(TypeaheadConfig::default());
    session.on_input("ba").unwrap();
    session.close();
    assert_eq!(session.term(), "");
    assert_eq!(events.drain(), vec![SelectionEvent::deselected("fruit")]);

    session.set_selection(Some(1));
    session.on_input("apr").unwrap();
    session.close();
    assert_eq!(session.term(), "Apple");
    assert!(events.is_empty());
}

#[test]
fn test_show_all_reopens_on_arrow_key() {
    let (mut session, _) = attach(TypeaheadConfig::default().with_show_all(true));

    assert_eq!(session.handle_key_name("down"), KeyOutcome::Reopened);
    assert_eq!(result_ids(&session), vec![1, 2, 3]);
    assert_eq!(session.handle_key_name("up"), KeyOutcome::Navigated(0));
    assert_eq!(session.handle_key_name("up"), KeyOutcome::Navigated(2));
    assert_eq!(session.renderer().last_scroll(), Some((2, Direction::Previous)));
}

#[test]
fn test_rerender_restores_selected_highlight() {
    let (mut session, _) = attach(TypeaheadConfig::default().with_selected_item(Some(2)));
    session.on_input("ap").unwrap();

    session.on_results_rendered();

    assert_eq!(session.renderer().highlighted(), vec![1]);
    assert_eq!(session.phase(), NavPhase::OpenSelection(1));
}

#[test]
fn test_config_from_toml_drives_session() {
    let config = TypeaheadConfig::from_toml_str(
        r#"
        item_type = "fruit"
        show_all = true
        min_filter_len = 3

        [keybinds]
        next = ["down", "ctrl-n"]
        confirm = "enter"
        "#,
    )
    .unwrap();

    let events = EventLog::new();
    let mut session =
        TypeaheadSession::attach(fruit_store(), config, HeadlessRenderer::new(), events.clone())
            .unwrap();

    assert_eq!(session.on_input("ap").unwrap(), FilterOutcome::Reset);
    assert!(session.is_open());
    assert_eq!(session.on_input("apr").unwrap(), FilterOutcome::Computed);

    assert_eq!(session.handle_key_name("ctrl-n"), KeyOutcome::Navigated(0));
    assert_eq!(session.handle_key_name("tab"), KeyOutcome::Ignored);
    assert_eq!(session.handle_key_name("enter"), KeyOutcome::Committed(2));
    assert_eq!(events.last(), Some(SelectionEvent::selected(2, "fruit")));
}

#[test]
fn test_custom_keybinds_in_code() {
    let keybinds = KeyBindings::default().with_binding(NavAction::Confirm, &["none"]);
    let (mut session, events) = attach(TypeaheadConfig::default().with_keybinds(keybinds));
    session.on_input("ap").unwrap();
    session.handle_key_name("down");

    assert_eq!(session.handle_key_name("enter"), KeyOutcome::Ignored);
    assert!(events.is_empty());
}

#[test]
fn test_sessions_are_independent() {
    let store = fruit_store();
    let mut first = TypeaheadSession::attach(
        Arc::clone(&store),
        TypeaheadConfig::default(),
        NullRenderer,
        EventLog::new(),
    )
    .unwrap();
    let mut second = TypeaheadSession::attach(
        Arc::clone(&store),
        TypeaheadConfig::default(),
        NullRenderer,
        EventLog::new(),
    )
    .unwrap();

    first.on_input("ap").unwrap();
    second.on_input("ba").unwrap();

    assert_ne!(first.instance(), second.instance());
    assert_eq!(first.results().len(), 2);
    assert_eq!(second.results().len(), 1);
    assert!(!second.is_cached("ap"));
}

#[test]
fn test_detach_hands_back_collaborators() {
    let (mut session, _) = attach(TypeaheadConfig::default());
    session.on_input("ap").unwrap();
    session.handle_action(NavAction::Next);
    session.handle_action(NavAction::Confirm);

    let (renderer, events) = session.detach();

    let view = renderer.last_view().unwrap();
    assert!(!view.open);
    assert_eq!(view.term, "Apple");
    assert_eq!(events.len(), 1);
}
