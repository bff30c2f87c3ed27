//! Key naming shared by configuration and terminal input

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Convert a key event to its configuration name
///
/// Modifiers are prefixed in the order `ctrl-`, `alt-`, `shift-`; shift is
/// implied for characters. Returns `None` for keys that have no name.
#[must_use]
pub fn key_to_string(key: &KeyEvent) -> Option<String> {
    let base = match key.code {
        KeyCode::Char(c) => c.to_lowercase().to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Backspace => "bspace".to_string(),
        KeyCode::Delete => "del".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdn".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "btab".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        _ => return None,
    };

    let mut result = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        result.push_str("ctrl-");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        result.push_str("alt-");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT)
        && !matches!(key.code, KeyCode::Char(_) | KeyCode::BackTab)
    {
        result.push_str("shift-");
    }
    result.push_str(&base);

    Some(result)
}

/// Normalize a key name from config or a host toolkit
///
/// Lowercases, trims and maps common aliases (browser `KeyboardEvent.key`
/// names such as `"ArrowDown"`, `"Return"`, `"Escape"`) onto the names
/// produced by [`key_to_string`].
#[must_use]
pub fn normalize_key_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let (modifiers, base) = match lowered.rfind('-') {
        // a trailing '-' is the minus key itself, not a separator
        Some(pos) if pos + 1 < lowered.len() => lowered.split_at(pos + 1),
        _ => ("", lowered.as_str()),
    };

    let base = match base {
        "arrowdown" => "down",
        "arrowup" => "up",
        "arrowleft" => "left",
        "arrowright" => "right",
        "return" => "enter",
        "escape" => "esc",
        "backspace" => "bspace",
        "delete" => "del",
        "pageup" => "pgup",
        "pagedown" => "pgdn",
        other => other,
    };

    format!("{}{base}", modifiers.replace("control-", "ctrl-"))
}
