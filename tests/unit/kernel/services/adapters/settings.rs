use super::*;
use crate::kernel::services::ports::KeybindingRule;
use std::time::Duration;

#[test]
fn parse_keybinding_with_modifiers() {
    assert_eq!(
        parse_keybinding("ctrl+b"),
        Some(Key::ctrl(KeyCode::Char('b')))
    );
    assert_eq!(
        parse_keybinding("Ctrl + Alt + Left"),
        Some(Key::new(
            KeyCode::Left,
            KeyModifiers::CONTROL | KeyModifiers::ALT
        ))
    );
    assert_eq!(parse_keybinding("f2"), Some(Key::simple(KeyCode::F(2))));
    assert_eq!(parse_keybinding("space"), Some(Key::simple(KeyCode::Char(' '))));
    assert_eq!(parse_keybinding("f"), Some(Key::simple(KeyCode::Char('f'))));
}

#[test]
fn shifted_letters_match_terminal_reports() {
    let expected = Some(Key::shift(KeyCode::Char('R')));
    assert_eq!(parse_keybinding("R"), expected);
    assert_eq!(parse_keybinding("shift+r"), expected);
}

#[test]
fn parse_keybinding_rejects_garbage() {
    assert_eq!(parse_keybinding(""), None);
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("hello"), None);
    assert_eq!(parse_keybinding("fx"), None);
}

#[test]
fn parse_command_uses_command_names() {
    assert_eq!(parse_command("blitz"), Command::Blitz);
    assert_eq!(parse_command("guessOption3"), Command::GuessOption(2));
}

#[test]
fn default_settings_are_written_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    write_default_settings(&path).unwrap();
    assert_eq!(load_settings_from(&path), Some(Settings::default()));

    std::fs::write(&path, r#"{"blur_hide_delay_ms": 50}"#).unwrap();
    write_default_settings(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.blur_hide_delay_ms, 50);
}

#[test]
fn partial_settings_fill_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{
            "dataset": "/tmp/addresses.json",
            "keybindings": [{"key": "ctrl+g", "command": "blitz", "context": "search"}]
        }"#,
    )
    .unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(
        settings.dataset.as_deref(),
        Some(std::path::Path::new("/tmp/addresses.json"))
    );
    assert_eq!(settings.widget_config().blur_hide_delay, Duration::from_millis(200));
    assert_eq!(
        settings.keybindings,
        vec![KeybindingRule {
            key: "ctrl+g".to_string(),
            command: "blitz".to_string(),
            context: Some("search".to_string()),
        }]
    );
}

#[test]
fn invalid_or_missing_settings_load_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    assert_eq!(load_settings_from(&path), None);

    std::fs::write(&path, "{ not json").unwrap();
    assert_eq!(load_settings_from(&path), None);
}
