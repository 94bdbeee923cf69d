use super::*;

#[test]
fn ctrl_space_normalizes_from_null() {
    let event = ct::KeyEvent::new(ct::KeyCode::Null, ct::KeyModifiers::NONE);
    let converted = KeyEvent::from(event);
    assert_eq!(converted.code, KeyCode::Char(' '));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn modifiers_are_carried_over() {
    let event = ct::KeyEvent::new(
        ct::KeyCode::Char('B'),
        ct::KeyModifiers::SHIFT | ct::KeyModifiers::CONTROL,
    );
    let converted = KeyEvent::from(event);
    assert_eq!(converted.code, KeyCode::Char('B'));
    assert!(converted.modifiers.contains(KeyModifiers::SHIFT));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
    assert!(!converted.modifiers.contains(KeyModifiers::ALT));
}

#[test]
fn key_release_is_dropped() {
    let release = ct::KeyEvent::new_with_kind(
        ct::KeyCode::Char('a'),
        ct::KeyModifiers::NONE,
        ct::KeyEventKind::Release,
    );
    assert_eq!(into_input_event(ct::Event::Key(release)), None);

    let press = ct::KeyEvent::new(ct::KeyCode::Char('a'), ct::KeyModifiers::NONE);
    let converted = into_input_event(ct::Event::Key(press)).unwrap();
    assert_eq!(
        converted.as_key().map(|k| k.code),
        Some(KeyCode::Char('a'))
    );
}

#[test]
fn mouse_click_keeps_position() {
    let event = ct::Event::Mouse(ct::MouseEvent {
        kind: ct::MouseEventKind::Down(ct::MouseButton::Left),
        column: 7,
        row: 3,
        modifiers: ct::KeyModifiers::NONE,
    });
    let converted = into_input_event(event).unwrap();
    let mouse = converted.as_mouse().unwrap();
    assert_eq!(mouse.kind, MouseEventKind::Down(MouseButton::Left));
    assert_eq!((mouse.column, mouse.row), (7, 3));
}

#[test]
fn paste_and_resize_pass_through() {
    assert_eq!(
        into_input_event(ct::Event::Paste("Elm".to_string())),
        Some(InputEvent::Paste("Elm".to_string()))
    );
    assert_eq!(
        into_input_event(ct::Event::Resize(80, 24)),
        Some(InputEvent::Resize(80, 24))
    );
}

#[test]
fn shift_backtab_resolves_to_previous_option() {
    use crate::core::event::Key;
    use crate::core::Command;
    use crate::kernel::services::adapters::{KeybindingContext, KeybindingService};

    let event = ct::KeyEvent::new(ct::KeyCode::BackTab, ct::KeyModifiers::SHIFT);
    let converted = KeyEvent::from(event);
    assert_eq!(converted.code, KeyCode::BackTab);
    assert!(converted.modifiers.is_empty());

    let keybindings = KeybindingService::new();
    assert_eq!(
        keybindings.resolve(KeybindingContext::Quiz, &Key::from(converted)),
        Some(&Command::OptionPrev)
    );
}
