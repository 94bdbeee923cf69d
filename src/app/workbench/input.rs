use super::util::{hit, rect_contains};
use super::Workbench;
use crate::core::event::{
    InputEvent, Key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::Action;
use crate::tui::view::EventResult;

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    let consumed = match event {
        InputEvent::Key(key) => handle_key(workbench, key),
        InputEvent::Mouse(mouse) => handle_mouse(workbench, mouse),
        InputEvent::Paste(text) => handle_paste(workbench, text),
        InputEvent::Resize(_, _) => true,
        InputEvent::FocusGained | InputEvent::FocusLost => false,
    };

    if workbench.should_quit {
        EventResult::Quit
    } else if consumed {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

fn keybinding_context(workbench: &Workbench) -> KeybindingContext {
    let state = workbench.store.state();
    if state.quiz.visible {
        KeybindingContext::Quiz
    } else if state.search.input_focused {
        KeybindingContext::Search
    } else {
        KeybindingContext::Global
    }
}

fn handle_key(workbench: &mut Workbench, event: &KeyEvent) -> bool {
    if event.kind == KeyEventKind::Release {
        return false;
    }

    let context = keybinding_context(workbench);
    let key = Key::from(*event);
    if let Some(command) = workbench.keybindings.resolve(context, &key).cloned() {
        let _ = workbench.dispatch_kernel(Action::RunCommand(command));
        return true;
    }

    if context != KeybindingContext::Search {
        return false;
    }

    match event.code {
        KeyCode::Char(ch) if is_text_modifiers(event.modifiers) => {
            workbench.dispatch_kernel(Action::InsertChar(ch))
        }
        _ => false,
    }
}

fn is_text_modifiers(modifiers: KeyModifiers) -> bool {
    modifiers.is_empty() || modifiers == KeyModifiers::SHIFT
}

fn handle_paste(workbench: &mut Workbench, text: &str) -> bool {
    let state = workbench.store.state();
    if state.quiz.visible || !state.search.input_focused {
        return false;
    }

    let mut changed = false;
    for ch in text.chars().filter(|c| !c.is_control()) {
        changed |= workbench.dispatch_kernel(Action::InsertChar(ch));
    }
    changed
}

fn handle_mouse(workbench: &mut Workbench, event: &MouseEvent) -> bool {
    let (x, y) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if workbench.store.state().quiz.visible {
                click_in_quiz(workbench, x, y)
            } else {
                click_in_search(workbench, x, y)
            }
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
            if workbench.store.state().quiz.visible {
                return false;
            }
            let over_list = workbench
                .regions
                .suggestions
                .iter()
                .any(|(_, rect)| rect_contains(*rect, x, y));
            if !over_list {
                return false;
            }
            let delta = if event.kind == MouseEventKind::ScrollDown {
                1
            } else {
                -1
            };
            workbench.dispatch_kernel(Action::MoveSelection(delta))
        }
        _ => false,
    }
}

/// A click blurs the input before the clicked element reacts, so a
/// suggestion still on screen receives the click.
fn click_in_search(workbench: &mut Workbench, x: u16, y: u16) -> bool {
    let mut changed = false;
    let on_input = hit(workbench.regions.input, x, y);

    if on_input {
        if !workbench.store.state().search.input_focused {
            changed |= workbench.dispatch_kernel(Action::InputFocus);
        }
        return changed;
    }

    if workbench.store.state().search.input_focused {
        changed |= workbench.dispatch_kernel(Action::InputBlur);
    }

    let row = workbench
        .regions
        .suggestions
        .iter()
        .find(|(_, rect)| rect_contains(*rect, x, y))
        .map(|(row, _)| *row);
    if let Some(row) = row {
        changed |= workbench.dispatch_kernel(Action::SelectSuggestion(row));
        return changed;
    }

    if hit(workbench.regions.blitz_button, x, y) {
        changed |= workbench.dispatch_kernel(Action::StartQuiz);
    }

    changed
}

fn click_in_quiz(workbench: &mut Workbench, x: u16, y: u16) -> bool {
    if !hit(workbench.regions.modal, x, y) {
        return false;
    }

    if hit(workbench.regions.reset_button, x, y) {
        return workbench.dispatch_kernel(Action::StartQuiz);
    }

    if hit(workbench.regions.close_button, x, y) {
        return workbench.dispatch_kernel(Action::CloseQuiz);
    }

    let option = workbench
        .regions
        .options
        .iter()
        .position(|rect| rect_contains(*rect, x, y));
    match option {
        Some(index) => workbench.dispatch_kernel(Action::GuessOption(index)),
        None => false,
    }
}
