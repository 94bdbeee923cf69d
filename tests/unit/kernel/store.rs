use super::*;
use crate::kernel::{Dataset, FixedIndex, Record, SequenceIndex, WidgetConfig};
use std::time::Duration;

fn elm_oak() -> Dataset {
    Dataset::new(vec![
        Record::new("1 Elm St", "North"),
        Record::new("2 Oak Ave", "South"),
    ])
}

fn store_with(dataset: Dataset, index: usize) -> Store {
    Store::with_index_source(
        WidgetState::new(dataset, WidgetConfig::default()),
        Box::new(FixedIndex(index)),
    )
}

fn type_query(store: &mut Store, text: &str) {
    for ch in text.chars() {
        store.dispatch(Action::InsertChar(ch));
    }
}

fn assert_dropdown_guard(store: &Store) {
    let search = &store.state().search;
    if search.dropdown_visible && search.pending_hide.is_none() {
        assert!(!search.query.is_empty());
        assert!(!search.results.is_empty());
    }
}

fn scheduled_token(effects: &[Effect]) -> HideToken {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::ScheduleDropdownHide { token, .. } => Some(*token),
            _ => None,
        })
        .expect("blur schedules a hide")
}

#[test]
fn typing_filters_and_shows_dropdown() {
    let mut store = store_with(elm_oak(), 0);
    store.dispatch(Action::InputFocus);
    type_query(&mut store, "elm");

    let state = store.state();
    assert_eq!(state.search.query, "elm");
    assert_eq!(state.search.results, vec![0]);
    assert!(state.search.dropdown_shown());
    assert_dropdown_guard(&store);
}

#[test]
fn no_match_hides_dropdown() {
    let mut store = store_with(elm_oak(), 0);
    type_query(&mut store, "pine");
    assert!(store.state().search.results.is_empty());
    assert!(!store.state().search.dropdown_visible);
}

#[test]
fn clearing_query_hides_dropdown() {
    let mut store = store_with(elm_oak(), 0);
    type_query(&mut store, "e");
    assert!(store.state().search.dropdown_visible);

    let result = store.dispatch(Action::RunCommand(Command::ClearQuery));
    assert!(result.state_changed);
    assert!(store.state().search.query.is_empty());
    assert!(!store.state().search.dropdown_visible);
    assert_dropdown_guard(&store);
}

#[test]
fn selecting_suggestion_sets_query_and_hides() {
    let mut store = store_with(elm_oak(), 0);
    store.dispatch(Action::InputFocus);
    type_query(&mut store, "elm");

    let result = store.dispatch(Action::SelectSuggestion(0));
    assert!(result.state_changed);
    let search = &store.state().search;
    assert_eq!(search.query, "1 Elm St");
    assert_eq!(search.query_cursor, "1 Elm St".len());
    assert!(!search.dropdown_visible);
    assert_eq!(search.results, vec![0]);
}

#[test]
fn selecting_out_of_range_row_is_ignored() {
    let mut store = store_with(elm_oak(), 0);
    type_query(&mut store, "elm");
    let result = store.dispatch(Action::SelectSuggestion(3));
    assert!(!result.state_changed);
    assert_eq!(store.state().search.query, "elm");
}

#[test]
fn blur_schedules_hide_and_elapsed_token_hides() {
    let mut store = store_with(elm_oak(), 0);
    store.dispatch(Action::InputFocus);
    type_query(&mut store, "elm");

    let result = store.dispatch(Action::InputBlur);
    let token = scheduled_token(&result.effects);
    assert!(result.effects.contains(&Effect::ScheduleDropdownHide {
        token,
        after: Duration::from_millis(200),
    }));
    // Still visible during the grace period.
    assert!(store.state().search.dropdown_visible);
    assert!(!store.state().search.input_focused);

    let result = store.dispatch(Action::DropdownHideElapsed(token));
    assert!(result.state_changed);
    assert!(!store.state().search.dropdown_visible);
    assert_eq!(store.state().search.pending_hide, None);
}

#[test]
fn refocus_cancels_pending_hide() {
    let mut store = store_with(elm_oak(), 0);
    store.dispatch(Action::InputFocus);
    type_query(&mut store, "elm");
    let token = scheduled_token(&store.dispatch(Action::InputBlur).effects);

    let result = store.dispatch(Action::InputFocus);
    assert!(result
        .effects
        .contains(&Effect::CancelDropdownHide { token }));

    let result = store.dispatch(Action::DropdownHideElapsed(token));
    assert!(!result.state_changed);
    assert!(store.state().search.dropdown_visible);
}

#[test]
fn stale_token_is_ignored_after_second_blur() {
    let mut store = store_with(elm_oak(), 0);
    store.dispatch(Action::InputFocus);
    type_query(&mut store, "elm");
    let first = scheduled_token(&store.dispatch(Action::InputBlur).effects);
    store.dispatch(Action::InputFocus);
    let second = scheduled_token(&store.dispatch(Action::InputBlur).effects);
    assert_ne!(first, second);

    assert!(!store.dispatch(Action::DropdownHideElapsed(first)).state_changed);
    assert!(store.state().search.dropdown_visible);
    assert!(store.dispatch(Action::DropdownHideElapsed(second)).state_changed);
    assert!(!store.state().search.dropdown_visible);
}

#[test]
fn click_after_blur_still_selects() {
    let mut store = store_with(elm_oak(), 0);
    store.dispatch(Action::InputFocus);
    type_query(&mut store, "oak");
    let token = scheduled_token(&store.dispatch(Action::InputBlur).effects);

    let result = store.dispatch(Action::SelectSuggestion(0));
    assert!(result
        .effects
        .contains(&Effect::CancelDropdownHide { token }));
    assert_eq!(store.state().search.query, "2 Oak Ave");
}

#[test]
fn focus_with_empty_query_keeps_dropdown_hidden() {
    let mut store = store_with(elm_oak(), 0);
    store.dispatch(Action::InputFocus);
    assert!(store.state().search.input_focused);
    assert!(!store.state().search.dropdown_visible);
}

#[test]
fn keyboard_selection_and_accept() {
    let mut store = store_with(
        Dataset::new(vec![
            Record::new("1 Main St", "East"),
            Record::new("2 Main St", "West"),
        ]),
        0,
    );
    store.dispatch(Action::InputFocus);
    type_query(&mut store, "main");

    store.dispatch(Action::RunCommand(Command::SuggestionNext));
    assert_eq!(store.state().search.selected, 1);
    store.dispatch(Action::RunCommand(Command::SuggestionNext));
    assert_eq!(store.state().search.selected, 0);
    store.dispatch(Action::RunCommand(Command::SuggestionPrev));
    assert_eq!(store.state().search.selected, 1);

    store.dispatch(Action::RunCommand(Command::AcceptSuggestion));
    assert_eq!(store.state().search.query, "2 Main St");
    assert!(!store.state().search.dropdown_visible);

    // Hidden dropdown: accept does nothing.
    let result = store.dispatch(Action::RunCommand(Command::AcceptSuggestion));
    assert!(!result.state_changed);
}

#[test]
fn escape_closes_dropdown_then_clears_query() {
    let mut store = store_with(elm_oak(), 0);
    store.dispatch(Action::InputFocus);
    type_query(&mut store, "elm");

    store.dispatch(Action::RunCommand(Command::Escape));
    assert!(!store.state().search.dropdown_visible);
    assert_eq!(store.state().search.query, "elm");

    store.dispatch(Action::RunCommand(Command::Escape));
    assert!(store.state().search.query.is_empty());
}

#[test]
fn quiz_guess_scenario() {
    let mut store = store_with(elm_oak(), 1);
    store.dispatch(Action::StartQuiz);

    let quiz = &store.state().quiz;
    assert!(quiz.visible);
    assert_eq!(store.state().quiz_target().map(|r| r.address.as_str()), Some("2 Oak Ave"));
    assert_eq!(quiz.guessed, None);
    assert_eq!(quiz.correct, None);

    store.dispatch(Action::Guess("North".to_string()));
    assert_eq!(store.state().quiz.correct, Some(false));
    assert_eq!(store.state().quiz.guessed.as_deref(), Some("North"));

    store.dispatch(Action::Guess("South".to_string()));
    assert_eq!(store.state().quiz.correct, Some(true));
    assert_eq!(store.state().quiz.guessed.as_deref(), Some("South"));
}

#[test]
fn guess_option_uses_location_list() {
    let mut store = store_with(elm_oak(), 0);
    store.dispatch(Action::StartQuiz);

    store.dispatch(Action::RunCommand(Command::GuessOption(0)));
    assert_eq!(store.state().quiz.correct, Some(true));
    assert_eq!(store.state().quiz.option_cursor, 0);

    store.dispatch(Action::RunCommand(Command::OptionNext));
    store.dispatch(Action::RunCommand(Command::GuessSelected));
    assert_eq!(store.state().quiz.guessed.as_deref(), Some("South"));
    assert_eq!(store.state().quiz.correct, Some(false));

    let result = store.dispatch(Action::RunCommand(Command::GuessOption(7)));
    assert!(!result.state_changed);
}

#[test]
fn option_cursor_wraps() {
    let mut store = store_with(elm_oak(), 0);
    store.dispatch(Action::StartQuiz);
    store.dispatch(Action::RunCommand(Command::OptionPrev));
    assert_eq!(store.state().quiz.option_cursor, 1);
    store.dispatch(Action::RunCommand(Command::OptionNext));
    assert_eq!(store.state().quiz.option_cursor, 0);
}

#[test]
fn quiz_commands_need_open_modal() {
    let mut store = store_with(elm_oak(), 0);
    for command in [
        Command::GuessOption(0),
        Command::GuessSelected,
        Command::OptionNext,
        Command::ResetQuiz,
    ] {
        let result = store.dispatch(Action::RunCommand(command));
        assert!(!result.state_changed);
    }
    assert!(!store.state().quiz.visible);
    assert_eq!(store.state().quiz.guessed, None);
}

#[test]
fn reset_picks_new_target_and_clears_guess() {
    let mut store = Store::with_index_source(
        WidgetState::new(elm_oak(), WidgetConfig::default()),
        Box::new(SequenceIndex::new(vec![0, 1])),
    );
    store.dispatch(Action::RunCommand(Command::Blitz));
    assert_eq!(store.state().quiz.target, Some(0));
    store.dispatch(Action::Guess("North".to_string()));

    store.dispatch(Action::RunCommand(Command::ResetQuiz));
    let quiz = &store.state().quiz;
    assert!(quiz.visible);
    assert_eq!(quiz.target, Some(1));
    assert_eq!(quiz.guessed, None);
    assert_eq!(quiz.correct, None);
}

#[test]
fn close_keeps_target_and_guess() {
    let mut store = store_with(elm_oak(), 1);
    store.dispatch(Action::StartQuiz);
    store.dispatch(Action::Guess("South".to_string()));

    store.dispatch(Action::RunCommand(Command::Escape));
    let quiz = &store.state().quiz;
    assert!(!quiz.visible);
    assert_eq!(quiz.target, Some(1));
    assert_eq!(quiz.correct, Some(true));
}

#[test]
fn empty_dataset_quiz() {
    let mut store = store_with(Dataset::default(), 0);
    store.dispatch(Action::StartQuiz);
    assert!(store.state().quiz.visible);
    assert_eq!(store.state().quiz.target, None);
    assert!(store.state().locations.is_empty());

    store.dispatch(Action::Guess("North".to_string()));
    assert_eq!(store.state().quiz.correct, Some(false));

    type_query(&mut store, "x");
    assert!(!store.state().search.dropdown_visible);
}

#[test]
fn quit_emits_effect() {
    let mut store = store_with(elm_oak(), 0);
    let result = store.dispatch(Action::RunCommand(Command::Quit));
    assert_eq!(result.effects, vec![Effect::Quit]);
    assert!(!result.state_changed);
}

#[test]
fn toggle_focus_blurs_and_refocuses() {
    let mut store = store_with(elm_oak(), 0);
    store.dispatch(Action::InputFocus);
    let result = store.dispatch(Action::RunCommand(Command::ToggleFocus));
    assert!(!store.state().search.input_focused);
    scheduled_token(&result.effects);

    store.dispatch(Action::RunCommand(Command::ToggleFocus));
    assert!(store.state().search.input_focused);
}

#[test]
fn dropdown_guard_holds_across_mixed_sequence() {
    let mut store = store_with(elm_oak(), 1);
    // `None` fires the most recently scheduled hide.
    let steps: Vec<Option<Action>> = vec![
        Some(Action::InputFocus),
        Some(Action::InsertChar('e')),
        Some(Action::InsertChar('l')),
        Some(Action::InsertChar('m')),
        Some(Action::RunCommand(Command::DeleteBackward)),
        Some(Action::RunCommand(Command::CursorHome)),
        Some(Action::RunCommand(Command::DeleteForward)),
        Some(Action::SetQuery("oak".to_string())),
        Some(Action::MoveSelection(1)),
        Some(Action::AcceptSuggestion),
        Some(Action::SetQuery("2".to_string())),
        Some(Action::SelectSuggestion(0)),
        Some(Action::InputFocus),
        Some(Action::SetQuery("e".to_string())),
        Some(Action::InputBlur),
        None,
        Some(Action::InputFocus),
        Some(Action::RunCommand(Command::Escape)),
        Some(Action::StartQuiz),
        Some(Action::Guess("South".to_string())),
        Some(Action::CloseQuiz),
        Some(Action::SetQuery("pine".to_string())),
        Some(Action::RunCommand(Command::ClearQuery)),
        Some(Action::SetQuery("st".to_string())),
        Some(Action::InputBlur),
        Some(Action::SetQuery("ave".to_string())),
        None,
    ];

    let mut last_token = None;
    for step in steps {
        let action = match step {
            Some(action) => action,
            None => Action::DropdownHideElapsed(last_token.take().expect("hide was scheduled")),
        };
        let result = store.dispatch(action);
        for effect in &result.effects {
            if let Effect::ScheduleDropdownHide { token, .. } = effect {
                last_token = Some(*token);
            }
        }
        assert_dropdown_guard(&store);
    }

    let search = &store.state().search;
    assert!(!search.dropdown_visible);
    assert!(search.pending_hide.is_none());
    assert_eq!(search.query, "ave");
}
