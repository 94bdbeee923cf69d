use crate::core::Command;

use super::random::{IndexSource, ThreadRngIndex};
use super::state::{HideToken, WidgetState};
use super::{Action, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: WidgetState,
    index_source: Box<dyn IndexSource>,
}

impl Store {
    pub fn new(state: WidgetState) -> Self {
        Self::with_index_source(state, Box::new(ThreadRngIndex))
    }

    pub fn with_index_source(state: WidgetState, index_source: Box<dyn IndexSource>) -> Self {
        Self {
            state,
            index_source,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::SetQuery(text) => {
                self.state.search.replace_query(&text);
                self.query_changed()
            }
            Action::InsertChar(ch) => {
                self.state.search.append_query_char(ch);
                self.query_changed()
            }
            Action::InputFocus => {
                let search = &mut self.state.search;
                let prev = (search.input_focused, search.dropdown_visible);
                search.input_focused = true;
                search.dropdown_visible = !search.query.is_empty();
                let effects = self.cancel_pending_hide();
                let search = &self.state.search;
                DispatchResult {
                    state_changed: prev != (search.input_focused, search.dropdown_visible),
                    effects,
                }
            }
            Action::InputBlur => {
                let mut effects = self.cancel_pending_hide();
                let token = self.state.issue_hide_token();
                let search = &mut self.state.search;
                let was_focused = search.input_focused;
                search.input_focused = false;
                search.pending_hide = Some(token);
                effects.push(Effect::ScheduleDropdownHide {
                    token,
                    after: self.state.config.blur_hide_delay,
                });
                DispatchResult {
                    effects,
                    state_changed: was_focused,
                }
            }
            Action::DropdownHideElapsed(token) => self.hide_elapsed(token),
            Action::MoveSelection(delta) => {
                if !self.state.search.dropdown_shown() {
                    return DispatchResult::unchanged();
                }
                DispatchResult::changed(self.state.search.move_selection(delta))
            }
            Action::SelectSuggestion(row) => self.select_suggestion(row),
            Action::AcceptSuggestion => {
                if !self.state.search.dropdown_shown() {
                    return DispatchResult::unchanged();
                }
                let row = self.state.search.selected;
                self.select_suggestion(row)
            }
            Action::StartQuiz => self.start_quiz(),
            Action::Guess(location) => self.guess(location),
            Action::GuessOption(index) => match self.state.locations.get(index).cloned() {
                Some(location) => {
                    self.state.quiz.option_cursor = index;
                    self.guess(location)
                }
                None => DispatchResult::unchanged(),
            },
            Action::GuessSelected => {
                let index = self.state.quiz.option_cursor;
                self.dispatch(Action::GuessOption(index))
            }
            Action::MoveOption(delta) => {
                let len = self.state.locations.len();
                if len == 0 || delta == 0 {
                    return DispatchResult::unchanged();
                }
                let prev = self.state.quiz.option_cursor;
                let next = (prev as isize + delta).rem_euclid(len as isize) as usize;
                self.state.quiz.option_cursor = next;
                DispatchResult::changed(next != prev)
            }
            Action::CloseQuiz => {
                let was_visible = self.state.quiz.visible;
                self.state.quiz.visible = false;
                DispatchResult::changed(was_visible)
            }
        }
    }

    fn dispatch_command(&mut self, cmd: Command) -> DispatchResult {
        if cmd.is_quiz_command() && !self.state.quiz.visible {
            return DispatchResult::unchanged();
        }

        match cmd {
            Command::CursorLeft => DispatchResult::changed(self.state.search.cursor_left()),
            Command::CursorRight => DispatchResult::changed(self.state.search.cursor_right()),
            Command::CursorHome => DispatchResult::changed(self.state.search.cursor_home()),
            Command::CursorEnd => DispatchResult::changed(self.state.search.cursor_end()),
            Command::DeleteBackward => {
                if !self.state.search.backspace_query() {
                    return DispatchResult::unchanged();
                }
                self.query_changed()
            }
            Command::DeleteForward => {
                if !self.state.search.delete_query() {
                    return DispatchResult::unchanged();
                }
                self.query_changed()
            }
            Command::ClearQuery => {
                if self.state.search.query.is_empty() {
                    return DispatchResult::unchanged();
                }
                self.dispatch(Action::SetQuery(String::new()))
            }
            Command::SuggestionNext => self.dispatch(Action::MoveSelection(1)),
            Command::SuggestionPrev => self.dispatch(Action::MoveSelection(-1)),
            Command::AcceptSuggestion => self.dispatch(Action::AcceptSuggestion),
            Command::Blitz => self.dispatch(Action::StartQuiz),
            Command::ResetQuiz => self.dispatch(Action::StartQuiz),
            Command::CloseQuiz => self.dispatch(Action::CloseQuiz),
            Command::OptionNext => self.dispatch(Action::MoveOption(1)),
            Command::OptionPrev => self.dispatch(Action::MoveOption(-1)),
            Command::GuessSelected => self.dispatch(Action::GuessSelected),
            Command::GuessOption(index) => self.dispatch(Action::GuessOption(index)),
            Command::ToggleFocus => {
                if self.state.search.input_focused {
                    self.dispatch(Action::InputBlur)
                } else {
                    self.dispatch(Action::InputFocus)
                }
            }
            Command::Escape => self.escape(),
            Command::Quit => DispatchResult {
                effects: vec![Effect::Quit],
                state_changed: false,
            },
            Command::Custom(name) => {
                tracing::debug!(command = %name, "unhandled custom command");
                DispatchResult::unchanged()
            }
        }
    }

    fn query_changed(&mut self) -> DispatchResult {
        self.state.refresh_results();
        DispatchResult::changed(true)
    }

    fn cancel_pending_hide(&mut self) -> Vec<Effect> {
        match self.state.search.pending_hide.take() {
            Some(token) => vec![Effect::CancelDropdownHide { token }],
            None => Vec::new(),
        }
    }

    fn hide_elapsed(&mut self, token: HideToken) -> DispatchResult {
        let search = &mut self.state.search;
        if search.pending_hide != Some(token) {
            return DispatchResult::unchanged();
        }
        search.pending_hide = None;
        let was_visible = search.dropdown_visible;
        search.dropdown_visible = false;
        DispatchResult::changed(was_visible)
    }

    fn select_suggestion(&mut self, row: usize) -> DispatchResult {
        let Some(address) = self.state.result_at(row).map(|r| r.address.clone()) else {
            return DispatchResult::unchanged();
        };

        self.state.search.replace_query(&address);
        self.state.refresh_results();
        self.state.search.dropdown_visible = false;
        let effects = self.cancel_pending_hide();
        tracing::debug!(%address, "suggestion selected");

        DispatchResult {
            effects,
            state_changed: true,
        }
    }

    fn start_quiz(&mut self) -> DispatchResult {
        let len = self.state.dataset.len();
        let target = if len == 0 {
            None
        } else {
            Some(self.index_source.next_index(len).min(len - 1))
        };

        let quiz = &mut self.state.quiz;
        quiz.target = target;
        quiz.clear_guess();
        quiz.option_cursor = 0;
        quiz.visible = true;

        match self.state.quiz_target() {
            Some(record) => tracing::info!(address = %record.address, "quiz started"),
            None => tracing::warn!("quiz started with an empty dataset"),
        }

        DispatchResult::changed(true)
    }

    fn guess(&mut self, location: String) -> DispatchResult {
        let correct = self
            .state
            .quiz_target()
            .is_some_and(|record| record.location == location);
        tracing::info!(%location, correct, "guess");

        let quiz = &mut self.state.quiz;
        let prev = (quiz.guessed.clone(), quiz.correct);
        quiz.guessed = Some(location);
        quiz.correct = Some(correct);

        DispatchResult::changed(prev != (quiz.guessed.clone(), quiz.correct))
    }

    fn escape(&mut self) -> DispatchResult {
        if self.state.quiz.visible {
            return self.dispatch(Action::CloseQuiz);
        }

        if self.state.search.dropdown_visible {
            self.state.search.dropdown_visible = false;
            let effects = self.cancel_pending_hide();
            return DispatchResult {
                effects,
                state_changed: true,
            };
        }

        self.dispatch_command(Command::ClearQuery)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
