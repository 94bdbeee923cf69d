use crate::core::Command;

use super::state::HideToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    RunCommand(Command),
    SetQuery(String),
    InsertChar(char),
    InputFocus,
    InputBlur,
    DropdownHideElapsed(HideToken),
    MoveSelection(isize),
    /// Pick the suggestion at this row of the result list.
    SelectSuggestion(usize),
    AcceptSuggestion,
    StartQuiz,
    Guess(String),
    /// Guess the location at this index of the option list.
    GuessOption(usize),
    GuessSelected,
    MoveOption(isize),
    CloseQuiz,
}
