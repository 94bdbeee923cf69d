//! 命令系统：语义命令定义
//!
//! Command 与具体按键无关，按键到命令的映射由 KeybindingService 负责。

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== 搜索框 ====================
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    DeleteBackward,
    DeleteForward,
    ClearQuery,
    SuggestionNext,
    SuggestionPrev,
    AcceptSuggestion,

    // ==================== 猜地点 ====================
    Blitz,
    ResetQuiz,
    CloseQuiz,
    OptionNext,
    OptionPrev,
    GuessSelected,
    GuessOption(usize),

    // ==================== 系统操作 ====================
    ToggleFocus,
    Escape,
    Quit,

    Custom(String),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorHome => "cursorHome",
            Command::CursorEnd => "cursorEnd",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::ClearQuery => "clearQuery",
            Command::SuggestionNext => "suggestionNext",
            Command::SuggestionPrev => "suggestionPrev",
            Command::AcceptSuggestion => "acceptSuggestion",
            Command::Blitz => "blitz",
            Command::ResetQuiz => "resetQuiz",
            Command::CloseQuiz => "closeQuiz",
            Command::OptionNext => "optionNext",
            Command::OptionPrev => "optionPrev",
            Command::GuessSelected => "guessSelected",
            Command::GuessOption(_) => "guessOption",
            Command::ToggleFocus => "toggleFocus",
            Command::Escape => "escape",
            Command::Quit => "quit",
            Command::Custom(name) => name,
        }
    }

    /// Inverse of [`Command::name`]. `guessOption<N>` selects the N-th option
    /// (1-based); unknown names become [`Command::Custom`].
    pub fn from_name(name: &str) -> Command {
        let name = name.trim();
        match name {
            "cursorLeft" => Command::CursorLeft,
            "cursorRight" => Command::CursorRight,
            "cursorHome" => Command::CursorHome,
            "cursorEnd" => Command::CursorEnd,
            "deleteBackward" => Command::DeleteBackward,
            "deleteForward" => Command::DeleteForward,
            "clearQuery" => Command::ClearQuery,
            "suggestionNext" => Command::SuggestionNext,
            "suggestionPrev" => Command::SuggestionPrev,
            "acceptSuggestion" => Command::AcceptSuggestion,
            "blitz" => Command::Blitz,
            "resetQuiz" => Command::ResetQuiz,
            "closeQuiz" => Command::CloseQuiz,
            "optionNext" => Command::OptionNext,
            "optionPrev" => Command::OptionPrev,
            "guessSelected" => Command::GuessSelected,
            "toggleFocus" => Command::ToggleFocus,
            "escape" => Command::Escape,
            "quit" => Command::Quit,
            _ => match name
                .strip_prefix("guessOption")
                .and_then(|n| n.parse::<usize>().ok())
            {
                Some(n) if n > 0 => Command::GuessOption(n - 1),
                _ => Command::Custom(name.to_string()),
            },
        }
    }

    /// Commands that only act while the quiz modal is open.
    pub fn is_quiz_command(&self) -> bool {
        matches!(
            self,
            Command::ResetQuiz
                | Command::CloseQuiz
                | Command::OptionNext
                | Command::OptionPrev
                | Command::GuessSelected
                | Command::GuessOption(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
