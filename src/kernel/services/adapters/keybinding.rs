//! 快捷键：按键 → 命令（支持上下文）

use crate::core::event::Key;
use crate::core::event::KeyCode;
use crate::core::Command;
use crate::kernel::services::ports::KeybindingRule;
use rustc_hash::FxHashMap;

use super::settings::{parse_command, parse_keybinding};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Search,
    Quiz,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "search" | "searchbar" | "search_bar" | "input" => Some(Self::Search),
            "quiz" | "blitz" | "modal" => Some(Self::Quiz),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    search: FxHashMap<Key, Command>,
    quiz: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            search: default_search_keybindings(),
            quiz: default_quiz_keybindings(),
        }
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Search => self.search.get(key).or_else(|| self.global.get(key)),
            KeybindingContext::Quiz => self.quiz.get(key).or_else(|| self.global.get(key)),
        }
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Search => &self.search,
            KeybindingContext::Quiz => &self.quiz,
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    /// Apply user rules on top of the current bindings. A rule with an empty
    /// command removes the binding; unparsable keys are skipped.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) {
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "unrecognized keybinding");
                continue;
            };
            let context = rule
                .context
                .as_deref()
                .and_then(KeybindingContext::parse)
                .unwrap_or(KeybindingContext::Global);
            if rule.command.trim().is_empty() {
                let _ = self.unbind(context, &key);
            } else {
                self.bind(context, key, parse_command(&rule.command));
            }
        }
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Search => &mut self.search,
            KeybindingContext::Quiz => &mut self.quiz,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(8);

    bindings.insert(Key::simple(KeyCode::Esc), Command::Escape);
    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings.insert(Key::ctrl(KeyCode::Char('c')), Command::Quit);
    bindings.insert(Key::ctrl(KeyCode::Char('b')), Command::Blitz);
    bindings.insert(Key::simple(KeyCode::F(2)), Command::Blitz);
    bindings.insert(Key::simple(KeyCode::Tab), Command::ToggleFocus);

    bindings
}

fn default_search_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(12);

    bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorHome);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorEnd);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);
    bindings.insert(Key::ctrl(KeyCode::Char('u')), Command::ClearQuery);
    bindings.insert(Key::simple(KeyCode::Down), Command::SuggestionNext);
    bindings.insert(Key::simple(KeyCode::Up), Command::SuggestionPrev);
    bindings.insert(Key::simple(KeyCode::Enter), Command::AcceptSuggestion);

    bindings
}

fn default_quiz_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(20);

    bindings.insert(Key::simple(KeyCode::Left), Command::OptionPrev);
    bindings.insert(Key::simple(KeyCode::Up), Command::OptionPrev);
    bindings.insert(Key::simple(KeyCode::BackTab), Command::OptionPrev);
    bindings.insert(Key::simple(KeyCode::Right), Command::OptionNext);
    bindings.insert(Key::simple(KeyCode::Down), Command::OptionNext);
    bindings.insert(Key::simple(KeyCode::Tab), Command::OptionNext);
    bindings.insert(Key::simple(KeyCode::Enter), Command::GuessSelected);
    bindings.insert(Key::simple(KeyCode::Char(' ')), Command::GuessSelected);
    bindings.insert(Key::simple(KeyCode::Char('r')), Command::ResetQuiz);
    bindings.insert(Key::ctrl(KeyCode::Char('r')), Command::ResetQuiz);
    bindings.insert(Key::simple(KeyCode::Char('c')), Command::CloseQuiz);
    bindings.insert(Key::ctrl(KeyCode::Char('w')), Command::CloseQuiz);

    for n in 1..=9u8 {
        let ch = char::from(b'0' + n);
        bindings.insert(
            Key::simple(KeyCode::Char(ch)),
            Command::GuessOption(usize::from(n) - 1),
        );
    }

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
