use std::time::Duration;

use super::dataset::{Dataset, Record};

pub const DEFAULT_BLUR_HIDE_DELAY: Duration = Duration::from_millis(200);

/// Identifies one deferred dropdown hide. Only the most recent token is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HideToken(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetConfig {
    pub blur_hide_delay: Duration,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            blur_hide_delay: DEFAULT_BLUR_HIDE_DELAY,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    /// Byte offset into `query`, always on a char boundary.
    pub query_cursor: usize,
    /// Dataset indices matching `query`, in dataset order.
    pub results: Vec<usize>,
    /// Highlighted row in `results`.
    pub selected: usize,
    pub input_focused: bool,
    pub dropdown_visible: bool,
    pub pending_hide: Option<HideToken>,
}

impl SearchState {
    pub fn append_query_char(&mut self, ch: char) {
        if self.query_cursor >= self.query.len() {
            self.query.push(ch);
        } else {
            self.query.insert(self.query_cursor, ch);
        }
        self.query_cursor += ch.len_utf8();
    }

    pub fn backspace_query(&mut self) -> bool {
        if self.query_cursor == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.query.remove(prev);
        self.query_cursor = prev;
        true
    }

    pub fn delete_query(&mut self) -> bool {
        if self.query_cursor >= self.query.len() {
            return false;
        }
        self.query.remove(self.query_cursor);
        true
    }

    pub fn cursor_left(&mut self) -> bool {
        if self.query_cursor == 0 {
            return false;
        }
        self.query_cursor = self.prev_boundary();
        true
    }

    pub fn cursor_right(&mut self) -> bool {
        if self.query_cursor >= self.query.len() {
            return false;
        }
        let slice = &self.query[self.query_cursor..];
        let mut iter = slice.char_indices();
        iter.next();
        self.query_cursor = iter
            .next()
            .map(|(i, _)| self.query_cursor + i)
            .unwrap_or(self.query.len());
        true
    }

    pub fn cursor_home(&mut self) -> bool {
        if self.query_cursor == 0 {
            return false;
        }
        self.query_cursor = 0;
        true
    }

    pub fn cursor_end(&mut self) -> bool {
        if self.query_cursor == self.query.len() {
            return false;
        }
        self.query_cursor = self.query.len();
        true
    }

    /// Replace the query and park the caret at its end.
    pub fn replace_query(&mut self, text: &str) {
        self.query.clear();
        self.query.push_str(text);
        self.query_cursor = self.query.len();
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        let len = self.results.len();
        if len == 0 || delta == 0 {
            return false;
        }
        let prev = self.selected;
        let len = len as isize;
        let next = (self.selected as isize + delta).rem_euclid(len);
        self.selected = next as usize;
        self.selected != prev
    }

    /// Whether the suggestion list has anything to draw.
    pub fn dropdown_shown(&self) -> bool {
        self.dropdown_visible && !self.results.is_empty()
    }

    fn prev_boundary(&self) -> usize {
        self.query[..self.query_cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    pub visible: bool,
    /// Dataset index of the record to guess. `None` only for an empty dataset.
    pub target: Option<usize>,
    pub guessed: Option<String>,
    pub correct: Option<bool>,
    /// Highlighted option in the location list.
    pub option_cursor: usize,
}

impl QuizState {
    pub fn clear_guess(&mut self) {
        self.guessed = None;
        self.correct = None;
    }
}

/// Complete state of the location search widget.
#[derive(Debug, Clone)]
pub struct WidgetState {
    pub dataset: Dataset,
    /// Distinct locations in first-seen order; constant for the session.
    pub locations: Vec<String>,
    pub search: SearchState,
    pub quiz: QuizState,
    pub config: WidgetConfig,
    next_hide_token: u64,
}

impl WidgetState {
    pub fn new(dataset: Dataset, config: WidgetConfig) -> Self {
        let locations = dataset.available_locations();
        Self {
            dataset,
            locations,
            search: SearchState::default(),
            quiz: QuizState::default(),
            config,
            next_hide_token: 0,
        }
    }

    /// Recompute results for the current query and apply the dropdown guard.
    pub fn refresh_results(&mut self) {
        self.search.results = self.dataset.filter_indices(&self.search.query);
        self.search.selected = 0;
        self.search.dropdown_visible =
            !self.search.results.is_empty() && !self.search.query.is_empty();
    }

    pub fn results(&self) -> impl Iterator<Item = &Record> + '_ {
        self.search
            .results
            .iter()
            .filter_map(|&i| self.dataset.get(i))
    }

    pub fn result_at(&self, row: usize) -> Option<&Record> {
        self.search
            .results
            .get(row)
            .and_then(|&i| self.dataset.get(i))
    }

    pub fn quiz_target(&self) -> Option<&Record> {
        self.quiz.target.and_then(|i| self.dataset.get(i))
    }

    pub(crate) fn issue_hide_token(&mut self) -> HideToken {
        self.next_hide_token = self.next_hide_token.wrapping_add(1);
        HideToken(self.next_hide_token)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
