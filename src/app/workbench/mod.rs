//! 工作台：持有 Store，负责输入分发、延迟隐藏计时器与渲染

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::kernel::services::adapters::KeybindingService;
use crate::kernel::services::ports::Settings;
use crate::kernel::{Action, Dataset, Effect, HideToken, Store, WidgetState};
use crate::tui::view::{EventResult, View};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::time::Instant;

mod input;
mod render;
mod tick;
mod util;

const HEADER_HEIGHT: u16 = 1;
const INPUT_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;
const BLITZ_BUTTON_WIDTH: u16 = 11;
const MODAL_MAX_WIDTH: u16 = 64;

pub const PLACEHOLDER: &str = "Search";
pub const BLITZ_LABEL: &str = "Blitz";
pub const QUIZ_TITLE: &str = "Guess the Location for:";
pub const OPTIONS_LABEL: &str = "Options:";
pub const EMPTY_DATASET_MESSAGE: &str = "No addresses loaded";
pub const CORRECT_MESSAGE: &str = "TACNO!";
pub const INCORRECT_MESSAGE: &str = "NETACNO!";

/// Screen regions from the last render, used to route mouse clicks.
#[derive(Debug, Default, Clone)]
pub(crate) struct HitRegions {
    pub input: Option<Rect>,
    pub blitz_button: Option<Rect>,
    /// (row in the result list, rect)
    pub suggestions: Vec<(usize, Rect)>,
    pub modal: Option<Rect>,
    pub reset_button: Option<Rect>,
    /// Indexed like the location list.
    pub options: Vec<Rect>,
    pub close_button: Option<Rect>,
}

pub struct Workbench {
    store: Store,
    keybindings: KeybindingService,
    theme: UiTheme,
    hide_timers: Vec<(HideToken, Instant)>,
    regions: HitRegions,
    should_quit: bool,
}

impl Workbench {
    pub fn new(store: Store, keybindings: KeybindingService, theme: UiTheme) -> Self {
        let mut workbench = Self {
            store,
            keybindings,
            theme,
            hide_timers: Vec::new(),
            regions: HitRegions::default(),
            should_quit: false,
        };
        // The search box starts focused so typing works right away.
        let _ = workbench.dispatch_kernel(Action::InputFocus);
        workbench
    }

    pub fn from_settings(dataset: Dataset, settings: &Settings) -> Self {
        let mut keybindings = KeybindingService::new();
        keybindings.apply_rules(&settings.keybindings);
        let mut theme = UiTheme::default();
        theme.apply_settings(&settings.theme);

        let state = WidgetState::new(dataset, settings.widget_config());
        Self::new(Store::new(state), keybindings, theme)
    }

    pub fn state(&self) -> &WidgetState {
        self.store.state()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Dispatch to the store and run the resulting effects.
    pub fn dispatch_kernel(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ScheduleDropdownHide { token, after } => {
                self.hide_timers.push((token, Instant::now() + after));
            }
            Effect::CancelDropdownHide { token } => {
                self.hide_timers.retain(|(t, _)| *t != token);
            }
            Effect::Quit => {
                self.should_quit = true;
            }
        }
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        render::cursor_position(self)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
