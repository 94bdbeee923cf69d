//! UI 主题：把可配置的颜色集中管理，避免散落在渲染代码里。

use crate::kernel::services::ports::ThemeSettings;
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct UiTheme {
    pub focus_border: Color,
    pub inactive_border: Color,
    pub accent_fg: Color,
    pub header_fg: Color,
    pub button_bg: Color,
    pub button_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub muted_fg: Color,
    pub correct_fg: Color,
    pub incorrect_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            focus_border: Color::Indexed(12),   // LightBlue
            inactive_border: Color::Indexed(8), // DarkGray
            accent_fg: Color::Indexed(3),       // Yellow (amber)
            header_fg: Color::Indexed(15),
            button_bg: Color::Indexed(4), // Blue
            button_fg: Color::Indexed(15),
            selected_bg: Color::Indexed(8),
            selected_fg: Color::Indexed(15),
            muted_fg: Color::Indexed(8),
            correct_fg: Color::Indexed(10),   // LightGreen (lime)
            incorrect_fg: Color::Indexed(9), // LightRed
        }
    }
}

impl UiTheme {
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        apply(&mut self.focus_border, &settings.focus_border);
        apply(&mut self.inactive_border, &settings.inactive_border);
        apply(&mut self.accent_fg, &settings.accent_fg);
        apply(&mut self.header_fg, &settings.header_fg);
        apply(&mut self.button_bg, &settings.button_bg);
        apply(&mut self.button_fg, &settings.button_fg);
        apply(&mut self.selected_bg, &settings.selected_bg);
        apply(&mut self.selected_fg, &settings.selected_fg);
        apply(&mut self.muted_fg, &settings.muted_fg);
        apply(&mut self.correct_fg, &settings.correct_fg);
        apply(&mut self.incorrect_fg, &settings.incorrect_fg);
    }
}

fn apply(slot: &mut Color, value: &Option<String>) {
    if let Some(c) = value.as_deref().and_then(parse_color) {
        *slot = c;
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let v = v.to_ascii_lowercase();
    let c = match v.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "white" => Color::Indexed(15),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
