use super::util::{centered_rect, inner};
use super::{
    HitRegions, Workbench, BLITZ_BUTTON_WIDTH, BLITZ_LABEL, CORRECT_MESSAGE,
    EMPTY_DATASET_MESSAGE, HEADER_HEIGHT, INCORRECT_MESSAGE, INPUT_HEIGHT, MODAL_MAX_WIDTH,
    OPTIONS_LABEL, PLACEHOLDER, QUIZ_TITLE, STATUS_HEIGHT,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SEARCH_HINT: &str = "Tab focus  Up/Down select  Enter pick  Ctrl+B blitz  Ctrl+Q quit";
const QUIZ_HINT: &str = "1-9 or Left/Right+Enter guess  r reset  c/Esc close";

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.regions = HitRegions::default();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    let search_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(BLITZ_BUTTON_WIDTH)])
        .split(chunks[1]);

    render_header(workbench, frame, chunks[0]);
    render_input(workbench, frame, search_row[0]);
    render_blitz_button(workbench, frame, search_row[1]);
    render_status(workbench, frame, chunks[3]);
    render_dropdown(workbench, frame, search_row[0], chunks[2]);

    if workbench.store.state().quiz.visible {
        render_quiz(workbench, frame, area);
    }
}

pub(super) fn cursor_position(workbench: &Workbench) -> Option<(u16, u16)> {
    let state = workbench.store.state();
    if state.quiz.visible || !state.search.input_focused {
        return None;
    }
    let input = inner(workbench.regions.input?);
    if input.width == 0 || input.height == 0 {
        return None;
    }
    let (scroll, cursor_w) = input_scroll(&state.search.query, state.search.query_cursor, input);
    let x = input.x + (cursor_w - scroll).min(input.width as usize - 1) as u16;
    Some((x, input.y))
}

/// Horizontal scroll and caret column (display width) for the query.
fn input_scroll(query: &str, cursor: usize, input: Rect) -> (usize, usize) {
    let cursor_w = query[..cursor.min(query.len())].width();
    let scroll = cursor_w.saturating_sub((input.width as usize).saturating_sub(1));
    (scroll, cursor_w)
}

fn render_header(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let count = workbench.store.state().dataset.len();
    let line = Line::from(vec![
        Span::styled(
            " blitz",
            Style::default()
                .fg(workbench.theme.header_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {count} addresses"),
            Style::default().fg(workbench.theme.muted_fg),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_input(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.regions.input = Some(area);
    let state = workbench.store.state();
    let theme = &workbench.theme;

    let border = if state.search.input_focused {
        theme.focus_border
    } else {
        theme.inactive_border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    if state.search.query.is_empty() {
        let placeholder = Span::styled(PLACEHOLDER, Style::default().fg(theme.muted_fg));
        frame.render_widget(Paragraph::new(Line::from(placeholder)), inner_area);
        return;
    }

    let (scroll, _) = input_scroll(&state.search.query, state.search.query_cursor, inner_area);
    let scroll = scroll.min(u16::MAX as usize) as u16;
    let text = Paragraph::new(state.search.query.as_str()).scroll((0, scroll));
    frame.render_widget(text, inner_area);
}

fn render_blitz_button(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.regions.blitz_button = Some(area);
    let theme = &workbench.theme;
    let style = Style::default()
        .bg(theme.button_bg)
        .fg(theme.button_fg)
        .add_modifier(Modifier::BOLD);
    let button = Paragraph::new(BLITZ_LABEL)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}

fn render_status(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let hint = if workbench.store.state().quiz.visible {
        QUIZ_HINT
    } else {
        SEARCH_HINT
    };
    let line = Line::from(Span::styled(
        format!(" {hint}"),
        Style::default().fg(workbench.theme.muted_fg),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_dropdown(workbench: &mut Workbench, frame: &mut Frame, anchor: Rect, body: Rect) {
    let state = workbench.store.state();
    if !state.search.dropdown_shown() {
        return;
    }

    let max_rows = body.height.saturating_sub(2) as usize;
    if max_rows == 0 || anchor.width < 3 {
        return;
    }
    let rows = state.search.results.len().min(max_rows);
    let list_area = Rect::new(anchor.x, body.y, anchor.width, rows as u16 + 2);

    frame.render_widget(Clear, list_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(workbench.theme.inactive_border));
    let list_inner = block.inner(list_area);
    frame.render_widget(block, list_area);

    let selected = state.search.selected;
    let offset = if selected >= rows { selected + 1 - rows } else { 0 };
    let width = list_inner.width as usize;

    let mut regions = Vec::with_capacity(rows);
    for i in 0..rows {
        let row = offset + i;
        let Some(record) = state.result_at(row) else {
            break;
        };
        let row_area = Rect::new(list_inner.x, list_inner.y + i as u16, list_inner.width, 1);
        regions.push((row, row_area));

        let location = truncate_to_width(&record.location, width);
        let location_w = location.width();
        let address_room = width.saturating_sub(location_w + 1);
        let address = truncate_to_width(&record.address, address_room);
        let gap = width.saturating_sub(address.width() + location_w);

        let mut row_style = Style::default();
        if row == selected {
            row_style = row_style
                .bg(workbench.theme.selected_bg)
                .fg(workbench.theme.selected_fg);
        }
        let line = Line::from(vec![
            Span::raw(address),
            Span::raw(" ".repeat(gap)),
            Span::styled(
                location,
                Style::default()
                    .fg(workbench.theme.accent_fg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).style(row_style), row_area);
    }

    workbench.regions.suggestions = regions;
}

/// Button placement for the option list: (line, x offset, width) per option.
fn flow_buttons(labels: &[String], width: u16) -> Vec<(u16, u16, u16)> {
    let mut out = Vec::with_capacity(labels.len());
    let (mut line, mut x) = (0u16, 0u16);
    for label in labels {
        let w = (button_text(label).width().min(u16::MAX as usize) as u16).min(width.max(1));
        if x > 0 && x.saturating_add(w) > width {
            line += 1;
            x = 0;
        }
        out.push((line, x, w));
        x = x.saturating_add(w).saturating_add(1);
    }
    out
}

fn button_text(label: &str) -> String {
    format!("[ {label} ]")
}

fn render_quiz(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    frame
        .buffer_mut()
        .set_style(area, Style::default().add_modifier(Modifier::DIM));

    let state = workbench.store.state();
    let theme = &workbench.theme;

    let width = MODAL_MAX_WIDTH.min(area.width.saturating_sub(4)).max(area.width.min(20));
    let content_width = width.saturating_sub(4);
    let placements = flow_buttons(&state.locations, content_width);
    let option_lines = placements.last().map(|(line, _, _)| line + 1).unwrap_or(1);
    // title, reset, blank, address, blank, options label, options.., blank, verdict, close
    let content_height = option_lines + 9;
    let modal = centered_rect(area, width, content_height + 2);
    workbench.regions.modal = Some(modal);

    frame.render_widget(Clear, modal);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.focus_border));
    let modal_inner = block.inner(modal);
    frame.render_widget(block, modal);

    let content = Rect::new(
        modal_inner.x.saturating_add(1),
        modal_inner.y,
        modal_inner.width.saturating_sub(2),
        modal_inner.height,
    );
    let line_at = |line: u16| -> Option<Rect> {
        (line < content.height).then(|| Rect::new(content.x, content.y + line, content.width, 1))
    };

    let button_style = Style::default()
        .bg(theme.button_bg)
        .fg(theme.button_fg)
        .add_modifier(Modifier::BOLD);
    let bold = Style::default().add_modifier(Modifier::BOLD);

    if let Some(r) = line_at(0) {
        frame.render_widget(Paragraph::new(Span::styled(QUIZ_TITLE, bold)), r);
    }

    if let Some(r) = line_at(1) {
        let text = button_text("Reset");
        let button = Rect::new(r.x, r.y, (text.width() as u16).min(r.width), 1);
        frame.render_widget(Paragraph::new(Span::styled(text, button_style)), button);
        workbench.regions.reset_button = Some(button);
    }

    if let Some(r) = line_at(3) {
        let address = match state.quiz_target() {
            Some(record) => Span::styled(record.address.clone(), bold.fg(theme.header_fg)),
            None => Span::styled(EMPTY_DATASET_MESSAGE, Style::default().fg(theme.muted_fg)),
        };
        frame.render_widget(Paragraph::new(address), r);
    }

    if let Some(r) = line_at(5) {
        frame.render_widget(Paragraph::new(Span::styled(OPTIONS_LABEL, bold)), r);
    }

    let mut option_regions = Vec::with_capacity(placements.len());
    for (index, (line, x, w)) in placements.iter().copied().enumerate() {
        let Some(r) = line_at(6 + line) else {
            break;
        };
        let location = &state.locations[index];
        let button = Rect::new(r.x + x.min(r.width), r.y, w.min(r.width.saturating_sub(x)), 1);

        let mut style = Style::default().fg(theme.selected_fg);
        if state.quiz.guessed.as_deref() == Some(location.as_str()) {
            style = button_style;
        }
        if index == state.quiz.option_cursor {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }
        let label = Span::styled(button_text(location), style);
        frame.render_widget(Paragraph::new(label), button);
        option_regions.push(button);
    }
    workbench.regions.options = option_regions;

    if let Some(r) = line_at(7 + option_lines) {
        let verdict = match state.quiz.correct {
            Some(true) => Some(Span::styled(CORRECT_MESSAGE, bold.fg(theme.correct_fg))),
            Some(false) => Some(Span::styled(INCORRECT_MESSAGE, bold.fg(theme.incorrect_fg))),
            None => None,
        };
        if let Some(verdict) = verdict {
            frame.render_widget(Paragraph::new(verdict), r);
        }
    }

    if let Some(r) = line_at(8 + option_lines) {
        let text = button_text("Close");
        let button = Rect::new(r.x, r.y, (text.width() as u16).min(r.width), 1);
        frame.render_widget(Paragraph::new(Span::styled(text, button_style)), button);
        workbench.regions.close_button = Some(button);
    }
}

fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}
