//! Search bar, status line and key hints.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Palette;
use crate::app::{App, InputMode};
use crate::list::{FetchStatus, ListMode};

/// Where the list is: the page number, or the active search and its hit count.
pub fn position_text(app: &App) -> String {
    let query = app.list.query();
    match &query.mode {
        ListMode::Paginated => format!("page {}", query.page),
        ListMode::Search { term } => {
            let count = app.list.items().len();
            let noun = if count == 1 { "result" } else { "results" };
            format!("search \"{}\" · {} {}", term, count, noun)
        }
    }
}

pub fn render_search_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let line = match &app.input_mode {
        InputMode::Search { buffer } => Line::from(vec![
            Span::styled("/ ", palette.title()),
            Span::raw(buffer.as_str()),
            Span::styled("▏", palette.title()),
        ]),
        InputMode::Normal => match app.list.query().search_term() {
            Some(term) => Line::from(vec![
                Span::styled("search: ", palette.dim()),
                Span::raw(term),
                Span::styled("  (esc to clear)", palette.dim()),
            ]),
            None => Line::from(Span::styled("press / to search", palette.dim())),
        },
    };

    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_status_line(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut spans = vec![Span::styled(position_text(app), palette.title())];

    let result = app.list.result();
    match result.status {
        FetchStatus::Idle => {}
        FetchStatus::Loading => {
            spans.push(Span::styled("  loading…", palette.dim()));
        }
        FetchStatus::Loaded => {
            if app.list.is_short_page() {
                spans.push(Span::styled("  end of list", palette.dim()));
            }
        }
        FetchStatus::Errored => {
            let message = result.error_message.as_deref().unwrap_or_default();
            spans.push(Span::styled(format!("  {}", message), palette.error()));
            spans.push(Span::styled("  (r to retry)", palette.dim()));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_key_hints(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let hints = if app.input_mode.is_search() {
        "enter search · esc cancel"
    } else if app.detail.is_open() {
        "esc back · t theme"
    } else if app.list.query().is_searching() {
        "↑↓ select · d details · / edit search · esc clear · r refresh · t theme · q quit"
    } else {
        "←→ page · ↑↓ select · d details · / search · r refresh · t theme · q quit"
    };

    frame.render_widget(Paragraph::new(Span::styled(hints, palette.dim())), area);
}
