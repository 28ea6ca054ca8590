//! UI rendering for postdeck.
//!
//! Everything here is a pure function of [`App`]: the renderers read the list
//! result, query, detail state and theme, and never change them.
//!
//! Layout, top to bottom:
//! - header (name + current theme)
//! - search bar
//! - item list, or the detail screen when one is open
//! - status line (page / search, loading, error)
//! - key hints

mod detail;
mod helpers;
mod list;
mod status;
mod theme;

pub use helpers::truncate_to_width;
pub use status::position_text;
pub use theme::{Palette, DARK, LIGHT};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme());
    let area = frame.area();

    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Search bar
            Constraint::Min(3),    // List or detail
            Constraint::Length(1), // Status
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_header(frame, chunks[0], app, &palette);
    status::render_search_bar(frame, chunks[1], app, &palette);
    if app.detail.is_open() {
        detail::render_detail(frame, chunks[2], app.detail.state(), &palette);
    } else {
        list::render_list(frame, chunks[2], app, &palette);
    }
    status::render_status_line(frame, chunks[3], app, &palette);
    status::render_key_hints(frame, chunks[4], app, &palette);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let theme = app.theme().as_str();
    let name = "postdeck";
    let gap = (area.width as usize).saturating_sub(name.len() + theme.len());

    let line = Line::from(vec![
        Span::styled(name, palette.title()),
        Span::raw(" ".repeat(gap)),
        Span::styled(theme, palette.dim()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
