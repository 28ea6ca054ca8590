//! The item list.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::helpers::{first_line, truncate_to_width};
use super::theme::Palette;
use crate::app::App;
use crate::list::FetchStatus;

/// Lines per item (title + body preview)
const LINES_PER_ITEM: usize = 2;

pub fn render_list(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default().borders(Borders::TOP).border_style(palette.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items = app.list.items();
    if items.is_empty() {
        let text = match app.list.status() {
            FetchStatus::Idle | FetchStatus::Loading => String::new(),
            FetchStatus::Errored => app
                .list
                .result()
                .error
                .as_ref()
                .map(|e| e.user_message())
                .unwrap_or_default(),
            FetchStatus::Loaded if app.list.query().is_searching() => "no posts match".to_string(),
            FetchStatus::Loaded => "no posts on this page".to_string(),
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, palette.dim())).wrap(Wrap { trim: true }),
            inner,
        );
        return;
    }

    let width = inner.width.saturating_sub(2) as usize;
    let visible = (inner.height as usize / LINES_PER_ITEM).max(1);
    // Keep the selection on screen
    let offset = app.selected.saturating_sub(visible - 1);

    let rows: Vec<ListItem> = items
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(index, item)| {
            let selected = index == app.selected;
            let marker = if selected { "▸ " } else { "  " };
            let title_style = if selected { palette.selected() } else { palette.base() };

            let title = format!("{:>4}  {}", item.id, item.title);
            let preview = format!("      {}", first_line(&item.body));
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, palette.title()),
                    Span::styled(truncate_to_width(&title, width), title_style),
                ]),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(truncate_to_width(&preview, width), palette.dim()),
                ]),
            ])
        })
        .collect();

    frame.render_widget(List::new(rows), inner);
}
