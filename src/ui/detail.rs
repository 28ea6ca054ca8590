//! Single-item detail screen.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::Palette;
use crate::list::{DetailState, ItemDetail};

pub fn render_detail(frame: &mut Frame, area: Rect, state: &DetailState, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border())
        .title(Span::styled(" post ", palette.title()));

    let lines = match state {
        DetailState::Closed => return,
        DetailState::Loading { item_id } => {
            vec![Line::from(Span::styled(
                format!("loading post {}…", item_id),
                palette.dim(),
            ))]
        }
        DetailState::Errored { message, .. } => {
            vec![Line::from(Span::styled(message.as_str(), palette.error()))]
        }
        DetailState::Loaded(detail) => detail_lines(detail, palette),
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn detail_lines<'a>(detail: &'a ItemDetail, palette: &Palette) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(Span::styled(detail.item.title.as_str(), palette.title()))];

    let author = match &detail.owner {
        Some(owner) => format!("by {} (@{})", owner.name, owner.username),
        None => format!("by user {}", detail.item.owner_id),
    };
    lines.push(Line::from(Span::styled(author, palette.dim())));
    lines.push(Line::default());

    lines.extend(detail.item.body.lines().map(Line::from));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        format!("comments ({})", detail.comments.len()),
        palette.title(),
    )));
    for comment in &detail.comments {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(comment.name.as_str(), palette.base()),
            Span::styled(format!("  <{}>", comment.email), palette.dim()),
        ]));
        lines.extend(comment.body.lines().map(Line::from));
    }

    lines
}
