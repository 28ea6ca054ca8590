//! Colour palettes for the two display themes.

use ratatui::style::{Color, Modifier, Style};

use crate::preference::Theme;

/// Colours used by every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
    pub selection_bg: Color,
}

/// Dark theme - light text on near-black
pub const DARK: Palette = Palette {
    background: Color::Rgb(18, 18, 24),
    text: Color::Gray,
    dim: Color::DarkGray,
    accent: Color::LightCyan,
    border: Color::DarkGray,
    error: Color::LightRed,
    selection_bg: Color::Rgb(40, 44, 60),
};

/// Light theme - dark text on white
pub const LIGHT: Palette = Palette {
    background: Color::Rgb(250, 250, 250),
    text: Color::Rgb(30, 30, 30),
    dim: Color::Rgb(120, 120, 120),
    accent: Color::Rgb(0, 102, 204),
    border: Color::Rgb(190, 190, 190),
    error: Color::Rgb(200, 0, 0),
    selection_bg: Color::Rgb(220, 230, 245),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }
}
