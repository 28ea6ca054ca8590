/// What keystrokes currently drive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Single-key commands
    #[default]
    Normal,
    /// Typing a search term; Enter submits, Esc cancels
    Search { buffer: String },
}

impl InputMode {
    pub fn is_search(&self) -> bool {
        matches!(self, InputMode::Search { .. })
    }

    pub fn buffer(&self) -> Option<&str> {
        match self {
            InputMode::Search { buffer } => Some(buffer),
            InputMode::Normal => None,
        }
    }
}
