//! Key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, InputMode};

impl App {
    /// Handle a key press. Every key marks the app dirty.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.input_mode.is_search() {
            self.handle_search_key(key);
        } else if self.detail.is_open() {
            self.handle_detail_key(key);
        } else {
            self.handle_list_key(key);
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Left | KeyCode::Char('h') => {
                if self.list.previous_page().is_some() {
                    self.selected = 0;
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.list.next_page().is_some() {
                    self.selected = 0;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.list.items().len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char('/') => {
                let buffer = self.list.query().search_term().unwrap_or_default().to_string();
                self.input_mode = InputMode::Search { buffer };
            }
            KeyCode::Esc => {
                if self.list.query().is_searching() {
                    self.list.clear_search();
                    self.selected = 0;
                }
            }
            KeyCode::Char('r') => {
                self.list.refresh();
            }
            KeyCode::Char('t') => {
                self.preferences.toggle();
            }
            KeyCode::Enter | KeyCode::Char('d') => {
                if let Some(id) = self.selected_item().map(|item| item.id) {
                    self.detail.open(id);
                }
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('d') | KeyCode::Backspace => {
                self.detail.close();
            }
            KeyCode::Char('t') => {
                self.preferences.toggle();
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let InputMode::Search { buffer } = &mut self.input_mode else {
            return;
        };

        match key.code {
            KeyCode::Char(c) => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => {
                let term = std::mem::take(buffer);
                self.input_mode = InputMode::Normal;
                self.list.submit_search(&term);
                self.selected = 0;
            }
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                if self.list.query().is_searching() {
                    self.list.clear_search();
                    self.selected = 0;
                }
            }
            _ => {}
        }
    }
}
