//! Single-line text buffer with a character cursor.

use crossterm::event::{KeyCode, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditResult {
    /// Text was modified.
    Changed,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Text and cursor of one input. The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Display width of the text left of the cursor.
    ///
    /// With `mask` set, every character is drawn as the mask.
    pub fn cursor_width(&self, mask: Option<char>) -> u16 {
        let width = match mask {
            Some(mask) => {
                let mut buf = [0u8; 4];
                mask.encode_utf8(&mut buf).width() * self.cursor
            }
            None => {
                let byte_pos = char_to_byte_index(&self.text, self.cursor);
                self.text[..byte_pos].width()
            }
        };
        width.min(u16::MAX as usize) as u16
    }

    /// Handle a key press for text editing.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> EditResult {
        let plain = modifiers.is_empty() || modifiers == KeyModifiers::SHIFT;

        match code {
            KeyCode::Char(c) if plain => {
                self.insert_char(c);
                EditResult::Changed
            }
            KeyCode::Backspace => {
                if self.delete_back() {
                    EditResult::Changed
                } else {
                    EditResult::Handled
                }
            }
            KeyCode::Delete => {
                if self.delete_forward() {
                    EditResult::Changed
                } else {
                    EditResult::Handled
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                EditResult::Handled
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                EditResult::Handled
            }
            KeyCode::Home => {
                self.cursor = 0;
                EditResult::Handled
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                EditResult::Handled
            }
            _ => EditResult::Ignored,
        }
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Delete character before cursor. Returns true if text changed.
    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.text, self.cursor - 1);
        self.text.remove(byte_pos);
        self.cursor -= 1;
        true
    }

    /// Delete character at cursor. Returns true if text changed.
    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_pos);
        true
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(input: &mut TextInput, s: &str) {
        for c in s.chars() {
            input.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn test_insert_and_delete_multibyte() {
        let mut input = TextInput::default();
        type_str(&mut input, "Жанна");
        assert_eq!(input.text(), "Жанна");

        input.handle_key(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(
            input.handle_key(KeyCode::Backspace, KeyModifiers::NONE),
            EditResult::Changed
        );
        assert_eq!(input.text(), "Жана");

        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(
            input.handle_key(KeyCode::Backspace, KeyModifiers::NONE),
            EditResult::Handled
        );
        input.handle_key(KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(input.text(), "ана");
    }

    #[test]
    fn test_ctrl_chars_ignored() {
        let mut input = TextInput::default();
        assert_eq!(
            input.handle_key(KeyCode::Char('s'), KeyModifiers::CONTROL),
            EditResult::Ignored
        );
        assert_eq!(
            input.handle_key(KeyCode::Char('A'), KeyModifiers::SHIFT),
            EditResult::Changed
        );
        assert_eq!(input.text(), "A");
    }

    #[test]
    fn test_cursor_width() {
        let mut input = TextInput::default();
        type_str(&mut input, "ab");
        assert_eq!(input.cursor_width(None), 2);
        assert_eq!(input.cursor_width(Some('•')), 2);
        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(input.cursor_width(None), 0);
    }
}
