//! Editor surface: a rope-backed text region bound to the current file.
//!
//! The gutter and the text area render from the same `line_offset`, so their
//! scroll positions cannot diverge.

use ropey::Rope;
use unicode_width::UnicodeWidthChar;

pub const TAB_TEXT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    InsertChar(char),
    InsertText(String),
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
    PageUp,
    PageDown,
    Scroll { delta: isize },
    SetViewport { width: u16, height: u16 },
}

impl EditorAction {
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            EditorAction::InsertChar(_)
                | EditorAction::InsertText(_)
                | EditorAction::InsertNewline
                | EditorAction::InsertTab
                | EditorAction::DeleteBackward
                | EditorAction::DeleteForward
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorViewport {
    pub line_offset: usize,
    pub horiz_offset: u32,
    pub width: u16,
    pub height: u16,
}

impl Default for EditorViewport {
    fn default() -> Self {
        Self {
            line_offset: 0,
            horiz_offset: 0,
            width: 80,
            height: 20,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditorState {
    rope: Rope,
    cursor: (usize, usize),
    viewport: EditorViewport,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the buffer and puts the cursor at the top.
    pub fn load(&mut self, content: &str) {
        self.rope = Rope::from_str(content);
        self.cursor = (0, 0);
        self.viewport.line_offset = 0;
        self.viewport.horiz_offset = 0;
    }

    pub fn clear(&mut self) {
        self.load("");
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn viewport(&self) -> EditorViewport {
        self.viewport
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// One entry per newline-delimited segment, 1-based.
    pub fn line_numbers(&self) -> impl Iterator<Item = usize> {
        1..=self.rope.len_lines()
    }

    /// Line text without its trailing `\n` or `\r\n`.
    pub fn line_text(&self, row: usize) -> Option<String> {
        if row >= self.rope.len_lines() {
            return None;
        }
        let mut line = self.rope.line(row).to_string();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Some(line)
    }

    pub fn visible_rows(&self) -> std::ops::Range<usize> {
        let start = self.viewport.line_offset.min(self.rope.len_lines());
        let end = start
            .saturating_add(self.viewport.height as usize)
            .min(self.rope.len_lines());
        start..end
    }

    /// Cursor column in terminal cells, before horizontal scrolling.
    pub fn cursor_display_x(&self) -> u32 {
        let (row, col) = self.cursor;
        let Some(line) = self.line_text(row) else {
            return 0;
        };
        line.chars()
            .take(col)
            .map(|ch| ch.width().unwrap_or(0) as u32)
            .sum()
    }

    /// Applies the action and reports whether the buffer text changed.
    pub fn apply(&mut self, action: EditorAction) -> bool {
        let edited = match action {
            EditorAction::InsertChar(ch) => {
                let mut buf = [0u8; 4];
                self.insert_str(ch.encode_utf8(&mut buf));
                true
            }
            EditorAction::InsertText(text) => {
                if text.is_empty() {
                    false
                } else {
                    self.insert_str(&text);
                    true
                }
            }
            EditorAction::InsertNewline => {
                self.insert_str("\n");
                true
            }
            EditorAction::InsertTab => {
                self.insert_str(TAB_TEXT);
                true
            }
            EditorAction::DeleteBackward => self.delete_backward(),
            EditorAction::DeleteForward => self.delete_forward(),
            EditorAction::CursorLeft => {
                self.move_left();
                false
            }
            EditorAction::CursorRight => {
                self.move_right();
                false
            }
            EditorAction::CursorUp => {
                self.move_vertical(-1);
                false
            }
            EditorAction::CursorDown => {
                self.move_vertical(1);
                false
            }
            EditorAction::CursorLineStart => {
                self.cursor.1 = 0;
                false
            }
            EditorAction::CursorLineEnd => {
                self.cursor.1 = self.line_len(self.cursor.0);
                false
            }
            EditorAction::PageUp => {
                self.move_vertical(-(self.page_size() as isize));
                false
            }
            EditorAction::PageDown => {
                self.move_vertical(self.page_size() as isize);
                false
            }
            EditorAction::Scroll { delta } => {
                let max_offset = self.max_line_offset();
                let next = if delta < 0 {
                    self.viewport.line_offset.saturating_sub(delta.unsigned_abs())
                } else {
                    self.viewport.line_offset.saturating_add(delta as usize)
                };
                self.viewport.line_offset = next.min(max_offset);
                return false;
            }
            EditorAction::SetViewport { width, height } => {
                self.viewport.width = width;
                self.viewport.height = height;
                false
            }
        };

        self.follow_cursor();
        edited
    }

    fn page_size(&self) -> usize {
        (self.viewport.height as usize).saturating_sub(1).max(1)
    }

    fn max_line_offset(&self) -> usize {
        self.rope
            .len_lines()
            .saturating_sub(self.viewport.height.max(1) as usize)
    }

    fn line_len(&self, row: usize) -> usize {
        self.line_text(row).map(|l| l.chars().count()).unwrap_or(0)
    }

    fn cursor_char_index(&self) -> usize {
        let (row, col) = self.cursor;
        let row = row.min(self.rope.len_lines().saturating_sub(1));
        self.rope.line_to_char(row) + col.min(self.line_len(row))
    }

    fn set_cursor_from_char_index(&mut self, idx: usize) {
        let idx = idx.min(self.rope.len_chars());
        let row = self.rope.char_to_line(idx);
        let col = idx - self.rope.line_to_char(row);
        self.cursor = (row, col);
    }

    fn insert_str(&mut self, text: &str) {
        let idx = self.cursor_char_index();
        self.rope.insert(idx, text);
        self.set_cursor_from_char_index(idx + text.chars().count());
    }

    fn delete_backward(&mut self) -> bool {
        let idx = self.cursor_char_index();
        if idx == 0 {
            return false;
        }
        let start = self.previous_boundary(idx);
        self.rope.remove(start..idx);
        self.set_cursor_from_char_index(start);
        true
    }

    fn delete_forward(&mut self) -> bool {
        let idx = self.cursor_char_index();
        if idx >= self.rope.len_chars() {
            return false;
        }
        let end = self.next_boundary(idx);
        self.rope.remove(idx..end);
        self.set_cursor_from_char_index(idx);
        true
    }

    /// Treats `\r\n` as one unit.
    fn previous_boundary(&self, idx: usize) -> usize {
        if idx >= 2 && self.rope.char(idx - 1) == '\n' && self.rope.char(idx - 2) == '\r' {
            idx - 2
        } else {
            idx - 1
        }
    }

    fn next_boundary(&self, idx: usize) -> usize {
        if idx + 1 < self.rope.len_chars()
            && self.rope.char(idx) == '\r'
            && self.rope.char(idx + 1) == '\n'
        {
            idx + 2
        } else {
            idx + 1
        }
    }

    fn move_left(&mut self) {
        let (row, col) = self.cursor;
        if col > 0 {
            self.cursor.1 = col.min(self.line_len(row)).saturating_sub(1);
        } else if row > 0 {
            self.cursor = (row - 1, self.line_len(row - 1));
        }
    }

    fn move_right(&mut self) {
        let (row, col) = self.cursor;
        if col < self.line_len(row) {
            self.cursor.1 = col + 1;
        } else if row + 1 < self.rope.len_lines() {
            self.cursor = (row + 1, 0);
        }
    }

    fn move_vertical(&mut self, delta: isize) {
        let last = self.rope.len_lines().saturating_sub(1);
        let (row, col) = self.cursor;
        let row = if delta < 0 {
            row.saturating_sub(delta.unsigned_abs())
        } else {
            row.saturating_add(delta as usize).min(last)
        };
        self.cursor = (row, col.min(self.line_len(row)));
    }

    fn follow_cursor(&mut self) {
        let height = self.viewport.height.max(1) as usize;
        let (row, _) = self.cursor;

        self.viewport.line_offset = self.viewport.line_offset.min(self.max_line_offset());
        if row < self.viewport.line_offset {
            self.viewport.line_offset = row;
        } else if row >= self.viewport.line_offset + height {
            self.viewport.line_offset = row + 1 - height;
        }

        let cursor_x = self.cursor_display_x();
        let width = self.viewport.width.max(1) as u32;
        if cursor_x < self.viewport.horiz_offset {
            self.viewport.horiz_offset = cursor_x;
        } else if cursor_x >= self.viewport.horiz_offset + width {
            self.viewport.horiz_offset = cursor_x + 1 - width;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/editor.rs"]
mod tests;
