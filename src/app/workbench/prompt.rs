//! Single-line terminal input with submit history.

use unicode_width::UnicodeWidthChar;

const HISTORY_CAP: usize = 100;

#[derive(Debug, Default)]
pub(super) struct PromptLine {
    chars: Vec<char>,
    cursor: usize,
    history: Vec<String>,
    /// Index into `history` while browsing; `None` means editing the draft.
    browsing: Option<usize>,
    draft: String,
}

impl PromptLine {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub(super) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(super) fn history(&self) -> &[String] {
        &self.history
    }

    /// Terminal cells between the start of the line and the cursor.
    pub(super) fn cursor_display_x(&self) -> u16 {
        let width: usize = self.chars[..self.cursor]
            .iter()
            .map(|ch| ch.width().unwrap_or(0))
            .sum();
        width.min(u16::MAX as usize) as u16
    }

    pub(super) fn insert_char(&mut self, ch: char) {
        if ch == '\n' || ch == '\r' {
            return;
        }
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
        self.browsing = None;
    }

    /// Line breaks in pasted text collapse to spaces.
    pub(super) fn insert_str(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '\r' => {}
                '\n' | '\t' => self.insert_char(' '),
                ch => self.insert_char(ch),
            }
        }
    }

    pub(super) fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
        true
    }

    pub(super) fn delete(&mut self) -> bool {
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.chars.remove(self.cursor);
        true
    }

    pub(super) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(super) fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }

    pub(super) fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(super) fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }

    pub(super) fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
        self.browsing = None;
    }

    /// Empties the line and returns it; non-blank lines go into history.
    pub(super) fn take(&mut self) -> String {
        let line = self.text();
        self.clear();
        self.draft.clear();

        if !line.trim().is_empty() && self.history.last() != Some(&line) {
            self.history.push(line.clone());
            if self.history.len() > HISTORY_CAP {
                let overflow = self.history.len() - HISTORY_CAP;
                self.history.drain(..overflow);
            }
        }
        line
    }

    pub(super) fn history_prev(&mut self) -> bool {
        if self.history.is_empty() {
            return false;
        }
        let idx = match self.browsing {
            None => {
                self.draft = self.text();
                self.history.len() - 1
            }
            Some(0) => return false,
            Some(idx) => idx - 1,
        };
        self.browsing = Some(idx);
        let entry = self.history[idx].clone();
        self.replace(&entry);
        true
    }

    pub(super) fn history_next(&mut self) -> bool {
        let Some(idx) = self.browsing else {
            return false;
        };
        if idx + 1 < self.history.len() {
            self.browsing = Some(idx + 1);
            let entry = self.history[idx + 1].clone();
            self.replace(&entry);
        } else {
            self.browsing = None;
            let draft = std::mem::take(&mut self.draft);
            self.replace(&draft);
        }
        true
    }

    fn replace(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.cursor = self.chars.len();
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench/prompt.rs"]
mod tests;
