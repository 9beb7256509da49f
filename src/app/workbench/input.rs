use super::util;
use super::Workbench;
use crate::core::event::{
    InputEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crate::kernel::{Action as KernelAction, EditorAction, ViewKind};
use crate::tui::view::EventResult;
use ratatui::layout::Rect;

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(key) if key.is_press() => workbench.handle_key_event(key),
        InputEvent::Key(_) => EventResult::Ignored,
        InputEvent::Paste(text) => workbench.handle_paste(text),
        InputEvent::Mouse(mouse) => workbench.handle_mouse_event(mouse),
        InputEvent::Resize(..) => EventResult::Consumed,
        InputEvent::FocusGained | InputEvent::FocusLost => EventResult::Ignored,
    }
}

fn consumed(changed: bool) -> EventResult {
    if changed {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

/// Plain text input: no Ctrl/Alt held.
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(ch)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            Some(ch)
        }
        _ => None,
    }
}

impl Workbench {
    pub(super) fn handle_key_event(&mut self, key: &KeyEvent) -> EventResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let view = self.store.active_view();

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => return EventResult::Quit,
            KeyCode::F(n @ 1..=3) => {
                let target = ViewKind::ALL[(n - 1) as usize];
                self.dispatch_kernel(KernelAction::SetView(target));
                return EventResult::Consumed;
            }
            KeyCode::BackTab => {
                self.dispatch_kernel(KernelAction::PrevView);
                return EventResult::Consumed;
            }
            KeyCode::Tab if view != ViewKind::Editor => {
                self.dispatch_kernel(KernelAction::NextView);
                return EventResult::Consumed;
            }
            KeyCode::Esc if view != ViewKind::Terminal => {
                self.dispatch_kernel(KernelAction::SetView(ViewKind::Terminal));
                return EventResult::Consumed;
            }
            _ => {}
        }

        match view {
            ViewKind::Terminal => self.handle_terminal_key(key),
            ViewKind::Files => self.handle_files_key(key),
            ViewKind::Editor => self.handle_editor_key(key),
        }
    }

    fn handle_terminal_key(&mut self, key: &KeyEvent) -> EventResult {
        if let Some(ch) = typed_char(key) {
            self.prompt.insert_char(ch);
            return EventResult::Consumed;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => {
                let line = self.prompt.take();
                self.transcript_scroll = 0;
                self.dispatch_kernel(KernelAction::Submit(line));
                EventResult::Consumed
            }
            KeyCode::Backspace => consumed(self.prompt.backspace()),
            KeyCode::Delete => consumed(self.prompt.delete()),
            KeyCode::Left => {
                self.prompt.move_left();
                EventResult::Consumed
            }
            KeyCode::Right => {
                self.prompt.move_right();
                EventResult::Consumed
            }
            KeyCode::Home => {
                self.prompt.move_home();
                EventResult::Consumed
            }
            KeyCode::Char('a') if ctrl => {
                self.prompt.move_home();
                EventResult::Consumed
            }
            KeyCode::End => {
                self.prompt.move_end();
                EventResult::Consumed
            }
            KeyCode::Char('e') if ctrl => {
                self.prompt.move_end();
                EventResult::Consumed
            }
            KeyCode::Char('u') if ctrl => {
                self.prompt.clear();
                EventResult::Consumed
            }
            KeyCode::Esc => {
                if self.prompt.is_empty() {
                    return EventResult::Ignored;
                }
                self.prompt.clear();
                EventResult::Consumed
            }
            KeyCode::Up => consumed(self.prompt.history_prev()),
            KeyCode::Down => consumed(self.prompt.history_next()),
            KeyCode::PageUp => {
                let page = self.transcript_page() as isize;
                self.scroll_transcript(page);
                EventResult::Consumed
            }
            KeyCode::PageDown => {
                let page = self.transcript_page() as isize;
                self.scroll_transcript(-page);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_files_key(&mut self, key: &KeyEvent) -> EventResult {
        let len = self.store.state().files.len() as isize;
        let action = match key.code {
            KeyCode::Up | KeyCode::Char('k') => KernelAction::FileListMoveSelection { delta: -1 },
            KeyCode::Down | KeyCode::Char('j') => KernelAction::FileListMoveSelection { delta: 1 },
            KeyCode::Home => KernelAction::FileListMoveSelection { delta: -len },
            KeyCode::End => KernelAction::FileListMoveSelection { delta: len },
            KeyCode::Enter => KernelAction::FileListActivate,
            _ => return EventResult::Ignored,
        };
        self.dispatch_kernel(action);
        EventResult::Consumed
    }

    fn handle_editor_key(&mut self, key: &KeyEvent) -> EventResult {
        if self.store.current_file().is_none() {
            return EventResult::Ignored;
        }

        let action = if let Some(ch) = typed_char(key) {
            EditorAction::InsertChar(ch)
        } else {
            match key.code {
                KeyCode::Enter => EditorAction::InsertNewline,
                KeyCode::Tab => EditorAction::InsertTab,
                KeyCode::Backspace => EditorAction::DeleteBackward,
                KeyCode::Delete => EditorAction::DeleteForward,
                KeyCode::Left => EditorAction::CursorLeft,
                KeyCode::Right => EditorAction::CursorRight,
                KeyCode::Up => EditorAction::CursorUp,
                KeyCode::Down => EditorAction::CursorDown,
                KeyCode::Home => EditorAction::CursorLineStart,
                KeyCode::End => EditorAction::CursorLineEnd,
                KeyCode::PageUp => EditorAction::PageUp,
                KeyCode::PageDown => EditorAction::PageDown,
                _ => return EventResult::Ignored,
            }
        };
        self.dispatch_kernel(KernelAction::Editor(action));
        EventResult::Consumed
    }

    pub(super) fn handle_paste(&mut self, text: &str) -> EventResult {
        match self.store.active_view() {
            ViewKind::Terminal => {
                self.prompt.insert_str(text);
                EventResult::Consumed
            }
            ViewKind::Editor if self.store.current_file().is_some() => {
                let text = text.replace("\r\n", "\n");
                self.dispatch_kernel(KernelAction::Editor(EditorAction::InsertText(text)));
                EventResult::Consumed
            }
            ViewKind::Editor | ViewKind::Files => EventResult::Ignored,
        }
    }

    pub(super) fn handle_mouse_event(&mut self, event: &MouseEvent) -> EventResult {
        let (x, y) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let tab = self
                    .last_tab_areas
                    .iter()
                    .find(|(_, area)| util::rect_contains(*area, x, y))
                    .map(|(view, _)| *view);
                if let Some(view) = tab {
                    self.dispatch_kernel(KernelAction::SetView(view));
                    return EventResult::Consumed;
                }
                self.click_file_row(x, y)
            }
            MouseEventKind::ScrollUp => self.scroll_at(x, y, -super::WHEEL_LINES),
            MouseEventKind::ScrollDown => self.scroll_at(x, y, super::WHEEL_LINES),
            _ => EventResult::Ignored,
        }
    }

    fn click_file_row(&mut self, x: u16, y: u16) -> EventResult {
        let Some(area) = self.last_files_area else {
            return EventResult::Ignored;
        };
        if self.store.active_view() != ViewKind::Files || !util::rect_contains(area, x, y) {
            return EventResult::Ignored;
        }
        let index = self.last_files_offset + (y - area.y) as usize;
        let Some(name) = self
            .store
            .state()
            .files
            .iter()
            .nth(index)
            .map(|f| f.name.clone())
        else {
            return EventResult::Ignored;
        };
        self.dispatch_kernel(KernelAction::SelectFile(name));
        EventResult::Consumed
    }

    /// `delta` is in lines, negative scrolls up.
    fn scroll_at(&mut self, x: u16, y: u16, delta: isize) -> EventResult {
        let hit = |area: Option<Rect>| area.is_some_and(|a| util::rect_contains(a, x, y));
        match self.store.active_view() {
            ViewKind::Terminal if hit(self.last_transcript_area) => {
                self.scroll_transcript(-delta);
                EventResult::Consumed
            }
            ViewKind::Files if hit(self.last_files_area) => {
                let step = delta.signum();
                consumed(self.dispatch_kernel(KernelAction::FileListMoveSelection { delta: step }))
            }
            ViewKind::Editor if hit(self.last_editor_area) => {
                self.dispatch_kernel(KernelAction::Editor(EditorAction::Scroll { delta }));
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn transcript_page(&self) -> usize {
        self.last_transcript_area
            .map(|a| a.height.saturating_sub(1) as usize)
            .unwrap_or(1)
            .max(1)
    }

    /// Positive `lines` moves back in history.
    fn scroll_transcript(&mut self, lines: isize) {
        let next = if lines < 0 {
            self.transcript_scroll.saturating_sub(lines.unsigned_abs())
        } else {
            self.transcript_scroll.saturating_add(lines as usize)
        };
        self.transcript_scroll = next.min(self.last_transcript_max_scroll);
    }
}
