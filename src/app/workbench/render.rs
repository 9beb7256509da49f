use super::util;
use super::Workbench;
use crate::kernel::{Action as KernelAction, EditorAction, ViewKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "$ ";

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(super::HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(super::STATUS_HEIGHT),
    ])
    .areas(area);

    workbench.last_cursor = None;
    workbench.last_transcript_area = None;
    workbench.last_files_area = None;
    workbench.last_editor_area = None;

    workbench.render_header(frame, header_area);
    match workbench.store.active_view() {
        ViewKind::Terminal => workbench.render_terminal(frame, body_area),
        ViewKind::Files => workbench.render_files(frame, body_area),
        ViewKind::Editor => workbench.render_editor(frame, body_area),
    }
    workbench.render_status(frame, status_area);

    if let Some(pos) = workbench.last_cursor {
        frame.set_cursor_position(pos);
    }
}

impl Workbench {
    fn render_header(&mut self, frame: &mut Frame, area: Rect) {
        let title = " codeterm ";
        let mut spans = vec![Span::styled(
            title,
            Style::default()
                .fg(self.theme.header_fg)
                .add_modifier(Modifier::BOLD),
        )];

        self.last_tab_areas.clear();
        let active = self.store.active_view();
        let unread = self.unread_replies();
        let mut x = area.x.saturating_add(title.width() as u16);

        for (idx, view) in ViewKind::ALL.into_iter().enumerate() {
            let label = if view == ViewKind::Terminal && unread > 0 {
                format!(" F{} {} ({unread}) ", idx + 1, view.title())
            } else {
                format!(" F{} {} ", idx + 1, view.title())
            };
            let style = if view == active {
                Style::default()
                    .bg(self.theme.tab_active_bg)
                    .fg(self.theme.tab_active_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.tab_inactive_fg)
            };

            let width = label.width() as u16;
            let tab = Rect::new(x, area.y, width, area.height.min(1)).intersection(area);
            if tab.width > 0 {
                self.last_tab_areas.push((view, tab));
            }
            x = x.saturating_add(width + 1);

            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_terminal(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.transcript_scroll > 0 {
            format!(" Terminal [+{}] ", self.transcript_scroll)
        } else {
            " Terminal ".to_string()
        };
        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(self.theme.focus_border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [transcript_area, prompt_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let lines = self.transcript_lines();
        let height = transcript_area.height as usize;
        let max_scroll = lines.len().saturating_sub(height);
        self.last_transcript_max_scroll = max_scroll;
        self.transcript_scroll = self.transcript_scroll.min(max_scroll);
        let start = max_scroll - self.transcript_scroll;

        let visible: Vec<Line<'static>> = lines.into_iter().skip(start).take(height).collect();
        frame.render_widget(Paragraph::new(visible), transcript_area);
        self.last_transcript_area = (transcript_area.height > 0).then_some(transcript_area);

        if prompt_area.width == 0 || prompt_area.height == 0 {
            return;
        }
        let prompt_width = PROMPT.width() as u16;
        let avail = prompt_area.width.saturating_sub(prompt_width).max(1) as usize;
        let cursor_x = self.prompt.cursor_display_x() as usize;
        let skip = cursor_x.saturating_sub(avail - 1);
        let text = util::clip_cells(&self.prompt.text(), skip, avail);

        let line = Line::from(vec![
            Span::styled(
                PROMPT,
                Style::default()
                    .fg(self.theme.user_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(text),
        ]);
        frame.render_widget(Paragraph::new(line), prompt_area);

        let x = prompt_area.x + prompt_width + (cursor_x - skip) as u16;
        if x < prompt_area.right() {
            self.last_cursor = Some((x, prompt_area.y));
        }
    }

    fn transcript_lines(&self) -> Vec<Line<'static>> {
        let muted = Style::default().fg(self.theme.muted_fg);
        let mut lines = Vec::new();
        for (i, message) in self.store.transcript().iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            let fg = self.theme.message_fg(message.kind);
            lines.push(Line::from(vec![
                Span::styled(format!("[{}] ", message.time_label()), muted),
                Span::styled(
                    message.kind.label(),
                    Style::default().fg(fg).add_modifier(Modifier::BOLD),
                ),
            ]));
            for text in message.content.split('\n') {
                lines.push(Line::styled(text.to_string(), Style::default().fg(fg)));
            }
        }
        lines
    }

    fn render_files(&mut self, frame: &mut Frame, area: Rect) {
        let files = &self.store.state().files;
        let block = Block::bordered()
            .title(format!(" Files ({}) ", files.len()))
            .border_style(Style::default().fg(self.theme.focus_border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let muted = Style::default().fg(self.theme.muted_fg);
        if files.is_empty() {
            let hint = Paragraph::new(vec![
                Line::from("No files yet"),
                Line::default(),
                Line::styled("create filename.js", muted),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(hint, inner);
            return;
        }

        let height = inner.height as usize;
        let selected = self.store.state().ui.file_list_selected;
        let mut offset = self.last_files_offset.min(files.len().saturating_sub(height));
        if selected < offset {
            offset = selected;
        } else if height > 0 && selected >= offset + height {
            offset = selected + 1 - height;
        }

        let current = self.store.state().current_file.as_deref();
        let width = inner.width as usize;
        let mut lines = Vec::with_capacity(height);
        for (idx, file) in files.iter().enumerate().skip(offset).take(height) {
            let kind = file.kind();
            let marker = if current == Some(file.name.as_str()) {
                "● "
            } else {
                "  "
            };
            let label = kind.label();
            let used = marker.width() + file.name.width() + label.width() + 1;
            let pad = width.saturating_sub(used).max(1);

            let row_style = if idx == selected {
                Style::default().bg(self.theme.selected_bg)
            } else {
                Style::default()
            };
            lines.push(
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(
                        file.name.clone(),
                        Style::default().fg(self.theme.file_kind_fg(kind)),
                    ),
                    Span::raw(" ".repeat(pad)),
                    Span::styled(label, muted),
                ])
                .style(row_style),
            );
        }
        frame.render_widget(Paragraph::new(lines), inner);

        self.last_files_offset = offset;
        self.last_files_area = (inner.height > 0).then_some(inner);
    }

    fn render_editor(&mut self, frame: &mut Frame, area: Rect) {
        let title = match self.store.current_file() {
            Some(file) => format!(" {} · {} ", file.name, file.kind().label()),
            None => " Editor ".to_string(),
        };
        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(self.theme.focus_border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.store.current_file().is_none() {
            let muted = Style::default().fg(self.theme.muted_fg);
            let hint = Paragraph::new(vec![
                Line::from("No file selected"),
                Line::default(),
                Line::styled("create filename.js", muted),
                Line::styled("open filename.js", muted),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(hint, inner);
            return;
        }

        let gutter_width = util::digits(self.store.state().editor.len_lines()).max(2) + 1;
        let [gutter_area, text_area] = Layout::horizontal([
            Constraint::Length(gutter_width as u16),
            Constraint::Min(0),
        ])
        .areas(inner);
        if text_area.width == 0 || text_area.height == 0 {
            return;
        }

        let viewport = self.store.state().editor.viewport();
        if (viewport.width, viewport.height) != (text_area.width, text_area.height) {
            self.dispatch_kernel(KernelAction::Editor(EditorAction::SetViewport {
                width: text_area.width,
                height: text_area.height,
            }));
        }

        let editor = &self.store.state().editor;
        let viewport = editor.viewport();
        let (cursor_row, _) = editor.cursor();
        let number_width = gutter_width - 1;

        let mut gutter = Vec::new();
        let mut text = Vec::new();
        for row in editor.visible_rows() {
            let number_style = if row == cursor_row {
                Style::default().fg(self.theme.header_fg)
            } else {
                Style::default().fg(self.theme.gutter_fg)
            };
            gutter.push(Line::styled(
                format!("{:>number_width$} ", row + 1),
                number_style,
            ));

            let line = editor.line_text(row).unwrap_or_default();
            text.push(Line::from(util::clip_cells(
                &line,
                viewport.horiz_offset as usize,
                text_area.width as usize,
            )));
        }
        frame.render_widget(Paragraph::new(gutter), gutter_area);
        frame.render_widget(Paragraph::new(text), text_area);

        let cursor_x = editor.cursor_display_x().saturating_sub(viewport.horiz_offset);
        let cursor_y = cursor_row.saturating_sub(viewport.line_offset);
        if cursor_x < text_area.width as u32 && cursor_y < text_area.height as usize {
            self.last_cursor = Some((text_area.x + cursor_x as u16, text_area.y + cursor_y as u16));
        }
        self.last_editor_area = Some(text_area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let muted = Style::default().fg(self.theme.muted_fg);
        let mut spans = Vec::new();

        match self.store.current_file() {
            Some(file) => {
                let (row, col) = self.store.state().editor.cursor();
                spans.push(Span::raw(format!(" {}", file.name)));
                spans.push(Span::styled(" | ", muted));
                spans.push(Span::raw(format!("Ln {}, Col {}", row + 1, col + 1)));
            }
            None => spans.push(Span::styled(" No file", muted)),
        }
        spans.push(Span::styled(" | ", muted));
        spans.push(Span::raw(self.store.active_view().title()));

        if !self.pending_replies.is_empty() {
            spans.push(Span::styled(" | ", muted));
            spans.push(Span::styled(
                "thinking...",
                Style::default().fg(self.theme.assistant_fg),
            ));
        }
        if let Some(log) = self.last_log.as_deref() {
            spans.push(Span::styled(" | ", muted));
            spans.push(Span::styled(log.to_string(), muted));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
