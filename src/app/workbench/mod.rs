//! 工作台模块：持有 Store，执行 Effect，分发输入并渲染三个视图

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::kernel::services::adapters::{AppMessage, AsyncRuntime, ReplyHandle};
use crate::kernel::services::ports::Settings;
use crate::kernel::{
    Action as KernelAction, AppState, Effect, MessageKind, Store, StoreEvent, ViewKind,
    WorkspaceOptions,
};
use crate::tui::view::{EventResult, View};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

mod input;
mod prompt;
mod render;
mod util;

use prompt::PromptLine;

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const MAX_LOG_DRAIN_PER_TICK: usize = 1024;
const WHEEL_LINES: isize = 3;

pub struct Workbench {
    store: Store,
    runtime: AsyncRuntime,
    reply_delay: Duration,
    pending_replies: Vec<ReplyHandle>,
    theme: UiTheme,
    prompt: PromptLine,
    /// Lines scrolled up from the bottom of the transcript.
    transcript_scroll: usize,
    unread_replies: Rc<Cell<usize>>,
    log_rx: Option<Receiver<String>>,
    last_log: Option<String>,
    last_tab_areas: Vec<(ViewKind, Rect)>,
    last_transcript_area: Option<Rect>,
    last_transcript_max_scroll: usize,
    last_files_area: Option<Rect>,
    last_files_offset: usize,
    last_editor_area: Option<Rect>,
    last_cursor: Option<(u16, u16)>,
}

impl Workbench {
    pub fn new(
        settings: &Settings,
        runtime: AsyncRuntime,
        log_rx: Option<Receiver<String>>,
    ) -> Self {
        let options = WorkspaceOptions::from(&settings.workspace);
        let mut store = Store::new(AppState::new(options));

        let unread_replies = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&unread_replies);
        store.subscribe(move |event| match event {
            StoreEvent::MessageAppended {
                kind: MessageKind::Assistant,
                ..
            } => counter.set(counter.get() + 1),
            StoreEvent::ViewChanged(ViewKind::Terminal) | StoreEvent::TranscriptCleared => {
                counter.set(0)
            }
            _ => {}
        });

        tracing::info!(
            files = store.state().files.len(),
            reply_delay_ms = settings.assistant.reply_delay_ms,
            "workbench ready"
        );

        Self {
            store,
            runtime,
            reply_delay: settings.assistant.reply_delay(),
            pending_replies: Vec::new(),
            theme: UiTheme::from_settings(&settings.theme),
            prompt: PromptLine::new(),
            transcript_scroll: 0,
            unread_replies,
            log_rx,
            last_log: None,
            last_tab_areas: Vec::new(),
            last_transcript_area: None,
            last_transcript_max_scroll: 0,
            last_files_area: None,
            last_files_offset: 0,
            last_editor_area: None,
            last_cursor: None,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn active_view(&self) -> ViewKind {
        self.store.active_view()
    }

    /// Assistant replies that arrived while the terminal view was hidden.
    pub fn unread_replies(&self) -> usize {
        self.unread_replies.get()
    }

    pub fn pending_replies(&self) -> usize {
        self.pending_replies.len()
    }

    pub fn prompt_text(&self) -> String {
        self.prompt.text()
    }

    pub fn last_log(&self) -> Option<&str> {
        self.last_log.as_deref()
    }

    pub fn handle_message(&mut self, msg: AppMessage) -> bool {
        match msg {
            AppMessage::AssistantReply {
                request_id,
                content,
            } => {
                self.pending_replies
                    .retain(|handle| handle.request_id() != request_id);
                self.dispatch_kernel(KernelAction::AssistantReplied {
                    request_id,
                    content,
                })
            }
        }
    }

    /// Called by the main loop between input events.
    pub fn tick(&mut self) -> bool {
        self.pending_replies.retain(|handle| !handle.is_finished());
        self.poll_logs()
    }

    pub(super) fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        if self.store.active_view() == ViewKind::Terminal {
            self.unread_replies.set(0);
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::AskAssistant(request) => {
                let handle = self.runtime.ask_assistant(request, self.reply_delay);
                self.pending_replies.push(handle);
            }
        }
    }

    fn poll_logs(&mut self) -> bool {
        let Some(rx) = self.log_rx.take() else {
            return false;
        };

        let mut changed = false;
        let mut disconnected = false;
        for _ in 0..MAX_LOG_DRAIN_PER_TICK {
            match rx.try_recv() {
                Ok(line) => {
                    self.last_log = Some(line);
                    changed = true;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if !disconnected {
            self.log_rx = Some(rx);
        }
        changed
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        self.last_cursor
    }
}

impl Drop for Workbench {
    fn drop(&mut self) {
        if !self.pending_replies.is_empty() {
            tracing::debug!(
                pending = self.pending_replies.len(),
                "cancelling pending assistant replies"
            );
        }
        for handle in self.pending_replies.drain(..) {
            handle.cancel();
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
