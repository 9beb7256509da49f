use super::assistant::AssistantRequest;
use super::command::{unknown_command_message, CommandError, ShellCommand, HELP_TEXT};
use super::files::{VirtualFile, NEW_FILE_CONTENT};
use super::transcript::{Message, MessageKind, TranscriptDelta};
use super::{Action, AppState, EditorAction, Effect, ViewKind};

pub type SubscriptionId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    MessageAppended { id: u64, kind: MessageKind },
    TranscriptCleared,
    FilesChanged,
    CurrentFileChanged(Option<String>),
    ViewChanged(ViewKind),
    FileEdited(String),
}

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    pub delta: TranscriptDelta,
    pub effects: Vec<Effect>,
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

pub struct Store {
    state: AppState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn files(&self) -> impl Iterator<Item = &VirtualFile> {
        self.state.files.iter()
    }

    pub fn current_file(&self) -> Option<&VirtualFile> {
        self.state.current()
    }

    pub fn transcript(&self) -> &[Message] {
        self.state.transcript.messages()
    }

    pub fn active_view(&self) -> ViewKind {
        self.state.ui.active_view
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Submit(line) => {
                let outcome = self.submit_command(&line);
                DispatchResult {
                    state_changed: !outcome.delta.is_empty(),
                    effects: outcome.effects,
                }
            }
            Action::Editor(editor_action) => self.dispatch_editor(editor_action),
            Action::SetView(view) => DispatchResult::changed(self.set_view(view)),
            Action::NextView => {
                let next = self.state.ui.active_view.next();
                DispatchResult::changed(self.set_view(next))
            }
            Action::PrevView => {
                let prev = self.state.ui.active_view.prev();
                DispatchResult::changed(self.set_view(prev))
            }
            Action::SelectFile(name) => DispatchResult::changed(self.select_file(&name)),
            Action::FileListMoveSelection { delta } => {
                let len = self.state.files.len();
                if len == 0 {
                    return DispatchResult::unchanged();
                }
                let prev = self.state.ui.file_list_selected;
                let next = if delta < 0 {
                    prev.saturating_sub(delta.unsigned_abs())
                } else {
                    prev.saturating_add(delta as usize).min(len - 1)
                };
                self.state.ui.file_list_selected = next;
                DispatchResult::changed(next != prev)
            }
            Action::FileListActivate => {
                let name = self
                    .state
                    .files
                    .iter()
                    .nth(self.state.ui.file_list_selected)
                    .map(|f| f.name.clone());
                match name {
                    Some(name) => DispatchResult::changed(self.select_file(&name)),
                    None => DispatchResult::unchanged(),
                }
            }
            Action::AssistantReplied {
                request_id,
                content,
            } => {
                tracing::debug!(request_id, "assistant reply delivered");
                let mut delta = TranscriptDelta::default();
                self.append(&mut delta, MessageKind::Assistant, content);
                DispatchResult::changed(true)
            }
        }
    }

    /// Runs one typed line and reports what it appended to the transcript.
    pub fn submit_command(&mut self, line: &str) -> CommandOutcome {
        let line = line.trim();
        let mut outcome = CommandOutcome::default();
        if line.is_empty() {
            return outcome;
        }

        let parsed = ShellCommand::parse(line);
        // `clear` wipes history instead of echoing itself.
        if !matches!(parsed, Ok(ShellCommand::Clear)) {
            self.append(&mut outcome.delta, MessageKind::User, format!("$ {line}"));
        }

        let result = parsed.and_then(|cmd| {
            tracing::debug!(command = cmd.name(), "shell command");
            self.execute(cmd, &mut outcome)
        });
        if let Err(err) = result {
            tracing::debug!(error = %err, "shell command rejected");
            self.append(&mut outcome.delta, MessageKind::System, err.to_string());
        }

        outcome
    }

    /// Every precondition is checked before the first mutation.
    fn execute(
        &mut self,
        cmd: ShellCommand,
        outcome: &mut CommandOutcome,
    ) -> Result<(), CommandError> {
        let delta = &mut outcome.delta;
        match cmd {
            ShellCommand::Help => {
                self.append(delta, MessageKind::System, HELP_TEXT);
            }
            ShellCommand::List => {
                let listing = self
                    .state
                    .files
                    .names()
                    .map(|name| format!("  {name}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                let listing = if listing.is_empty() {
                    "  (no files)".to_string()
                } else {
                    listing
                };
                self.append(delta, MessageKind::System, format!("Files:\n{listing}"));
            }
            ShellCommand::Create(name) => {
                if self.state.files.contains(&name) {
                    return Err(CommandError::AlreadyExists(name));
                }
                self.state
                    .files
                    .insert(VirtualFile::new(name.clone(), NEW_FILE_CONTENT));
                self.emit(StoreEvent::FilesChanged);
                self.append(delta, MessageKind::System, format!("Created file: {name}"));
            }
            ShellCommand::Open(name) => {
                self.require_file(&name)?;
                self.set_current(Some(name.clone()));
                self.set_view(ViewKind::Editor);
                self.append(delta, MessageKind::System, format!("Opened file: {name}"));
            }
            ShellCommand::Delete(name) => {
                self.require_file(&name)?;
                self.state.files.remove(&name);
                self.state.clamp_file_selection();
                self.emit(StoreEvent::FilesChanged);
                if self.state.current_file.as_deref() == Some(name.as_str()) {
                    let next = self.state.files.first().map(|f| f.name.clone());
                    self.set_current(next);
                }
                self.append(delta, MessageKind::System, format!("Deleted file: {name}"));
            }
            ShellCommand::Run(name) => {
                self.require_file(&name)?;
                self.append(
                    delta,
                    MessageKind::System,
                    format!("Running {name}...\n[Simulated output]\nProcess completed successfully."),
                );
            }
            ShellCommand::Ai(query) => {
                let id = self.state.next_request_id;
                self.state.next_request_id += 1;
                outcome
                    .effects
                    .push(Effect::AskAssistant(AssistantRequest { id, query }));
            }
            ShellCommand::Clear => {
                self.state.transcript.clear();
                delta.cleared = true;
                self.emit(StoreEvent::TranscriptCleared);
            }
            ShellCommand::Unknown(token) => {
                self.append(delta, MessageKind::System, unknown_command_message(&token));
            }
        }
        Ok(())
    }

    fn dispatch_editor(&mut self, action: EditorAction) -> DispatchResult {
        let Some(name) = self.state.current_file.clone() else {
            if action.is_edit() {
                return DispatchResult::unchanged();
            }
            self.state.editor.apply(action);
            return DispatchResult::changed(true);
        };

        if !self.state.editor.apply(action) {
            return DispatchResult::changed(true);
        }

        let text = self.state.editor.text();
        if let Some(file) = self.state.files.get_mut(&name) {
            file.content = text;
        }
        self.emit(StoreEvent::FileEdited(name));
        DispatchResult::changed(true)
    }

    fn require_file(&self, name: &str) -> Result<(), CommandError> {
        if self.state.files.contains(name) {
            Ok(())
        } else {
            Err(CommandError::NotFound(name.to_string()))
        }
    }

    fn select_file(&mut self, name: &str) -> bool {
        let Some(idx) = self.state.files.names().position(|n| n == name) else {
            tracing::warn!(file = name, "select_file: no such file");
            return false;
        };
        self.state.ui.file_list_selected = idx;
        self.set_current(Some(name.to_string()));
        self.set_view(ViewKind::Editor);
        true
    }

    /// Always reloads the editor, even when the file is already current.
    fn set_current(&mut self, name: Option<String>) {
        let changed = self.state.current_file != name;
        self.state.current_file = name;
        self.state.reload_editor();
        if changed {
            self.emit(StoreEvent::CurrentFileChanged(
                self.state.current_file.clone(),
            ));
        }
    }

    fn set_view(&mut self, view: ViewKind) -> bool {
        if self.state.ui.active_view == view {
            return false;
        }
        self.state.ui.active_view = view;
        self.emit(StoreEvent::ViewChanged(view));
        true
    }

    fn append(&mut self, delta: &mut TranscriptDelta, kind: MessageKind, content: impl Into<String>) {
        let message = self.state.transcript.push(kind, content).clone();
        self.emit(StoreEvent::MessageAppended {
            id: message.id,
            kind,
        });
        delta.appended.push(message);
    }

    fn emit(&mut self, event: StoreEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
