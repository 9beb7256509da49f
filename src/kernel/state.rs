use super::editor::EditorState;
use super::files::{FileSet, VirtualFile};
use super::transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKind {
    #[default]
    Terminal,
    Files,
    Editor,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::Terminal, ViewKind::Files, ViewKind::Editor];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "terminal" => Some(ViewKind::Terminal),
            "files" | "file-list" => Some(ViewKind::Files),
            "editor" => Some(ViewKind::Editor),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ViewKind::Terminal => "terminal",
            ViewKind::Files => "files",
            ViewKind::Editor => "editor",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewKind::Terminal => "Terminal",
            ViewKind::Files => "Files",
            ViewKind::Editor => "Editor",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ViewKind::Terminal => 0,
            ViewKind::Files => 1,
            ViewKind::Editor => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceOptions {
    pub seed_default_files: bool,
    pub show_banner: bool,
    pub start_view: ViewKind,
}

impl Default for WorkspaceOptions {
    fn default() -> Self {
        Self {
            seed_default_files: true,
            show_banner: true,
            start_view: ViewKind::Terminal,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub active_view: ViewKind,
    pub file_list_selected: usize,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub files: FileSet,
    /// Always names an existing file, or is `None`.
    pub current_file: Option<String>,
    pub transcript: Transcript,
    pub editor: EditorState,
    pub ui: UiState,
    pub next_request_id: u64,
}

impl AppState {
    pub fn new(options: WorkspaceOptions) -> Self {
        let files = if options.seed_default_files {
            FileSet::seeded()
        } else {
            FileSet::new()
        };
        let transcript = if options.show_banner {
            Transcript::with_banner()
        } else {
            Transcript::new()
        };

        let mut state = Self {
            current_file: files.first().map(|f| f.name.clone()),
            files,
            transcript,
            editor: EditorState::new(),
            ui: UiState {
                active_view: options.start_view,
                ..UiState::default()
            },
            next_request_id: 0,
        };
        state.reload_editor();
        state
    }

    pub fn current(&self) -> Option<&VirtualFile> {
        self.current_file
            .as_deref()
            .and_then(|name| self.files.get(name))
    }

    pub(super) fn reload_editor(&mut self) {
        let content = self.current().map(|f| f.content.clone());
        match content {
            Some(content) => self.editor.load(&content),
            None => self.editor.clear(),
        }
    }

    pub(super) fn clamp_file_selection(&mut self) {
        let len = self.files.len();
        self.ui.file_list_selected = self.ui.file_list_selected.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
