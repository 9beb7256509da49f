use super::editor::EditorAction;
use super::state::ViewKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// One line typed into the terminal view.
    Submit(String),
    Editor(EditorAction),
    SetView(ViewKind),
    NextView,
    PrevView,
    /// Same as `open` but without transcript output (file list activation).
    SelectFile(String),
    FileListMoveSelection {
        delta: isize,
    },
    FileListActivate,
    AssistantReplied {
        request_id: u64,
        content: String,
    },
}
