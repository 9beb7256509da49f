use super::*;

#[test]
fn fresh_state_opens_first_seeded_file() {
    let state = AppState::new(WorkspaceOptions::default());
    assert_eq!(state.files.len(), 2);
    assert_eq!(state.current_file.as_deref(), Some("example.js"));
    assert_eq!(state.editor.text(), state.current().unwrap().content);
    assert_eq!(state.transcript.len(), 1);
    assert_eq!(state.ui.active_view, ViewKind::Terminal);
}

#[test]
fn empty_workspace_has_no_current_file() {
    let state = AppState::new(WorkspaceOptions {
        seed_default_files: false,
        show_banner: false,
        ..WorkspaceOptions::default()
    });
    assert!(state.files.is_empty());
    assert!(state.current_file.is_none());
    assert!(state.current().is_none());
    assert!(state.transcript.is_empty());
    assert_eq!(state.editor.text(), "");
}

#[test]
fn start_view_comes_from_options() {
    let state = AppState::new(WorkspaceOptions {
        start_view: ViewKind::Files,
        ..WorkspaceOptions::default()
    });
    assert_eq!(state.ui.active_view, ViewKind::Files);
}

#[test]
fn view_parse_accepts_aliases() {
    assert_eq!(ViewKind::parse("Terminal"), Some(ViewKind::Terminal));
    assert_eq!(ViewKind::parse("files"), Some(ViewKind::Files));
    assert_eq!(ViewKind::parse("FILE-LIST"), Some(ViewKind::Files));
    assert_eq!(ViewKind::parse(" editor "), Some(ViewKind::Editor));
    assert_eq!(ViewKind::parse("settings"), None);
}

#[test]
fn view_cycle_wraps() {
    assert_eq!(ViewKind::Terminal.next(), ViewKind::Files);
    assert_eq!(ViewKind::Editor.next(), ViewKind::Terminal);
    assert_eq!(ViewKind::Terminal.prev(), ViewKind::Editor);
    for view in ViewKind::ALL {
        assert_eq!(view.next().prev(), view);
        assert_eq!(ViewKind::parse(view.name()), Some(view));
    }
}

#[test]
fn file_selection_clamps_to_list() {
    let mut state = AppState::new(WorkspaceOptions::default());
    state.ui.file_list_selected = 5;
    state.clamp_file_selection();
    assert_eq!(state.ui.file_list_selected, 1);
}
