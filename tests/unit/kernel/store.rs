use super::*;
use crate::kernel::WorkspaceOptions;
use std::cell::RefCell;
use std::rc::Rc;

fn new_store() -> Store {
    Store::new(AppState::new(WorkspaceOptions::default()))
}

fn empty_store() -> Store {
    Store::new(AppState::new(WorkspaceOptions {
        seed_default_files: false,
        show_banner: false,
        ..WorkspaceOptions::default()
    }))
}

fn contents(outcome: &CommandOutcome) -> Vec<&str> {
    outcome
        .delta
        .appended
        .iter()
        .map(|m| m.content.as_str())
        .collect()
}

fn names(store: &Store) -> Vec<String> {
    store.files().map(|f| f.name.clone()).collect()
}

#[test]
fn help_echoes_then_prints_help() {
    let mut store = new_store();
    let outcome = store.submit_command("help");
    assert_eq!(contents(&outcome), ["$ help", HELP_TEXT]);
    assert_eq!(outcome.delta.appended[0].kind, MessageKind::User);
    assert_eq!(outcome.delta.appended[1].kind, MessageKind::System);
    assert!(outcome.effects.is_empty());
}

#[test]
fn blank_input_is_ignored() {
    let mut store = new_store();
    let before = store.transcript().len();
    let outcome = store.submit_command("   ");
    assert!(outcome.delta.is_empty());
    assert_eq!(store.transcript().len(), before);
}

#[test]
fn create_adds_file_without_changing_current() {
    let mut store = new_store();
    let outcome = store.submit_command("create app.js");
    assert_eq!(contents(&outcome), ["$ create app.js", "Created file: app.js"]);
    assert_eq!(names(&store), ["example.js", "README.md", "app.js"]);
    assert_eq!(store.files().last().unwrap().content, "// New file\n");
    assert_eq!(store.current_file().unwrap().name, "example.js");
}

#[test]
fn create_duplicate_is_rejected() {
    let mut store = new_store();
    let outcome = store.submit_command("create example.js");
    assert_eq!(
        contents(&outcome),
        ["$ create example.js", "Error: File \"example.js\" already exists"]
    );
    assert_eq!(store.files().count(), 2);
}

#[test]
fn create_keeps_spaces_in_name() {
    let mut store = new_store();
    store.submit_command("create my notes.md");
    assert!(store.state().files.contains("my notes.md"));
}

#[test]
fn missing_argument_mutates_nothing() {
    let mut store = new_store();
    let outcome = store.submit_command("create");
    assert_eq!(contents(&outcome), ["$ create", "Usage: create <filename>"]);
    assert_eq!(store.files().count(), 2);
}

#[test]
fn open_switches_current_file_and_view() {
    let mut store = new_store();
    let outcome = store.submit_command("open README.md");
    assert_eq!(contents(&outcome), ["$ open README.md", "Opened file: README.md"]);
    assert_eq!(store.current_file().unwrap().name, "README.md");
    assert!(store.state().editor.text().starts_with("# AI Code Assistant"));
    assert_eq!(store.active_view(), ViewKind::Editor);
}

#[test]
fn open_missing_file_reports_not_found() {
    let mut store = new_store();
    let outcome = store.submit_command("open nope.js");
    assert_eq!(
        contents(&outcome),
        ["$ open nope.js", "Error: File \"nope.js\" not found"]
    );
    assert_eq!(store.current_file().unwrap().name, "example.js");
    assert_eq!(store.active_view(), ViewKind::Terminal);
}

#[test]
fn list_prints_names_in_order() {
    let mut store = new_store();
    store.submit_command("create b.js");
    let outcome = store.submit_command("list");
    assert_eq!(
        contents(&outcome)[1],
        "Files:\n  example.js\n  README.md\n  b.js"
    );
}

#[test]
fn list_on_empty_workspace() {
    let mut store = empty_store();
    let outcome = store.submit_command("list");
    assert_eq!(contents(&outcome)[1], "Files:\n  (no files)");
}

#[test]
fn delete_current_reassigns_to_first_remaining() {
    let mut store = new_store();
    store.submit_command("create z.js");
    store.submit_command("open README.md");
    let outcome = store.submit_command("delete README.md");
    assert_eq!(contents(&outcome)[1], "Deleted file: README.md");
    assert_eq!(names(&store), ["example.js", "z.js"]);
    assert_eq!(store.current_file().unwrap().name, "example.js");
    assert_eq!(store.state().editor.text(), store.current_file().unwrap().content);
}

#[test]
fn delete_other_file_keeps_current() {
    let mut store = new_store();
    store.submit_command("delete README.md");
    assert_eq!(store.current_file().unwrap().name, "example.js");
}

#[test]
fn delete_last_file_clears_current() {
    let mut store = new_store();
    store.submit_command("delete example.js");
    store.submit_command("delete README.md");
    assert!(store.current_file().is_none());
    assert!(store.state().current_file.is_none());
    assert_eq!(store.state().editor.text(), "");
}

#[test]
fn run_simulates_output() {
    let mut store = new_store();
    let outcome = store.submit_command("run example.js");
    assert_eq!(
        contents(&outcome)[1],
        "Running example.js...\n[Simulated output]\nProcess completed successfully."
    );
    let outcome = store.submit_command("run missing.js");
    assert_eq!(contents(&outcome)[1], "Error: File \"missing.js\" not found");
}

#[test]
fn ai_only_echoes_and_emits_effect() {
    let mut store = new_store();
    let outcome = store.submit_command("ai how do loops work");
    assert_eq!(contents(&outcome), ["$ ai how do loops work"]);
    assert_eq!(
        outcome.effects,
        vec![Effect::AskAssistant(AssistantRequest {
            id: 0,
            query: "how do loops work".to_string(),
        })]
    );

    let outcome = store.submit_command("ai again");
    assert!(matches!(
        outcome.effects.as_slice(),
        [Effect::AskAssistant(AssistantRequest { id: 1, .. })]
    ));
}

#[test]
fn assistant_reply_appends_message() {
    let mut store = new_store();
    let result = store.dispatch(Action::AssistantReplied {
        request_id: 0,
        content: "reply".to_string(),
    });
    assert!(result.state_changed);
    let last = store.transcript().last().unwrap();
    assert_eq!(last.kind, MessageKind::Assistant);
    assert_eq!(last.content, "reply");
}

#[test]
fn clear_empties_transcript_without_echo() {
    let mut store = new_store();
    store.submit_command("help");
    let last_id = store.transcript().last().unwrap().id;

    let outcome = store.submit_command("CLEAR");
    assert!(outcome.delta.cleared);
    assert!(outcome.delta.appended.is_empty());
    assert!(store.transcript().is_empty());

    store.submit_command("list");
    assert!(store.transcript()[0].id > last_id);
}

#[test]
fn clear_notifies_subscribers_once() {
    let mut store = new_store();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    store.submit_command("  clear  ");
    assert_eq!(*events.borrow(), [StoreEvent::TranscriptCleared]);
}

#[test]
fn unknown_command_uses_original_token() {
    let mut store = new_store();
    let outcome = store.submit_command("Hello world");
    assert_eq!(
        contents(&outcome),
        [
            "$ Hello world",
            "Unknown command: Hello. Type \"help\" for available commands."
        ]
    );
}

#[test]
fn input_is_trimmed_before_echo() {
    let mut store = new_store();
    let outcome = store.submit_command("  list  ");
    assert_eq!(contents(&outcome)[0], "$ list");
}

#[test]
fn editor_edits_write_back_to_current_file() {
    let mut store = new_store();
    store.dispatch(Action::Editor(EditorAction::InsertChar('!')));
    let content = &store.current_file().unwrap().content;
    assert!(content.starts_with("!// Welcome"));
    assert_eq!(*content, store.state().editor.text());
}

#[test]
fn editor_edits_without_current_file_are_ignored() {
    let mut store = empty_store();
    let result = store.dispatch(Action::Editor(EditorAction::InsertChar('x')));
    assert!(!result.state_changed);
    assert_eq!(store.state().editor.text(), "");
}

#[test]
fn reopening_current_file_reloads_buffer() {
    let mut store = new_store();
    store.dispatch(Action::Editor(EditorAction::CursorDown));
    store.submit_command("open example.js");
    assert_eq!(store.state().editor.cursor(), (0, 0));
}

#[test]
fn file_list_navigation_and_activation() {
    let mut store = new_store();
    store.dispatch(Action::SetView(ViewKind::Files));

    assert!(store.dispatch(Action::FileListMoveSelection { delta: 1 }).state_changed);
    assert!(!store.dispatch(Action::FileListMoveSelection { delta: 1 }).state_changed);
    assert_eq!(store.state().ui.file_list_selected, 1);

    let before = store.transcript().len();
    store.dispatch(Action::FileListActivate);
    assert_eq!(store.current_file().unwrap().name, "README.md");
    assert_eq!(store.active_view(), ViewKind::Editor);
    assert_eq!(store.transcript().len(), before);
}

#[test]
fn select_unknown_file_is_noop() {
    let mut store = new_store();
    let result = store.dispatch(Action::SelectFile("ghost.js".into()));
    assert!(!result.state_changed);
    assert_eq!(store.current_file().unwrap().name, "example.js");
}

#[test]
fn view_cycling() {
    let mut store = new_store();
    store.dispatch(Action::NextView);
    assert_eq!(store.active_view(), ViewKind::Files);
    store.dispatch(Action::PrevView);
    store.dispatch(Action::PrevView);
    assert_eq!(store.active_view(), ViewKind::Editor);
    assert!(!store.dispatch(Action::SetView(ViewKind::Editor)).state_changed);
}

#[test]
fn subscribers_see_events_until_unsubscribed() {
    let mut store = new_store();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    store.submit_command("create a.js");
    store.submit_command("open a.js");
    {
        let events = seen.borrow();
        assert!(events.contains(&StoreEvent::FilesChanged));
        assert!(events.contains(&StoreEvent::CurrentFileChanged(Some("a.js".into()))));
        assert!(events.contains(&StoreEvent::ViewChanged(ViewKind::Editor)));
        assert!(events
            .iter()
            .any(|e| matches!(e, StoreEvent::MessageAppended { kind: MessageKind::User, .. })));
    }

    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    let count = seen.borrow().len();
    store.submit_command("clear");
    assert_eq!(seen.borrow().len(), count);
}

#[test]
fn edit_emits_file_edited() {
    let mut store = new_store();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    store.dispatch(Action::Editor(EditorAction::InsertNewline));
    store.dispatch(Action::Editor(EditorAction::CursorUp));
    assert_eq!(
        *seen.borrow(),
        vec![StoreEvent::FileEdited("example.js".to_string())]
    );
}
