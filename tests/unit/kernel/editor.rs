use super::*;

fn editor(text: &str) -> EditorState {
    let mut editor = EditorState::new();
    editor.load(text);
    editor
}

#[test]
fn line_numbers_follow_newline_segments() {
    assert_eq!(editor("").line_numbers().collect::<Vec<_>>(), [1]);
    assert_eq!(editor("a").line_numbers().count(), 1);
    assert_eq!(editor("a\nb\nc").line_numbers().count(), 3);
    // A trailing newline opens a new, empty segment.
    assert_eq!(editor("a\n").line_numbers().count(), 2);
}

#[test]
fn only_line_feed_starts_a_new_line() {
    assert_eq!(editor("a\rb").line_numbers().count(), 1);
    assert_eq!(editor("a\u{2028}b\u{0C}c\u{0B}d\u{85}e").line_numbers().count(), 1);
    assert_eq!(editor("a\r\nb").line_numbers().count(), 2);
    assert_eq!(editor("a\rb").line_text(0).as_deref(), Some("a\rb"));
    assert_eq!(editor("a\r\nb").line_text(0).as_deref(), Some("a"));
}

#[test]
fn line_end_skips_unicode_separators() {
    let mut ed = editor("a\u{2028}b\nc");
    ed.apply(EditorAction::CursorLineEnd);
    assert_eq!(ed.cursor(), (0, 3));
    ed.apply(EditorAction::InsertChar('X'));
    assert_eq!(ed.text(), "a\u{2028}bX\nc");
    assert_eq!(ed.cursor(), (0, 4));
}

#[test]
fn insert_and_newline_write_through_text() {
    let mut ed = editor("ab");
    ed.apply(EditorAction::CursorRight);
    assert!(ed.apply(EditorAction::InsertChar('X')));
    assert!(ed.apply(EditorAction::InsertNewline));
    assert_eq!(ed.text(), "aX\nb");
    assert_eq!(ed.cursor(), (1, 0));
}

#[test]
fn tab_inserts_two_spaces() {
    let mut ed = editor("x");
    assert!(ed.apply(EditorAction::InsertTab));
    assert_eq!(ed.text(), "  x");
    assert_eq!(ed.cursor(), (0, 2));
}

#[test]
fn backspace_joins_lines() {
    let mut ed = editor("ab\ncd");
    ed.apply(EditorAction::CursorDown);
    assert!(ed.apply(EditorAction::DeleteBackward));
    assert_eq!(ed.text(), "abcd");
    assert_eq!(ed.cursor(), (0, 2));
}

#[test]
fn backspace_removes_crlf_as_one_unit() {
    let mut ed = editor("a\r\nb");
    ed.apply(EditorAction::CursorDown);
    assert!(ed.apply(EditorAction::DeleteBackward));
    assert_eq!(ed.text(), "ab");
}

#[test]
fn delete_forward_at_end_is_noop() {
    let mut ed = editor("a");
    ed.apply(EditorAction::CursorLineEnd);
    assert!(!ed.apply(EditorAction::DeleteForward));
    assert_eq!(ed.text(), "a");
}

#[test]
fn backspace_at_start_is_noop() {
    let mut ed = editor("abc");
    assert!(!ed.apply(EditorAction::DeleteBackward));
    assert_eq!(ed.text(), "abc");
}

#[test]
fn vertical_motion_clamps_column() {
    let mut ed = editor("long line\nab\nanother long one");
    ed.apply(EditorAction::CursorLineEnd);
    assert_eq!(ed.cursor(), (0, 9));
    ed.apply(EditorAction::CursorDown);
    assert_eq!(ed.cursor(), (1, 2));
    ed.apply(EditorAction::CursorUp);
    assert_eq!(ed.cursor(), (0, 2));
}

#[test]
fn left_and_right_wrap_across_lines() {
    let mut ed = editor("ab\ncd");
    ed.apply(EditorAction::CursorDown);
    ed.apply(EditorAction::CursorLeft);
    assert_eq!(ed.cursor(), (0, 2));
    ed.apply(EditorAction::CursorRight);
    assert_eq!(ed.cursor(), (1, 0));
}

#[test]
fn view_follows_cursor_down_and_up() {
    let text = (1..=50).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
    let mut ed = editor(&text);
    ed.apply(EditorAction::SetViewport {
        width: 20,
        height: 10,
    });

    for _ in 0..15 {
        ed.apply(EditorAction::CursorDown);
    }
    assert_eq!(ed.cursor().0, 15);
    assert_eq!(ed.viewport().line_offset, 6);
    assert!(ed.visible_rows().contains(&15));

    ed.apply(EditorAction::PageUp);
    ed.apply(EditorAction::PageUp);
    assert_eq!(ed.cursor().0, 0);
    assert_eq!(ed.viewport().line_offset, 0);
}

#[test]
fn scroll_moves_view_only_and_clamps() {
    let text = "x\n".repeat(30);
    let mut ed = editor(&text);
    ed.apply(EditorAction::SetViewport {
        width: 20,
        height: 10,
    });

    assert!(!ed.apply(EditorAction::Scroll { delta: 5 }));
    assert_eq!(ed.viewport().line_offset, 5);
    assert_eq!(ed.cursor(), (0, 0));

    ed.apply(EditorAction::Scroll { delta: 1000 });
    assert_eq!(ed.viewport().line_offset, ed.len_lines() - 10);
    ed.apply(EditorAction::Scroll { delta: -1000 });
    assert_eq!(ed.viewport().line_offset, 0);
}

#[test]
fn visible_rows_share_one_offset() {
    let text = "a\n".repeat(40);
    let mut ed = editor(&text);
    ed.apply(EditorAction::SetViewport {
        width: 20,
        height: 8,
    });
    ed.apply(EditorAction::Scroll { delta: 12 });

    let rows: Vec<_> = ed.visible_rows().collect();
    assert_eq!(rows.first(), Some(&12));
    assert_eq!(rows.len(), 8);
    let numbers: Vec<_> = ed.line_numbers().skip(12).take(8).collect();
    assert_eq!(numbers, rows.iter().map(|r| r + 1).collect::<Vec<_>>());
}

#[test]
fn horizontal_offset_keeps_cursor_visible() {
    let mut ed = editor(&"x".repeat(100));
    ed.apply(EditorAction::SetViewport {
        width: 10,
        height: 5,
    });
    ed.apply(EditorAction::CursorLineEnd);
    assert_eq!(ed.cursor_display_x(), 100);
    assert_eq!(ed.viewport().horiz_offset, 91);
    ed.apply(EditorAction::CursorLineStart);
    assert_eq!(ed.viewport().horiz_offset, 0);
}

#[test]
fn wide_chars_count_two_cells() {
    let mut ed = editor("你好a");
    ed.apply(EditorAction::CursorLineEnd);
    assert_eq!(ed.cursor(), (0, 3));
    assert_eq!(ed.cursor_display_x(), 5);
}

#[test]
fn load_resets_cursor_and_view() {
    let mut ed = editor("a\nb\nc");
    ed.apply(EditorAction::CursorDown);
    ed.load("fresh");
    assert_eq!(ed.cursor(), (0, 0));
    assert_eq!(ed.viewport().line_offset, 0);
    assert_eq!(ed.line_text(0).as_deref(), Some("fresh"));
    assert_eq!(ed.line_text(1), None);
}

#[test]
fn edit_classification() {
    assert!(EditorAction::InsertTab.is_edit());
    assert!(EditorAction::InsertText("x".into()).is_edit());
    assert!(!EditorAction::CursorUp.is_edit());
    assert!(!EditorAction::Scroll { delta: 1 }.is_edit());
}
