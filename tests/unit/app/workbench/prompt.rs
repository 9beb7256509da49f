use super::*;

fn typed(text: &str) -> PromptLine {
    let mut prompt = PromptLine::new();
    for ch in text.chars() {
        prompt.insert_char(ch);
    }
    prompt
}

#[test]
fn editing_at_cursor() {
    let mut prompt = typed("lst");
    prompt.move_left();
    prompt.move_left();
    prompt.insert_char('i');
    assert_eq!(prompt.text(), "list");
    assert_eq!(prompt.cursor(), 2);

    prompt.move_home();
    assert!(!prompt.backspace());
    assert!(prompt.delete());
    assert_eq!(prompt.text(), "ist");
    prompt.move_end();
    assert!(!prompt.delete());
    assert!(prompt.backspace());
    assert_eq!(prompt.text(), "is");
}

#[test]
fn take_records_history_once() {
    let mut prompt = typed("help");
    assert_eq!(prompt.take(), "help");
    assert!(prompt.is_empty());

    prompt.insert_str("help");
    prompt.take();
    prompt.insert_str("   ");
    prompt.take();
    assert_eq!(prompt.history(), ["help"]);
}

#[test]
fn history_browsing_restores_draft() {
    let mut prompt = PromptLine::new();
    prompt.insert_str("list");
    prompt.take();
    prompt.insert_str("help");
    prompt.take();

    prompt.insert_str("dra");
    assert!(prompt.history_prev());
    assert_eq!(prompt.text(), "help");
    assert!(prompt.history_prev());
    assert_eq!(prompt.text(), "list");
    assert!(!prompt.history_prev());

    assert!(prompt.history_next());
    assert_eq!(prompt.text(), "help");
    assert!(prompt.history_next());
    assert_eq!(prompt.text(), "dra");
    assert!(!prompt.history_next());
}

#[test]
fn paste_flattens_line_breaks() {
    let mut prompt = PromptLine::new();
    prompt.insert_str("ai line one\r\nline two");
    assert_eq!(prompt.text(), "ai line one line two");
}

#[test]
fn cursor_display_counts_wide_chars() {
    let prompt = typed("ai 你好");
    assert_eq!(prompt.cursor_display_x(), 7);
}
