use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

pub(super) fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

pub(super) fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// Drops the first `skip` cells of `text` and keeps at most `width` cells.
/// A wide char straddling either edge is dropped.
pub(super) fn clip_cells(text: &str, skip: usize, width: usize) -> String {
    let mut out = String::new();
    let mut col = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        let start = col;
        col += w;
        if start < skip {
            continue;
        }
        if col - skip > width {
            break;
        }
        out.push(ch);
    }
    out
}
