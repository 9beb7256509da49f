use crate::core::event::{
    InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

pub fn into_input_event(event: crossterm::event::Event) -> InputEvent {
    use crossterm::event::Event;
    match event {
        Event::Key(key) => InputEvent::Key(into_key_event(key)),
        Event::Mouse(mouse) => InputEvent::Mouse(into_mouse_event(mouse)),
        Event::Resize(w, h) => InputEvent::Resize(w, h),
        Event::FocusGained => InputEvent::FocusGained,
        Event::FocusLost => InputEvent::FocusLost,
        Event::Paste(s) => InputEvent::Paste(s),
    }
}

pub fn into_key_event(event: crossterm::event::KeyEvent) -> KeyEvent {
    use crossterm::event::KeyEventKind as Kind;
    let mut modifiers = into_key_modifiers(event.modifiers);
    let code = into_key_code(event.code, &mut modifiers);
    let kind = match event.kind {
        Kind::Press => KeyEventKind::Press,
        Kind::Release => KeyEventKind::Release,
        Kind::Repeat => KeyEventKind::Repeat,
    };
    KeyEvent {
        code,
        modifiers,
        kind,
    }
}

fn into_key_modifiers(mods: crossterm::event::KeyModifiers) -> KeyModifiers {
    use crossterm::event::KeyModifiers as Mods;
    [
        (Mods::SHIFT, KeyModifiers::SHIFT),
        (Mods::CONTROL, KeyModifiers::CONTROL),
        (Mods::ALT, KeyModifiers::ALT),
        (Mods::SUPER, KeyModifiers::SUPER),
    ]
    .into_iter()
    .filter(|(from, _)| mods.contains(*from))
    .fold(KeyModifiers::NONE, |acc, (_, to)| acc | to)
}

fn into_key_code(code: crossterm::event::KeyCode, modifiers: &mut KeyModifiers) -> KeyCode {
    use crossterm::event::KeyCode as Code;
    match code {
        Code::Char(ch) => KeyCode::Char(ch),
        Code::Enter => KeyCode::Enter,
        Code::Tab => KeyCode::Tab,
        Code::BackTab => {
            *modifiers |= KeyModifiers::SHIFT;
            KeyCode::BackTab
        }
        Code::Esc => KeyCode::Esc,
        Code::Backspace => KeyCode::Backspace,
        Code::Delete => KeyCode::Delete,
        Code::Up => KeyCode::Up,
        Code::Down => KeyCode::Down,
        Code::Left => KeyCode::Left,
        Code::Right => KeyCode::Right,
        Code::Home => KeyCode::Home,
        Code::End => KeyCode::End,
        Code::PageUp => KeyCode::PageUp,
        Code::PageDown => KeyCode::PageDown,
        Code::F(n) => KeyCode::F(n),
        _ => KeyCode::Unknown,
    }
}

pub fn into_mouse_event(event: crossterm::event::MouseEvent) -> MouseEvent {
    use crossterm::event::MouseEventKind as Kind;
    let button = |b: crossterm::event::MouseButton| match b {
        crossterm::event::MouseButton::Left => MouseButton::Left,
        crossterm::event::MouseButton::Right => MouseButton::Right,
        crossterm::event::MouseButton::Middle => MouseButton::Middle,
    };
    let kind = match event.kind {
        Kind::Down(b) => MouseEventKind::Down(button(b)),
        Kind::Up(b) => MouseEventKind::Up(button(b)),
        Kind::Drag(b) => MouseEventKind::Drag(button(b)),
        Kind::Moved => MouseEventKind::Moved,
        Kind::ScrollUp => MouseEventKind::ScrollUp,
        Kind::ScrollDown => MouseEventKind::ScrollDown,
        Kind::ScrollLeft => MouseEventKind::ScrollLeft,
        Kind::ScrollRight => MouseEventKind::ScrollRight,
    };
    MouseEvent {
        kind,
        column: event.column,
        row: event.row,
        modifiers: into_key_modifiers(event.modifiers),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
