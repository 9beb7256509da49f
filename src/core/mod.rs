//! 核心类型：与终端库无关的输入事件定义

pub mod event;

pub use event::{InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
