//! UI 主题：把可配置的颜色集中管理，避免散落在渲染代码里。

use crate::kernel::services::ports::ThemeSettings;
use crate::kernel::{FileKind, MessageKind};
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    pub header_fg: Color,
    pub tab_active_bg: Color,
    pub tab_active_fg: Color,
    pub tab_inactive_fg: Color,
    pub focus_border: Color,
    pub muted_fg: Color,
    pub user_fg: Color,
    pub system_fg: Color,
    pub assistant_fg: Color,
    pub gutter_fg: Color,
    pub selected_bg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            header_fg: Color::Indexed(6),       // Cyan
            tab_active_bg: Color::Indexed(8),   // DarkGray
            tab_active_fg: Color::Indexed(15),  // White
            tab_inactive_fg: Color::Indexed(8), // DarkGray
            focus_border: Color::Indexed(6),
            muted_fg: Color::Indexed(8),
            user_fg: Color::Indexed(12),      // LightBlue
            system_fg: Color::Indexed(2),     // Green
            assistant_fg: Color::Indexed(13), // LightMagenta
            gutter_fg: Color::Indexed(8),
            selected_bg: Color::Indexed(8),
        }
    }
}

impl UiTheme {
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = Self::default();
        theme.apply_settings(settings);
        theme
    }

    /// Unparseable values keep the current color.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let slots: [(&mut Color, &Option<String>); 11] = [
            (&mut self.header_fg, &settings.header_fg),
            (&mut self.tab_active_bg, &settings.tab_active_bg),
            (&mut self.tab_active_fg, &settings.tab_active_fg),
            (&mut self.tab_inactive_fg, &settings.tab_inactive_fg),
            (&mut self.focus_border, &settings.focus_border),
            (&mut self.muted_fg, &settings.muted_fg),
            (&mut self.user_fg, &settings.user_fg),
            (&mut self.system_fg, &settings.system_fg),
            (&mut self.assistant_fg, &settings.assistant_fg),
            (&mut self.gutter_fg, &settings.gutter_fg),
            (&mut self.selected_bg, &settings.selected_bg),
        ];
        for (slot, value) in slots {
            if let Some(c) = value.as_deref().and_then(parse_color) {
                *slot = c;
            }
        }
    }

    pub fn message_fg(&self, kind: MessageKind) -> Color {
        match kind {
            MessageKind::User => self.user_fg,
            MessageKind::System => self.system_fg,
            MessageKind::Assistant => self.assistant_fg,
        }
    }

    pub fn file_kind_fg(&self, kind: FileKind) -> Color {
        match kind {
            FileKind::JavaScript => Color::Indexed(11),
            FileKind::TypeScript => Color::Indexed(12),
            FileKind::Css => Color::Indexed(13),
            FileKind::Html => Color::Indexed(9),
            FileKind::Markdown => Color::Indexed(15),
            FileKind::Json => Color::Indexed(3),
            FileKind::Python => Color::Indexed(10),
            FileKind::Text => self.muted_fg,
        }
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    let c = match v.to_ascii_lowercase().as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
