use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::kernel::assistant::DEFAULT_REPLY_DELAY;
use crate::kernel::state::{ViewKind, WorkspaceOptions};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub assistant: AssistantSettings,
    #[serde(default)]
    pub workspace: WorkspaceSettings,
    #[serde(default)]
    pub theme: ThemeSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantSettings {
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

impl AssistantSettings {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

fn default_reply_delay_ms() -> u64 {
    DEFAULT_REPLY_DELAY.as_millis() as u64
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSettings {
    #[serde(default = "default_true")]
    pub seed_default_files: bool,
    #[serde(default = "default_true")]
    pub show_banner: bool,
    /// `terminal`, `files` (or `file-list`) or `editor`.
    #[serde(default = "default_start_view")]
    pub start_view: String,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            seed_default_files: true,
            show_banner: true,
            start_view: default_start_view(),
        }
    }
}

impl From<&WorkspaceSettings> for WorkspaceOptions {
    fn from(settings: &WorkspaceSettings) -> Self {
        Self {
            seed_default_files: settings.seed_default_files,
            show_banner: settings.show_banner,
            start_view: ViewKind::parse(&settings.start_view).unwrap_or_else(|| {
                tracing::warn!(value = %settings.start_view, "unknown start_view, using terminal");
                ViewKind::Terminal
            }),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_start_view() -> String {
    ViewKind::Terminal.name().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_active_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_active_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_inactive_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gutter_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_bg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            header_fg: Some("cyan".to_string()),
            tab_active_bg: Some("dark_gray".to_string()),
            tab_active_fg: Some("white".to_string()),
            tab_inactive_fg: Some("dark_gray".to_string()),
            focus_border: Some("cyan".to_string()),
            muted_fg: Some("dark_gray".to_string()),
            user_fg: Some("light_blue".to_string()),
            system_fg: Some("green".to_string()),
            assistant_fg: Some("light_magenta".to_string()),
            gutter_fg: Some("dark_gray".to_string()),
            selected_bg: Some("dark_gray".to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
