//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod dirs;
pub mod runtime;
pub mod settings;

pub use dirs::{ensure_log_dir, get_log_dir};
pub use runtime::{AppMessage, AsyncRuntime, ReplyHandle};
pub use settings::{ensure_settings_file, get_settings_path, load_settings, SettingsError};
