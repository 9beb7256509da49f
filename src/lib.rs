//! codeterm - 终端里的 AI 编码工作区
//!
//! 模块结构：
//! - core: 与终端库无关的输入事件
//! - kernel: 无界面的状态核心（Store / Action / Effect）以及服务适配器
//! - tui: crossterm 事件转换、终端守卫、View trait
//! - app: 应用层（Workbench）

pub mod core;
pub mod kernel;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
