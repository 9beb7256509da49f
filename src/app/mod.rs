//! 应用层：Workbench 把 kernel Store、异步运行时和终端渲染接在一起

pub mod theme;
pub mod workbench;

pub use theme::UiTheme;
pub use workbench::Workbench;
