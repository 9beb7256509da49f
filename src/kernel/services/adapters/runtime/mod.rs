//! Async runtime adapter: executes effects off the UI loop and sends messages back.

mod message;
mod runtime;

pub use message::AppMessage;
pub use runtime::{AsyncRuntime, ReplyHandle};
