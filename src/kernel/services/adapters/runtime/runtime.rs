use super::message::AppMessage;
use crate::kernel::assistant::{self, AssistantRequest};
use std::io;
use std::sync::mpsc::Sender;
use std::time::Duration;
use tokio::task::JoinHandle;

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
}

/// A pending assistant reply. Dropping it does not cancel the reply.
#[derive(Debug)]
pub struct ReplyHandle {
    request_id: u64,
    task: JoinHandle<()>,
}

impl ReplyHandle {
    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self { runtime, tx })
    }

    /// Replies after `delay` without blocking the caller.
    pub fn ask_assistant(&self, request: AssistantRequest, delay: Duration) -> ReplyHandle {
        let AssistantRequest { id, query } = request;
        let tx = self.tx.clone();
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let content = assistant::respond(&query);
            if tx
                .send(AppMessage::AssistantReply {
                    request_id: id,
                    content,
                })
                .is_err()
            {
                tracing::warn!(request_id = id, "assistant reply dropped: receiver closed");
            }
        });
        tracing::debug!(request_id = id, delay_ms = delay.as_millis() as u64, "assistant request scheduled");
        ReplyHandle {
            request_id: id,
            task,
        }
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime.rs"]
mod tests;
