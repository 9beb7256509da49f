use chrono::{DateTime, Local};

pub const BANNER: &str = "AI Code Assistant v1.0.0 initialized.\nType \"help\" for available commands.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    User,
    System,
    Assistant,
}

impl MessageKind {
    pub fn label(self) -> &'static str {
        match self {
            MessageKind::User => "user",
            MessageKind::System => "system",
            MessageKind::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub kind: MessageKind,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl Message {
    /// Display-only clock time, e.g. `14:03:59`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// What a single submission did to the transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptDelta {
    pub cleared: bool,
    pub appended: Vec<Message>,
}

impl TranscriptDelta {
    pub fn is_empty(&self) -> bool {
        !self.cleared && self.appended.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_banner() -> Self {
        let mut transcript = Self::new();
        transcript.push(MessageKind::System, BANNER);
        transcript
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn push(&mut self, kind: MessageKind, content: impl Into<String>) -> &Message {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.messages.push(Message {
            id,
            kind,
            content: content.into(),
            timestamp: Local::now(),
        });
        let idx = self.messages.len() - 1;
        &self.messages[idx]
    }

    /// Ids keep counting across clears.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/transcript.rs"]
mod tests;
