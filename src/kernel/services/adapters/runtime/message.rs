#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    AssistantReply { request_id: u64, content: String },
}
