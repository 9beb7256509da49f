use super::assistant::AssistantRequest;

/// Work the store cannot do synchronously; executed by the runtime adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    AskAssistant(AssistantRequest),
}
