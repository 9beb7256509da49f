//! Headless workspace core (state/action/effect).
//!
//! Nothing in here depends on a terminal crate; the `app` layer drives the
//! store and executes effects through `services::adapters`.

pub mod action;
pub mod assistant;
pub mod command;
pub mod editor;
pub mod effect;
pub mod files;
pub mod services;
pub mod state;
pub mod store;
pub mod transcript;

pub use action::Action;
pub use assistant::{AssistantRequest, Topic};
pub use command::{CommandError, ShellCommand};
pub use editor::{EditorAction, EditorState};
pub use effect::Effect;
pub use files::{FileKind, FileSet, VirtualFile};
pub use state::{AppState, UiState, ViewKind, WorkspaceOptions};
pub use store::{CommandOutcome, DispatchResult, Store, StoreEvent, SubscriptionId};
pub use transcript::{Message, MessageKind, Transcript, TranscriptDelta};
