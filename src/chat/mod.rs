pub mod conversation;
pub mod message;
pub mod shell;

pub use conversation::{Conversation, PendingReply, PendingVoice};
pub use message::{ChatMessage, MessageKind, Sender};
pub use shell::{ChatShell, Timing, Wake};
