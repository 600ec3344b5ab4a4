//! Conversation with the matched mentor: transcript records and the
//! single-flight session controller.

pub mod message;
pub mod session;

pub use message::{ChatMessage, Role};
pub use session::{ConversationSession, PendingTurn, TurnOutcome, apology, greeting};
