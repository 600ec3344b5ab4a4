//! Error types for Wisdom Sanctuary.

use uuid::Uuid;

use crate::journey::ScreenKind;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Failures of a single call to the remote response service.
///
/// The `Display` text is the human-readable reason shown in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Host unreachable, connection reset, timeout.
    #[error("{0}")]
    Transport(String),

    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// Body could not be decoded into a response.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The service answered with an explicit `error` field.
    #[error("{0}")]
    Remote(String),
}

/// Conversation session errors. None of these alter the transcript.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("A mentor response is still pending")]
    TurnPending,

    #[error("Turn {turn_id} does not belong to the pending turn of session {session_id}")]
    StaleTurn { session_id: Uuid, turn_id: Uuid },
}

/// Screen controller errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("Cannot {event} from the {from} screen")]
    InvalidTransition { from: ScreenKind, event: &'static str },

    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),
}

/// Quiz answering errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("Option {index} does not exist for question {question_id} ({available} options)")]
    OptionOutOfRange {
        question_id: u32,
        index: usize,
        available: usize,
    },

    #[error("Quiz is already complete")]
    AlreadyComplete,
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
